// src/bin/check_parquet.rs

use fishbase_inspect::{check, error::print_diagnostic, logging, InspectorConfig, Reporter};
use std::{env, io, path::PathBuf, process::exit};

fn main() {
    logging::init();

    // Zero or one argument: the Parquet file to check.
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [PARQUET_FILE]", args[0]);
        exit(2);
    }

    let cfg = match InspectorConfig::load(None) {
        Ok(cfg) => cfg,
        Err(e) => {
            print_diagnostic(&e);
            exit(1);
        }
    };
    let files: Vec<PathBuf> = match args.get(1) {
        Some(f) => vec![PathBuf::from(f)],
        None => cfg.default_files().iter().map(|p| p.to_path_buf()).collect(),
    };

    let reporter = Reporter::from_config(&cfg);
    let status = check::check_files(&mut io::stdout().lock(), &files, &reporter);
    exit(status);
}
