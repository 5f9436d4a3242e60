// src/bin/search_tuna.rs

use anyhow::Result;
use fishbase_inspect::{
    error::print_diagnostic,
    fish::{self, NAME_COLUMNS},
    loader::load_table,
    logging, semi_join, CaseMode, InspectorConfig, Reporter,
};
use std::{env, path::Path, process::exit};
use tracing::debug;

const GENUS_ROWS: usize = 10;
const NAME_LIST_ROWS: usize = 20;

fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [CONFIG_YAML]", args[0]);
        exit(2);
    }

    if let Err(e) = run(args.get(1).map(Path::new)) {
        print_diagnostic(&e);
        exit(1);
    }
}

fn run(config: Option<&Path>) -> Result<()> {
    let cfg = InspectorConfig::load(config)?;
    let comnames = load_table(&cfg.comnames_path)?;
    let species = load_table(&cfg.species_path)?;
    let reporter = Reporter::from_config(&cfg);

    let jp = fish::japanese_names(&comnames)?;

    println!("tuna keyword search:");
    for keyword in fish::TUNA_KEYWORDS {
        let hits = fish::search_names(&jp, keyword, CaseMode::Insensitive)?;
        if hits.is_empty() {
            debug!(keyword, "no hits");
            continue;
        }
        println!("\n'{}':", keyword);
        reporter.print_table(&hits, &[fish::COM_NAME, fish::SPEC_CODE]);
    }

    println!("\n\ngenus {}:", fish::TUNA_GENUS);
    let thunnus = fish::species_in_genus(&species, fish::TUNA_GENUS)?;
    println!("species in genus: {}", thunnus.num_rows());
    reporter.with_max_rows(GENUS_ROWS).print_table(
        &thunnus,
        &[fish::SPEC_CODE, fish::SPECIES, fish::FB_NAME],
    );

    if !thunnus.is_empty() {
        let named = semi_join(&jp, fish::SPEC_CODE, &thunnus, fish::SPEC_CODE)?;
        println!("\nJapanese names for {}: {}", fish::TUNA_GENUS, named.num_rows());
        reporter
            .with_max_rows(NAME_LIST_ROWS)
            .print_table(&named, &NAME_COLUMNS);
    }
    Ok(())
}
