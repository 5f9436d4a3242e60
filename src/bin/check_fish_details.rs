// src/bin/check_fish_details.rs

use anyhow::Result;
use fishbase_inspect::{
    error::print_diagnostic,
    fish, inspect,
    loader::{self, load_table},
    logging,
    report::truncate,
    InspectorConfig,
};
use std::{env, path::Path, process::exit};

const SAMPLES_PER_COLUMN: usize = 3;

fn rule() {
    println!("\n{}\n", "=".repeat(50));
}

fn main() {
    logging::init();

    // Optional argument: YAML config file.
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
    let species = load_table(&cfg.species_path)?;

    println!("columns of {}:", cfg.species_path.display());
    for (i, name) in inspect::list_columns(&species) {
        println!("{:3}. {}", i + 1, name);
    }

    rule();

    println!("description-like columns:");
    for col in fish::DESCRIPTION_COLUMNS {
        if !species.has_column(col) {
            continue;
        }
        let filled = inspect::non_null_count(&species, col);
        println!("\n{}: {} non-null", col, filled);
        for (i, v) in inspect::sample_values(&species, col, SAMPLES_PER_COLUMN)
            .iter()
            .enumerate()
        {
            println!("  e.g. {}: {}", i + 1, truncate(&v.to_string(), cfg.max_field_width));
        }
    }

    rule();
    println!("all fields of SpecCode {}:", fish::PACIFIC_BLUEFIN);
    let hit = fish::species_by_code(&species, fish::PACIFIC_BLUEFIN)?;
    match hit.row(0) {
        Some(row) => {
            for (name, value) in inspect::non_empty_fields(&row) {
                println!("{}: {}", name, value);
            }
        }
        None => println!("(not present)"),
    }

    if loader::exists(&cfg.ecology_path) {
        rule();
        println!(
            "{} exists; load it to inspect ecology data as well.",
            cfg.ecology_path.display()
        );
    } else {
        println!("\n{} not found (optional).", cfg.ecology_path.display());
    }
    Ok(())
}
