// src/bin/check_japanese_fish.rs

use anyhow::Result;
use fishbase_inspect::{
    error::print_diagnostic,
    fish::{self, NAME_COLUMNS},
    loader::load_table,
    logging, CaseMode, InspectorConfig, Record, Reporter, Value,
};
use std::{env, path::Path, process::exit};

const MAGURO: &str = "マグロ";
const NAME_LIST_ROWS: usize = 20;
const EXAMPLES_PER_FISH: usize = 3;

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

fn field(r: &impl Record, column: &str) -> String {
    r.get(column).unwrap_or(Value::Null).to_string()
}

fn run(config: Option<&Path>) -> Result<()> {
    let cfg = InspectorConfig::load(config)?;
    let comnames = load_table(&cfg.comnames_path)?;
    let species = load_table(&cfg.species_path)?;
    let reporter = Reporter::from_config(&cfg);

    println!("data summary:");
    print!("{}", fish::summarize(&species, &comnames)?);
    println!();

    let jp = fish::japanese_names(&comnames)?;
    let maguro = fish::search_names(&jp, MAGURO, CaseMode::Sensitive)?;

    println!("names containing \"{}\":", MAGURO);
    reporter
        .with_max_rows(NAME_LIST_ROWS)
        .print_table(&maguro, &NAME_COLUMNS);

    // details for the first hit only
    let first = maguro.head(1);
    if let Some(hit) = fish::with_species(&first, &species).first() {
        println!("\n\nSpecCode {} details:", field(hit, fish::SPEC_CODE));
        println!(
            "scientific name: {} {}",
            field(hit, fish::GENUS),
            field(hit, fish::SPECIES)
        );
        println!("family code:     {}", field(hit, fish::FAM_CODE));
        println!("English name:    {}", field(hit, fish::FB_NAME));
    }

    println!("\n\npopular fish:");
    for name in fish::POPULAR_FISH {
        let hits = fish::search_names(&jp, name, CaseMode::Sensitive)?;
        println!("{}: {} hit(s)", name, hits.num_rows());
        if !hits.is_empty() {
            let examples: Vec<String> = hits
                .head(EXAMPLES_PER_FISH)
                .rows()
                .map(|r| field(&r, fish::COM_NAME))
                .collect();
            println!("  e.g. {:?}", examples);
        }
    }
    Ok(())
}
