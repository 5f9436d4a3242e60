// src/fish.rs
//! FishBase column names and the queries the inspection programs share.

use crate::{
    filter::{filter, Predicate},
    inspect::distinct_count,
    join::{enrich, JoinedRow},
    matching::CaseMode,
    table::Table,
};
use anyhow::Result;

pub const SPEC_CODE: &str = "SpecCode";
pub const GENUS: &str = "Genus";
pub const SPECIES: &str = "Species";
pub const FAM_CODE: &str = "FamCode";
pub const FB_NAME: &str = "FBname";
pub const COM_NAME: &str = "ComName";
pub const LANGUAGE: &str = "Language";
pub const PREFERRED_NAME: &str = "PreferredName";

pub const JAPANESE: &str = "Japanese";
pub const ENGLISH: &str = "English";

/// Free-text species columns worth sampling.
pub const DESCRIPTION_COLUMNS: [&str; 5] =
    ["Remark", "Comments", "Importance", "Dangerous", "DangerousRef"];

/// Columns shown for a list of common names.
pub const NAME_COLUMNS: [&str; 3] = [COM_NAME, SPEC_CODE, PREFERRED_NAME];

/// Bluefin tuna, the species used for the full-record dump.
pub const PACIFIC_BLUEFIN: i64 = 147;
pub const TUNA_GENUS: &str = "Thunnus";

pub const TUNA_KEYWORDS: [&str; 7] = [
    "まぐろ",
    "マグロ",
    "鮪",
    "ツナ",
    "Maguro",
    "クロマグロ",
    "ホンマグロ",
];

pub const POPULAR_FISH: [&str; 6] = ["サケ", "タイ", "アジ", "サバ", "カツオ", "イワシ"];

/// Common names tagged with `language`.
pub fn names_in_language(comnames: &Table, language: &str) -> Result<Table> {
    filter(comnames, LANGUAGE, &Predicate::equals(language))
}

pub fn japanese_names(comnames: &Table) -> Result<Table> {
    names_in_language(comnames, JAPANESE)
}

/// Names whose `ComName` contains `pattern`.
pub fn search_names(names: &Table, pattern: &str, case: CaseMode) -> Result<Table> {
    filter(names, COM_NAME, &Predicate::contains(pattern, case))
}

pub fn species_by_code(species: &Table, code: i64) -> Result<Table> {
    filter(species, SPEC_CODE, &Predicate::equals(code))
}

pub fn species_in_genus(species: &Table, genus: &str) -> Result<Table> {
    filter(species, GENUS, &Predicate::equals(genus))
}

/// Attach each name to its species record via `SpecCode`.
pub fn with_species<'a>(names: &'a Table, species: &'a Table) -> Vec<JoinedRow<'a>> {
    enrich(names, SPEC_CODE, species, SPEC_CODE)
}

/// Headline counts over a species table and its common names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSummary {
    pub species: usize,
    pub names: usize,
    pub japanese: usize,
    pub english: usize,
    /// Distinct `SpecCode`s among Japanese names, dangling codes included.
    pub species_with_japanese: usize,
}

pub fn summarize(species: &Table, comnames: &Table) -> Result<DataSummary> {
    let jp = japanese_names(comnames)?;
    let en = names_in_language(comnames, ENGLISH)?;
    Ok(DataSummary {
        species: species.num_rows(),
        names: comnames.num_rows(),
        japanese: jp.num_rows(),
        english: en.num_rows(),
        species_with_japanese: distinct_count(&jp, SPEC_CODE),
    })
}

impl std::fmt::Display for DataSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "species:                      {}", self.species)?;
        writeln!(f, "common names:                 {}", self.names)?;
        writeln!(f, "Japanese names:               {}", self.japanese)?;
        writeln!(f, "English names:                {}", self.english)?;
        writeln!(f, "species with Japanese names:  {}", self.species_with_japanese)
    }
}
