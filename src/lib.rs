pub mod check;
pub mod config;
pub mod error;
pub mod filter;
pub mod fish;
pub mod inspect;
pub mod join;
pub mod loader;
pub mod logging;
pub mod matching;
pub mod report;
pub mod table;

pub use config::InspectorConfig;
pub use error::LoadError;
pub use filter::{filter, Predicate};
pub use join::{enrich, semi_join, JoinedRow};
pub use loader::load_table;
pub use matching::CaseMode;
pub use report::Reporter;
pub use table::{Record, Row, Table, Value};

#[cfg(test)]
mod testing;
