// src/filter.rs

use crate::{
    matching::{self, CaseMode},
    table::{value_at, Key, Table, Value},
};
use anyhow::Result;
use arrow::array::BooleanArray;
use std::collections::HashSet;
use tracing::debug;

/// Row test applied to a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equals(Value),
    Contains { pattern: String, case: CaseMode },
    In(Vec<Value>),
}

impl Predicate {
    pub fn equals(v: impl Into<Value>) -> Self {
        Predicate::Equals(v.into())
    }

    pub fn contains(pattern: impl Into<String>, case: CaseMode) -> Self {
        Predicate::Contains {
            pattern: pattern.into(),
            case,
        }
    }

    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Predicate::In(values.into_iter().map(Into::into).collect())
    }

    /// Null cells never pass.
    pub fn test(&self, cell: &Value) -> bool {
        if cell.is_null() {
            return false;
        }
        match self {
            Predicate::Equals(want) => cell.matches(want),
            Predicate::Contains { pattern, case } => match cell {
                Value::Text(s) => matching::contains(s, pattern, *case),
                other => matching::contains(&other.to_string(), pattern, *case),
            },
            Predicate::In(set) => set.iter().any(|v| cell.matches(v)),
        }
    }
}

/// Rows of `table` whose `column` satisfies `predicate`, original order kept.
///
/// An absent column gives an empty table with the same schema.
pub fn filter(table: &Table, column: &str, predicate: &Predicate) -> Result<Table> {
    let Some(array) = table.column(column) else {
        debug!(table = table.name(), column, "column absent; empty result");
        return Ok(Table::empty(table.name(), table.schema()));
    };

    let mask: BooleanArray = match predicate {
        // hash once instead of scanning the list for every row
        Predicate::In(values) => {
            let keys: HashSet<Key> = values.iter().filter_map(Value::key).collect();
            (0..table.num_rows())
                .map(|i| {
                    let hit = value_at(array.as_ref(), i)
                        .key()
                        .is_some_and(|k| keys.contains(&k));
                    Some(hit)
                })
                .collect()
        }
        _ => (0..table.num_rows())
            .map(|i| Some(predicate.test(&value_at(array.as_ref(), i))))
            .collect(),
    };

    let out = table.select(&mask)?;
    debug!(
        table = table.name(),
        column,
        matched = out.num_rows(),
        of = table.num_rows(),
        "filtered"
    );
    Ok(out)
}
