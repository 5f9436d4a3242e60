// src/join.rs

use crate::table::{value_at, Key, Record, Row, Table, Value};
use anyhow::Result;
use arrow::array::{Array, BooleanArray};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A left row together with the first right row sharing its key.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub left: Row<'a>,
    pub right: Row<'a>,
}

impl Record for JoinedRow<'_> {
    /// Left columns shadow right columns of the same name.
    fn get(&self, column: &str) -> Option<Value> {
        self.left.get(column).or_else(|| self.right.get(column))
    }
}

fn key_set(array: &dyn Array) -> HashSet<Key> {
    (0..array.len())
        .filter_map(|i| value_at(array, i).key())
        .collect()
}

/// Left rows whose `left_key` value occurs in `right[right_key]`. Right columns are not copied.
pub fn semi_join(left: &Table, left_key: &str, right: &Table, right_key: &str) -> Result<Table> {
    let (Some(l), Some(r)) = (left.column(left_key), right.column(right_key)) else {
        debug!(left_key, right_key, "join key absent; empty result");
        return Ok(Table::empty(left.name(), left.schema()));
    };
    let keys = key_set(r.as_ref());
    let mask: BooleanArray = (0..left.num_rows())
        .map(|i| {
            Some(
                value_at(l.as_ref(), i)
                    .key()
                    .is_some_and(|k| keys.contains(&k)),
            )
        })
        .collect();
    left.select(&mask)
}

/// Pair each left row with the first right row (right-table order) whose key matches.
///
/// Left rows with a null or unmatched key are dropped.
pub fn enrich<'a>(
    left: &'a Table,
    left_key: &str,
    right: &'a Table,
    right_key: &str,
) -> Vec<JoinedRow<'a>> {
    let (Some(l), Some(r)) = (left.column(left_key), right.column(right_key)) else {
        debug!(left_key, right_key, "join key absent; empty result");
        return Vec::new();
    };

    let mut first_by_key: HashMap<Key, usize> = HashMap::new();
    for i in 0..r.len() {
        if let Some(k) = value_at(r.as_ref(), i).key() {
            first_by_key.entry(k).or_insert(i);
        }
    }

    let joined: Vec<JoinedRow<'a>> = left
        .rows()
        .filter_map(|lrow| {
            let k = value_at(l.as_ref(), lrow.index()).key()?;
            let ri = *first_by_key.get(&k)?;
            Some(JoinedRow {
                left: lrow,
                right: right.row(ri)?,
            })
        })
        .collect();
    debug!(
        left = left.name(),
        right = right.name(),
        pairs = joined.len(),
        "enriched"
    );
    joined
}
