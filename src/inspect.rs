// src/inspect.rs

use crate::table::{value_at, Key, Row, Table, Value};
use arrow::array::Array;
use std::collections::HashSet;

/// `(index, name)` for every column, 0-based, schema order.
pub fn list_columns(table: &Table) -> Vec<(usize, String)> {
    table.column_names().into_iter().enumerate().collect()
}

/// Non-null cells in `column`; 0 when the column is absent.
pub fn non_null_count(table: &Table, column: &str) -> usize {
    table
        .column(column)
        .map(|arr| arr.len() - arr.logical_null_count())
        .unwrap_or(0)
}

/// First `n` non-null values of `column`, in row order.
pub fn sample_values(table: &Table, column: &str, n: usize) -> Vec<Value> {
    let Some(arr) = table.column(column) else {
        return Vec::new();
    };
    let nulls = arr.logical_nulls();
    (0..arr.len())
        .filter(|&i| nulls.as_ref().map_or(true, |n| n.is_valid(i)))
        .take(n)
        .map(|i| value_at(arr.as_ref(), i))
        .collect()
}

/// Number of distinct non-null values in `column`; 0 when the column is absent.
pub fn distinct_count(table: &Table, column: &str) -> usize {
    let Some(arr) = table.column(column) else {
        return 0;
    };
    (0..arr.len())
        .filter_map(|i| value_at(arr.as_ref(), i).key())
        .collect::<HashSet<Key>>()
        .len()
}

/// Fields of `row` that carry information: drops null, zero, NaN and empty text.
pub fn non_empty_fields(row: &Row<'_>) -> Vec<(String, Value)> {
    row.fields()
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
}
