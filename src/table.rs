// src/table.rs

use anyhow::{Context, Result};
use arrow::{
    array::{Array, ArrayRef, AsArray, BooleanArray, UInt32Array},
    compute::{filter_record_batch, take_record_batch},
    datatypes::{
        DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type, SchemaRef,
        UInt16Type, UInt32Type, UInt64Type, UInt8Type,
    },
    record_batch::RecordBatch,
    util::display::array_value_to_string,
};
use std::fmt;

/// A single cell, decoupled from the Arrow type it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Hashable form of a non-null [`Value`]. Integral floats collapse onto `Int`
/// so `147` and `147.0` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Key {
    Bool(bool),
    Int(i64),
    FloatBits(u64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null, numeric zero, NaN, or empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Int(v) => *v == 0,
            Value::Float(v) => *v == 0.0 || v.is_nan(),
            Value::Text(s) => s.is_empty(),
            Value::Bool(_) => false,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    pub(crate) fn key(&self) -> Option<Key> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(Key::Bool(*b)),
            Value::Int(v) => Some(Key::Int(*v)),
            Value::Float(f) => {
                if f.is_nan() {
                    None
                } else if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(Key::Int(*f as i64))
                } else {
                    Some(Key::FloatBits(f.to_bits()))
                }
            }
            Value::Text(s) => Some(Key::Text(s.clone())),
        }
    }

    /// Equality used by filters and joins. Null never matches anything, itself included.
    pub fn matches(&self, other: &Value) -> bool {
        match (self.key(), other.key()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Read one cell out of an Arrow array.
///
/// Integer widths widen to `i64`, floats to `f64`, all string layouts to `Text`.
/// Anything else goes through Arrow's display formatter. Nullness is logical, so
/// `Null`-typed columns (no validity bitmap) read as null throughout.
pub fn value_at(array: &dyn Array, idx: usize) -> Value {
    if idx >= array.len() || is_logical_null(array, idx) {
        return Value::Null;
    }
    match array.data_type() {
        DataType::Boolean => Value::Bool(array.as_boolean().value(idx)),
        DataType::Int8 => Value::Int(array.as_primitive::<Int8Type>().value(idx).into()),
        DataType::Int16 => Value::Int(array.as_primitive::<Int16Type>().value(idx).into()),
        DataType::Int32 => Value::Int(array.as_primitive::<Int32Type>().value(idx).into()),
        DataType::Int64 => Value::Int(array.as_primitive::<Int64Type>().value(idx)),
        DataType::UInt8 => Value::Int(array.as_primitive::<UInt8Type>().value(idx).into()),
        DataType::UInt16 => Value::Int(array.as_primitive::<UInt16Type>().value(idx).into()),
        DataType::UInt32 => Value::Int(array.as_primitive::<UInt32Type>().value(idx).into()),
        DataType::UInt64 => {
            let v = array.as_primitive::<UInt64Type>().value(idx);
            i64::try_from(v).map_or(Value::Float(v as f64), Value::Int)
        }
        DataType::Float32 => Value::Float(array.as_primitive::<Float32Type>().value(idx).into()),
        DataType::Float64 => Value::Float(array.as_primitive::<Float64Type>().value(idx)),
        DataType::Utf8 => Value::Text(array.as_string::<i32>().value(idx).to_string()),
        DataType::LargeUtf8 => Value::Text(array.as_string::<i64>().value(idx).to_string()),
        DataType::Utf8View => Value::Text(array.as_string_view().value(idx).to_string()),
        _ => array_value_to_string(array, idx).map_or(Value::Null, Value::Text),
    }
}

pub(crate) fn is_logical_null(array: &dyn Array, idx: usize) -> bool {
    array.logical_nulls().is_some_and(|n| n.is_null(idx))
}

/// Anything with cells addressable by column name.
pub trait Record {
    /// `None` when the column does not exist; `Some(Value::Null)` for a null cell.
    fn get(&self, column: &str) -> Option<Value>;
}

/// An in-memory dataset: a name plus one Arrow batch holding every row.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    batch: RecordBatch,
}

impl Table {
    pub fn new(name: impl Into<String>, batch: RecordBatch) -> Self {
        Self {
            name: name.into(),
            batch,
        }
    }

    /// Zero rows, same columns.
    pub fn empty(name: impl Into<String>, schema: SchemaRef) -> Self {
        Self::new(name, RecordBatch::new_empty(schema))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Ordered column-name-to-type mapping.
    pub fn column_types(&self) -> Vec<(String, DataType)> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| (f.name().clone(), f.data_type().clone()))
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema().index_of(name).is_ok()
    }

    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        self.batch.column_by_name(name)
    }

    /// `None` if the column is absent or the row is out of range.
    pub fn value(&self, row: usize, column: &str) -> Option<Value> {
        if row >= self.num_rows() {
            return None;
        }
        self.column(column).map(|arr| value_at(arr.as_ref(), row))
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.num_rows()).then_some(Row { table: self, index })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.num_rows()).map(move |index| Row { table: self, index })
    }

    /// First `n` rows, zero-copy.
    pub fn head(&self, n: usize) -> Table {
        let len = n.min(self.num_rows());
        Table::new(self.name.clone(), self.batch.slice(0, len))
    }

    /// Rows at `indices`, in the order given.
    pub fn take(&self, indices: &[usize]) -> Result<Table> {
        let idx = indices
            .iter()
            .map(|&i| u32::try_from(i).context("row index exceeds u32"))
            .collect::<Result<Vec<u32>>>()?;
        let batch = take_record_batch(&self.batch, &UInt32Array::from(idx))
            .with_context(|| format!("taking {} rows from {}", indices.len(), self.name))?;
        Ok(Table::new(self.name.clone(), batch))
    }

    /// Rows where `mask` is true, order preserved.
    pub fn select(&self, mask: &BooleanArray) -> Result<Table> {
        let batch = filter_record_batch(&self.batch, mask)
            .with_context(|| format!("filtering {}", self.name))?;
        Ok(Table::new(self.name.clone(), batch))
    }
}

/// Borrowed view of one row of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Every column of this row, in schema order.
    pub fn fields(&self) -> Vec<(String, Value)> {
        let schema = self.table.schema();
        schema
            .fields()
            .iter()
            .zip(self.table.batch.columns())
            .map(|(f, arr)| (f.name().clone(), value_at(arr.as_ref(), self.index)))
            .collect()
    }
}

impl Record for Row<'_> {
    fn get(&self, column: &str) -> Option<Value> {
        self.table.value(self.index, column)
    }
}
