// src/testing.rs
//! Small FishBase-shaped fixtures shared by the unit tests.

use crate::table::Table;
use anyhow::Result;
use arrow::{
    array::{ArrayRef, Int32Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use parquet::arrow::ArrowWriter;
use std::{fs::File, path::Path, sync::Arc};

pub(crate) fn species_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("SpecCode", DataType::Int32, false),
        Field::new("Genus", DataType::Utf8, true),
        Field::new("Species", DataType::Utf8, true),
        Field::new("FamCode", DataType::Int32, true),
        Field::new("FBname", DataType::Utf8, true),
        Field::new("Remark", DataType::Utf8, true),
        Field::new("Importance", DataType::Utf8, true),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(vec![147, 143, 69, 118])),
        Arc::new(StringArray::from(vec![
            Some("Thunnus"),
            Some("Thunnus"),
            Some("Salmo"),
            Some("Scomber"),
        ])),
        Arc::new(StringArray::from(vec![
            Some("orientalis"),
            Some("alalunga"),
            Some("salar"),
            Some("japonicus"),
        ])),
        Arc::new(Int32Array::from(vec![Some(416), Some(416), Some(76), None])),
        Arc::new(StringArray::from(vec![
            Some("Pacific bluefin tuna"),
            Some("Albacore"),
            Some("Atlantic salmon"),
            Some("Chub mackerel"),
        ])),
        Arc::new(StringArray::from(vec![
            None,
            Some("Often confused with juvenile bigeye."),
            None,
            Some(""),
        ])),
        Arc::new(StringArray::from(vec![
            Some("highly commercial"),
            None,
            Some("commercial"),
            None,
        ])),
    ];
    RecordBatch::try_new(schema, columns).expect("valid species fixture")
}

pub(crate) fn comnames_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("ComName", DataType::Utf8, true),
        Field::new("SpecCode", DataType::Int32, false),
        Field::new("Language", DataType::Utf8, true),
        Field::new("PreferredName", DataType::Int32, true),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(vec![
            Some("Pacific bluefin tuna"),
            Some("クロマグロ"),
            Some("ホンマグロ"),
            Some("ビンナガマグロ"),
            Some("タイセイヨウサケ"),
            Some("Albacore"),
            None,
            Some("マサバ"),
            Some("幻のマグロ"),
        ])),
        Arc::new(Int32Array::from(vec![147, 147, 147, 143, 69, 143, 999, 118, 5555])),
        Arc::new(StringArray::from(vec![
            Some("English"),
            Some("Japanese"),
            Some("Japanese"),
            Some("Japanese"),
            Some("Japanese"),
            Some("English"),
            Some("Japanese"),
            Some("Japanese"),
            Some("Japanese"),
        ])),
        Arc::new(Int32Array::from(vec![
            Some(1),
            Some(1),
            Some(0),
            Some(0),
            Some(1),
            Some(1),
            None,
            Some(1),
            Some(0),
        ])),
    ];
    RecordBatch::try_new(schema, columns).expect("valid comnames fixture")
}

pub(crate) fn species() -> Table {
    Table::new("species", species_batch())
}

pub(crate) fn comnames() -> Table {
    Table::new("comnames", comnames_batch())
}

/// Write `batch` to `path` as a single-row-group Parquet file.
pub(crate) fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}
