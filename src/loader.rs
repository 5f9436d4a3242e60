// src/loader.rs

use crate::{error::LoadError, table::Table};
use arrow::{compute::concat_batches, record_batch::RecordBatch};
use parquet::{
    arrow::arrow_reader::ParquetRecordBatchReaderBuilder,
    file::reader::{FileReader, SerializedFileReader},
};
use std::{fs::File, path::Path};
use tracing::{debug, info};

/// Footer-level facts about a Parquet file, read without decoding any pages.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub created_by: Option<String>,
    pub version: i32,
    pub num_rows: i64,
    pub num_row_groups: usize,
    pub size_on_disk: u64,
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole Parquet file into one in-memory [`Table`] named after the file stem.
///
/// Either the full table comes back or an error does; nothing partial.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let file = open(path)?;
    let parquet_err = |source| LoadError::Parquet {
        path: path.to_path_buf(),
        source,
    };
    let arrow_err = |source| LoadError::Arrow {
        path: path.to_path_buf(),
        source,
    };

    let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(parquet_err)?;
    let schema = builder.schema().clone();
    let reader = builder.with_batch_size(8192).build().map_err(parquet_err)?;

    let batches = reader
        .collect::<Result<Vec<RecordBatch>, _>>()
        .map_err(arrow_err)?;
    debug!(batches = batches.len(), "decoded record batches");

    let batch = concat_batches(&schema, &batches).map_err(arrow_err)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    info!(
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "loaded {}",
        name
    );
    Ok(Table::new(name, batch))
}

/// Read only the Parquet footer of `path`.
pub fn file_summary(path: &Path) -> Result<FileSummary, LoadError> {
    let file = open(path)?;
    let size_on_disk = file
        .metadata()
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    let reader = SerializedFileReader::new(file).map_err(|source| LoadError::Parquet {
        path: path.to_path_buf(),
        source,
    })?;
    let meta = reader.metadata();
    let file_meta = meta.file_metadata();

    Ok(FileSummary {
        created_by: file_meta.created_by().map(str::to_string),
        version: file_meta.version(),
        num_rows: file_meta.num_rows(),
        num_row_groups: meta.num_row_groups(),
        size_on_disk,
    })
}

/// Whether an optional dataset is present.
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{logging::init_test_logging, testing, Value};
    use anyhow::Result;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_round_trips_fixture() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        let path = dir.path().join("species.parquet");
        testing::write_parquet(&path, &testing::species_batch())?;

        let table = load_table(&path)?;
        assert_eq!(table.name(), "species");
        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.column_names(), testing::species().column_names());
        assert_eq!(table.value(0, "FBname"), Some(Value::from("Pacific bluefin tuna")));
        assert_eq!(table.value(0, "Remark"), Some(Value::Null));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        init_test_logging();
        let err = load_table(Path::new("/no/such/dir/species.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.path(), Path::new("/no/such/dir/species.parquet"));
    }

    #[test]
    fn test_garbage_is_parquet_error() -> Result<()> {
        init_test_logging();
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"SpecCode,Genus\n147,Thunnus\n")?;
        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parquet { .. }));
        Ok(())
    }

    #[test]
    fn test_file_summary_reads_footer() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("comnames.parquet");
        testing::write_parquet(&path, &testing::comnames_batch())?;

        let summary = file_summary(&path)?;
        assert_eq!(summary.num_rows, 9);
        assert_eq!(summary.num_row_groups, 1);
        assert!(summary.size_on_disk > 0);
        assert!(exists(&path));
        assert!(!exists(&dir.path().join("ecology.parquet")));
        Ok(())
    }
}
