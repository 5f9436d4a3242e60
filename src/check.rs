// src/check.rs
//! Per-file health check behind the `check_parquet` program.

use crate::{
    error::write_diagnostic,
    fish, inspect,
    loader::{file_summary, load_table},
    report::Reporter,
};
use anyhow::{Context, Result};
use std::{io::Write, path::Path};
use tracing::info;

/// Common-name exports are recognised by path, wherever they live on disk.
fn is_comnames_file(path: &Path) -> bool {
    path.to_string_lossy().contains("comnames")
}

/// Row/column counts, column names, footer summary and the first rows of one file.
/// Common-name files also get a Japanese-only preview.
pub fn check_file<W: Write>(out: &mut W, path: &Path, reporter: &Reporter) -> Result<()> {
    let table = load_table(path).with_context(|| format!("checking {}", path.display()))?;

    writeln!(out, "\n{}:", path.display())?;
    writeln!(out, "rows:    {}", table.num_rows())?;
    writeln!(out, "columns: {}", table.num_columns())?;
    let names: Vec<String> = inspect::list_columns(&table)
        .into_iter()
        .map(|(_, n)| n)
        .collect();
    writeln!(out, "\ncolumn names: {:?}", names)?;

    let summary = file_summary(path)?;
    writeln!(
        out,
        "parquet: {} row group(s), format v{}, {} bytes on disk, created by {}",
        summary.num_row_groups,
        summary.version,
        summary.size_on_disk,
        summary.created_by.as_deref().unwrap_or("<unknown>")
    )?;

    writeln!(out, "\nfirst {} rows:", reporter.max_rows)?;
    write!(out, "{}", reporter.render_table(&table, &[]))?;

    if is_comnames_file(path) && table.has_column(fish::LANGUAGE) {
        let jp = fish::japanese_names(&table)?;
        writeln!(out, "\nJapanese rows: {}", jp.num_rows())?;
        if !jp.is_empty() {
            writeln!(out, "\nJapanese sample:")?;
            write!(out, "{}", reporter.render_table(&jp, &[]))?;
        }
    }
    Ok(())
}

/// Check every file in turn, reporting failures inline and carrying on.
///
/// Returns the process exit status: 0 when every file checked out, 1 otherwise.
pub fn check_files<W, P>(out: &mut W, paths: &[P], reporter: &Reporter) -> i32
where
    W: Write,
    P: AsRef<Path>,
{
    let mut failed = 0;
    for path in paths {
        if let Err(e) = check_file(out, path.as_ref(), reporter) {
            if let Err(io) = write_diagnostic(out, &e) {
                tracing::error!("cannot write diagnostic: {}", io);
            }
            failed += 1;
        }
    }

    info!(checked = paths.len(), failed, "done");
    if failed > 0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_fails_with_hint() -> Result<()> {
        let dir = tempdir()?;
        let mut out = Vec::new();
        let status = check_files(&mut out, &[dir.path().join("species.parquet")], &Reporter::default());
        assert_eq!(status, 1);

        let text = String::from_utf8(out)?;
        assert!(text.contains("error: checking"));
        assert!(text.contains("hint: download"));
        Ok(())
    }

    #[test]
    fn test_not_parquet_fails() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("species.parquet");
        fs::write(&path, b"SpecCode,Genus\n147,Thunnus\n")?;

        let mut out = Vec::new();
        assert_eq!(check_files(&mut out, &[&path], &Reporter::default()), 1);
        assert!(String::from_utf8(out)?.contains("hint: the file must be a Parquet export"));
        Ok(())
    }

    #[test]
    fn test_continues_past_missing_file() -> Result<()> {
        let dir = tempdir()?;
        let species = dir.path().join("species.parquet");
        let comnames = dir.path().join("comnames.parquet");
        testing::write_parquet(&comnames, &testing::comnames_batch())?;

        let mut out = Vec::new();
        let status = check_files(&mut out, &[&species, &comnames], &Reporter::new(2, 100));
        assert_eq!(status, 1);

        let text = String::from_utf8(out)?;
        let err_at = text.find("error: checking").unwrap();
        let second_at = text.find(&format!("{}:", comnames.display())).unwrap();
        assert!(err_at < second_at);
        assert!(text.contains("rows:    9"));
        assert!(text.contains("Japanese rows: 7"));
        Ok(())
    }

    #[test]
    fn test_all_good_is_zero() -> Result<()> {
        let dir = tempdir()?;
        let species = dir.path().join("species.parquet");
        testing::write_parquet(&species, &testing::species_batch())?;

        let mut out = Vec::new();
        assert_eq!(check_files(&mut out, &[&species], &Reporter::default()), 0);
        let text = String::from_utf8(out)?;
        assert!(text.contains("rows:    4"));
        assert!(text.contains("columns: 7"));
        assert!(text.contains("row group(s)"));
        // species files get no name preview
        assert!(!text.contains("Japanese rows"));
        Ok(())
    }

    #[test]
    fn test_japanese_preview_follows_path() -> Result<()> {
        let dir = tempdir()?;
        let part_dir = dir.path().join("comnames");
        fs::create_dir(&part_dir)?;
        // the stem alone says nothing about the table
        let part = part_dir.join("part-0.parquet");
        testing::write_parquet(&part, &testing::comnames_batch())?;

        let mut out = Vec::new();
        check_file(&mut out, &part, &Reporter::new(3, 100))?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("Japanese rows: 7"));
        assert!(text.contains("Japanese sample:"));
        assert!(text.contains("[showing 3 of 7 rows]"));

        // same data under an unrelated name gets no preview
        let other = dir.path().join("names.parquet");
        testing::write_parquet(&other, &testing::comnames_batch())?;
        let mut out = Vec::new();
        check_file(&mut out, &other, &Reporter::new(3, 100))?;
        assert!(!String::from_utf8(out)?.contains("Japanese rows"));
        Ok(())
    }
}
