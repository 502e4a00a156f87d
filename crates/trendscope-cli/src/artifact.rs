//! CSV artifact IO.
//!
//! Writes go to a temp file in the target directory and are renamed into
//! place, so a failed run never leaves a half-written artifact behind.
//! Artifacts that must agree are staged together and committed only once
//! every one of them serialized.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tempfile::NamedTempFile;
use trendscope_core::RawVideoRow;

/// A fully written temp file waiting to replace its target.
pub(crate) struct StagedArtifact {
    tmp: NamedTempFile,
    path: PathBuf,
    rows: usize,
}

impl StagedArtifact {
    /// Renames the temp file over the target path.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails.
    pub(crate) fn commit(self) -> anyhow::Result<()> {
        let Self { tmp, path, rows } = self;
        tmp.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), rows, "wrote artifact");
        Ok(())
    }
}

/// Serializes `rows` under an explicit `columns` header into a temp file in
/// the target directory. Nothing at `path` changes until
/// [`StagedArtifact::commit`]; dropping the stage removes the temp file.
/// The header is written even when `rows` is empty.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or a row fails
/// to serialize.
pub(crate) fn stage_csv<T: Serialize>(
    path: &Path,
    columns: &[&str],
    rows: &[T],
) -> anyhow::Result<StagedArtifact> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file_mut());
        writer.write_record(columns)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }

    Ok(StagedArtifact {
        tmp,
        path: path.to_path_buf(),
        rows: rows.len(),
    })
}

/// Stages and immediately commits a single artifact.
///
/// # Errors
///
/// See [`stage_csv`] and [`StagedArtifact::commit`].
pub(crate) fn write_csv<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> anyhow::Result<()> {
    stage_csv(path, columns, rows)?.commit()
}

/// Reads a raw artifact written by [`write_csv`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record does not match
/// the raw column set.
pub(crate) fn read_raw(path: &Path) -> anyhow::Result<Vec<RawVideoRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open raw artifact {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let expected: Vec<&str> = RawVideoRow::COLUMNS.to_vec();
    if headers.iter().collect::<Vec<_>>() != expected {
        anyhow::bail!(
            "raw artifact {} has unexpected columns: {:?}",
            path.display(),
            headers.iter().collect::<Vec<_>>()
        );
    }

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<RawVideoRow>().enumerate() {
        let row = record.with_context(|| {
            format!("malformed record {} in {}", index + 1, path.display())
        })?;
        rows.push(row);
    }
    Ok(rows)
}
