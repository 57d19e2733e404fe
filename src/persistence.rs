// File: src/persistence.rs
use crate::core::types::{Index, LinkMap};
use crate::error::{IndexError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Vocabulary terms from a JSON array of strings. `null` entries are dropped.
pub fn load_terms(path: &Path) -> Result<Vec<String>> {
    let terms: Vec<Option<String>> = serde_json::from_str(&read_text(path)?).map_err(|source| IndexError::Json {
        what: "vocabulary list",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(terms.into_iter().flatten().collect())
}

/// A link map from a JSON object of `term -> [link, ...]`.
///
/// Anything other than an object of non-empty string arrays is rejected before
/// any index is built.
pub fn load_link_map(path: &Path) -> Result<LinkMap> {
    let raw: HashMap<String, Vec<String>> = serde_json::from_str(&read_text(path)?).map_err(|source| IndexError::Json {
        what: "link map",
        path: path.to_path_buf(),
        source,
    })?;
    LinkMap::try_from(raw)
}

/// Writes to `path` through a temp file in the same directory,
/// so readers never see a partially written file.
pub fn write_atomic(path: &Path, write: impl FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>) -> Result<()> {
    let write_err = |source: std::io::Error| IndexError::Write {
        path: path.to_path_buf(),
        source,
    };
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush().map_err(write_err)?;
    }
    temp_file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

pub fn save_text(contents: &str, path: &Path) -> Result<()> {
    write_atomic(path, |writer| {
        writer.write_all(contents.as_bytes()).map_err(|source| IndexError::Write {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Pretty JSON for the external page renderer.
pub fn save_index_json(index: &Index, path: &Path) -> Result<()> {
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, index).map_err(|e| IndexError::Write {
            path: path.to_path_buf(),
            source: e.into(),
        })
    })
}

/// Compact binary snapshot, reloadable with [`load_index_binary`].
pub fn save_index_binary(index: &Index, path: &Path) -> Result<()> {
    write_atomic(path, |writer| {
        bincode::serialize_into(writer, index).map_err(|source| IndexError::Snapshot {
            path: path.to_path_buf(),
            source,
        })
    })
}

pub fn load_index_binary(path: &Path) -> Result<Index> {
    let file = fs::File::open(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    bincode::deserialize_from(BufReader::new(file)).map_err(|source| IndexError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}
