use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::DocumentError;

const HTML_EXTENSIONS: &[&str] = &["html", "htm"];
const OUTPUT_EXTENSION: &str = "txt";

#[derive(Debug, Clone)]
pub struct InputDocument {
    pub path: PathBuf,
    pub name: String,
    pub stem: String,
}

/// `*.html` / `*.htm` files directly inside `dir`, sorted by file name.
pub fn list_documents(dir: &Path) -> Result<Vec<InputDocument>> {
    let mut docs: Vec<InputDocument> = files_with_extension(dir, HTML_EXTENSIONS)?
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            let stem = path.file_stem()?.to_string_lossy().into_owned();
            Some(InputDocument { path, name, stem })
        })
        .collect();
    docs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(docs)
}

/// Previously written outputs in `dir`, sorted.
pub fn list_outputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = files_with_extension(dir, &[OUTPUT_EXTENSION])?;
    paths.sort();
    Ok(paths)
}

fn files_with_extension(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to list {:?}", dir))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("Failed to list {:?}", dir))?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)));
        if matches && path.is_file() {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Raw filing bytes as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn output_path(output_dir: &Path, doc: &InputDocument) -> PathBuf {
    output_dir.join(format!("{}.{}", doc.stem, OUTPUT_EXTENSION))
}

pub fn write_output(path: &Path, contents: &str) -> Result<(), DocumentError> {
    fs::write(path, contents).map_err(|source| DocumentError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))
}
