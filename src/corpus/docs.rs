//! Loader for pre-extracted document text.
//!
//! Extraction itself happens upstream; this module only consumes its output,
//! one `*.txt` file per source document. Runs once at index build. Every
//! failure degrades to "fewer documents" — the engine must keep answering
//! from the other corpora.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

/// One extracted document: display title, link target, and raw text.
#[derive(Debug)]
pub struct Document {
    pub title: String,
    pub url: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("cannot list document directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reads every `*.txt` file under `dir` into a [`Document`].
///
/// A missing directory yields an empty list (documents are optional); an
/// unreadable file is skipped with a warning. Results are sorted by title so
/// index construction is deterministic regardless of directory order.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>, DocsError> {
    if !dir.is_dir() {
        debug!(path = %dir.display(), "document directory absent, no documents loaded");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|source| DocsError::ReadDir {
        path: dir.display().to_string(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let is_txt = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some(ext) if ext.eq_ignore_ascii_case("txt")
        );
        if !is_txt {
            continue;
        }

        match fs::read_to_string(&path) {
            Ok(text) => {
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("document");
                let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or(stem);
                documents.push(Document {
                    title: stem.replace('_', " "),
                    url: format!("/documents/{file_name}"),
                    text,
                });
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable document"),
        }
    }

    documents.sort_by(|a, b| a.title.cmp(&b.title));
    debug!(count = documents.len(), "documents loaded");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_yields_no_documents() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("nope");
        assert!(load_documents(&absent).unwrap().is_empty());
    }

    #[test]
    fn loads_txt_files_and_ignores_others() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("regime_sans_residus.txt"),
            "Aliments autorisés avant une coloscopie",
        )
        .unwrap();
        fs::write(dir.path().join("consignes_anesthesie.txt"), "Jeûne strict").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 2);
        // sorted by title, underscores become spaces
        assert_eq!(docs[0].title, "consignes anesthesie");
        assert_eq!(docs[1].title, "regime sans residus");
        assert_eq!(docs[1].url, "/documents/regime_sans_residus.txt");
        assert!(docs[0].text.contains("Jeûne"));
    }

    #[test]
    fn empty_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_documents(dir.path()).unwrap().is_empty());
    }
}
