//! Filesystem vault: a directory tree of Markdown notes

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use walkdir::{DirEntry, WalkDir};

use super::{Document, DocumentSource};
use crate::error::{NotelinkError, Result};

/// Notes under a vault directory, identified by their vault-relative path
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FsStore {
    /// Open a vault rooted at `root`, counting files with the given extensions as notes
    #[tracing::instrument(skip(root, extensions), fields(root = %root.display()))]
    pub fn open(root: &Path, extensions: &[String]) -> Result<Self> {
        if !root.is_dir() {
            return Err(NotelinkError::VaultNotFound {
                path: root.to_path_buf(),
            });
        }

        Ok(FsStore {
            root: root.to_path_buf(),
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a document id to a path inside the vault
    pub fn path_of(&self, id: &str) -> Result<PathBuf> {
        let relative = Path::new(id);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || id.is_empty() {
            return Err(NotelinkError::read_failure(id, "id is not a vault-relative path"));
        }
        Ok(self.root.join(relative))
    }

    /// Whether a document id exists in the vault
    pub fn contains(&self, id: &str) -> bool {
        self.path_of(id).map(|p| p.is_file()).unwrap_or(false)
    }

    fn is_note(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|ext| ext == &e.to_lowercase()))
    }

    fn document_id(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        Some(parts.join("/"))
    }
}

/// Hidden directories (`.git`, `.obsidian`, `.notelink`) never hold notes
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn mtime(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

impl DocumentSource for FsStore {
    fn list_documents(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable vault entry");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_note(path) {
                continue;
            }

            let Some(id) = self.document_id(path) else {
                tracing::warn!(path = %path.display(), "skipping non UTF-8 path");
                continue;
            };

            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| id.clone());

            documents.push(Document {
                id,
                name,
                modified: mtime(path).unwrap_or_else(Utc::now),
            });
        }

        documents.sort_by(|a, b| a.id.cmp(&b.id));
        tracing::debug!(count = documents.len(), "list_documents");
        Ok(documents)
    }

    fn read_text(&self, id: &str) -> Result<String> {
        let path = self.path_of(id)?;
        fs::read_to_string(&path).map_err(|e| NotelinkError::read_failure(id, e))
    }

    fn modified_time(&self, id: &str) -> Option<DateTime<Utc>> {
        mtime(&self.path_of(id).ok()?)
    }
}
