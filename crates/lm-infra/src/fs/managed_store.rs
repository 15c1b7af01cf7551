use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use lm_core::ports::{ManagedStorePort, MediaSink, NewStorageEntry};
use tokio::fs;

const FALLBACK_DISPLAY_NAME: &str = "download";
const DEFAULT_MAX_NAME_ATTEMPTS: u32 = 100;

/// Directory-backed storage broker.
///
/// Entries are files under `<root>/<category directory>`. A display name that
/// is already taken gets a numbered variant (`a (1).jpg`, `a (2).jpg`, ...)
/// and the broker declines the entry once every variant is taken.
pub struct FsManagedStore {
    root: PathBuf,
    max_name_attempts: u32,
}

impl FsManagedStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            max_name_attempts: DEFAULT_MAX_NAME_ATTEMPTS,
        }
    }

    pub fn with_max_name_attempts(mut self, attempts: u32) -> Self {
        self.max_name_attempts = attempts.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Turns an arbitrary display name into a single path component.
fn sanitize_display_name(display_name: &str) -> String {
    let cleaned: String = display_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => FALLBACK_DISPLAY_NAME.to_string(),
        _ => cleaned,
    }
}

/// `name` for the first attempt, `stem (n).ext` afterwards.
fn numbered_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem} ({attempt}).{ext}"),
        None => format!("{stem} ({attempt})"),
    }
}

#[async_trait]
impl ManagedStorePort for FsManagedStore {
    async fn create_entry(&self, entry: &NewStorageEntry) -> Result<Option<MediaSink>> {
        let dir = self.root.join(entry.category.directory_name());
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let name = sanitize_display_name(&entry.display_name);
        for attempt in 0..self.max_name_attempts {
            let candidate = dir.join(numbered_name(&name, attempt));
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
                .await
            {
                Ok(file) => {
                    tracing::debug!(
                        path = %candidate.display(),
                        mime = %entry.mime_type,
                        "Created managed store entry"
                    );
                    return Ok(Some(Box::new(file)));
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("Failed to create {}", candidate.display()))
                }
            }
        }

        tracing::warn!(
            display_name = %entry.display_name,
            attempts = self.max_name_attempts,
            "No free name left for managed store entry"
        );
        Ok(None)
    }
}
