//! Flat-file domain store.
//!
//! The whole collection is read at the start of a command and rewritten
//! wholesale after a mutation. Writes go to a sibling temp file first and
//! are renamed over the target, so a crash mid-write never leaves a
//! truncated store behind. Single-writer by design; there is no lock.

use std::{
    collections::BTreeSet,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{domain::domain_name::DomainName, infra::error::AppError};

#[derive(Debug, Clone)]
pub struct DomainStore {
    path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DomainStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted collection. An absent file is an empty store,
    /// not an error.
    pub fn load(&self) -> Result<BTreeSet<DomainName>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(source) => {
                return Err(AppError::StoreRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let domains: Vec<DomainName> =
            serde_json::from_str(&raw).map_err(|source| AppError::StoreParse {
                path: self.path.clone(),
                source,
            })?;

        Ok(domains.into_iter().collect())
    }

    /// Persists the full collection, replacing any prior content.
    pub fn save(&self, domains: &BTreeSet<DomainName>) -> Result<(), AppError> {
        let entries: Vec<&str> = domains.iter().map(DomainName::as_str).collect();
        let payload =
            serde_json::to_string_pretty(&entries).map_err(|source| AppError::StoreEncode {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| AppError::StoreWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = temp_write_path(&self.path);
        fs::write(&temp_path, payload).map_err(|source| AppError::StoreWrite {
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|source| AppError::StoreReplace {
            path: self.path.clone(),
            source,
        })
    }

    /// Inserts a domain and persists. Idempotent: an existing entry is
    /// reported as `AlreadyExists` and nothing is written.
    pub fn add(&self, domain: &DomainName) -> Result<AddOutcome, AppError> {
        let mut domains = self.load()?;

        if !domains.insert(domain.clone()) {
            return Ok(AddOutcome::AlreadyExists);
        }

        self.save(&domains)?;
        Ok(AddOutcome::Added)
    }

    /// Removes a domain and persists. A miss is reported as `NotFound`
    /// and leaves the persisted file untouched.
    pub fn delete(&self, domain: &DomainName) -> Result<DeleteOutcome, AppError> {
        let mut domains = self.load()?;

        if !domains.remove(domain) {
            return Ok(DeleteOutcome::NotFound);
        }

        self.save(&domains)?;
        Ok(DeleteOutcome::Deleted)
    }
}

fn temp_write_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
