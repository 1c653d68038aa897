//! Use cases for mutating and enumerating the watched-domain collection.

use crate::{
    domain::domain_name::{DomainName, DomainNameError},
    infra::{
        error::AppError,
        store::{AddOutcome, DeleteOutcome, DomainStore},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDomainOutcome {
    Added(DomainName),
    AlreadyExists(DomainName),
    Rejected {
        candidate: String,
        reason: DomainNameError,
    },
}

/// Validates a candidate and inserts it into the store. Malformed input
/// is an outcome, not an error; only store I/O propagates.
pub fn add_domain(store: &DomainStore, candidate: &str) -> Result<AddDomainOutcome, AppError> {
    let domain = match DomainName::parse(candidate) {
        Ok(domain) => domain,
        Err(reason) => {
            return Ok(AddDomainOutcome::Rejected {
                candidate: normalize_candidate(candidate),
                reason,
            })
        }
    };

    match store.add(&domain)? {
        AddOutcome::Added => Ok(AddDomainOutcome::Added(domain)),
        AddOutcome::AlreadyExists => Ok(AddDomainOutcome::AlreadyExists(domain)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteDomainOutcome {
    Deleted(DomainName),
    NotFound { name: String },
}

/// Removes a domain from the store. A candidate that does not even parse
/// cannot be stored, so it is reported as a plain miss.
pub fn delete_domain(store: &DomainStore, candidate: &str) -> Result<DeleteDomainOutcome, AppError> {
    let Ok(domain) = DomainName::parse(candidate) else {
        return Ok(DeleteDomainOutcome::NotFound {
            name: normalize_candidate(candidate),
        });
    };

    match store.delete(&domain)? {
        DeleteOutcome::Deleted => Ok(DeleteDomainOutcome::Deleted(domain)),
        DeleteOutcome::NotFound => Ok(DeleteDomainOutcome::NotFound {
            name: domain.to_string(),
        }),
    }
}

/// Enumerates the stored collection in lexicographic order.
pub fn list_domains(store: &DomainStore) -> Result<Vec<DomainName>, AppError> {
    Ok(store.load()?.into_iter().collect())
}

fn normalize_candidate(candidate: &str) -> String {
    candidate.trim().to_ascii_lowercase()
}
