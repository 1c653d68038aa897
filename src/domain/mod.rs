//! Domain layer: core entities and business rules.

pub mod check;
pub mod domain_name;
pub mod report;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
