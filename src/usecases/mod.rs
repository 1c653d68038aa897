//! Use case layer: application workflows behind stub-testable seams.

pub mod bootstrap;
pub mod build_report;
pub mod context;
pub mod contracts;
pub mod dispatch;
pub mod manage_domains;
pub mod report_job;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
