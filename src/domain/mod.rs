//! Domain layer: core entities and business rules.

pub mod event;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
