use anyhow::Result;

use crate::infra::{config::AppConfig, error::StoreError};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Append-only sink for submitted names. Implementations own the header
/// policy; callers just hand over the raw name text.
pub trait NameStore {
    fn append(&mut self, name: &str) -> Result<(), StoreError>;
}
