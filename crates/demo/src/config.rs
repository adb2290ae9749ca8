//! Demo configuration (environment driven).

use itembox_core::{DomainError, DomainResult};

/// Environment variable overriding the shared box capacity.
pub const CAPACITY_ENV: &str = "ITEMBOX_CAPACITY";

/// Capacity used when [`CAPACITY_ENV`] is unset.
pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub capacity: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DemoConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` (unset keys map to `None`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let capacity = match lookup(CAPACITY_ENV) {
            Some(raw) => parse_capacity(&raw)?,
            None => DEFAULT_CAPACITY,
        };
        Ok(Self { capacity })
    }
}

/// Zero is accepted: a zero-capacity box rejects every deposit.
fn parse_capacity(raw: &str) -> DomainResult<usize> {
    raw.trim().parse::<usize>().map_err(|e| {
        DomainError::validation(format!(
            "{CAPACITY_ENV} must be a non-negative integer (got {raw:?}): {e}"
        ))
    })
}
