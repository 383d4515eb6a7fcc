//! Process environment access with a test seam.
//!
//! Config layering reads several variables at load time. Routing the
//! lookups through [`Env`] lets tests inject values without mutating
//! the real process environment, which `std::env::set_var` can only do
//! unsafely under edition 2024.

#[cfg(test)]
use std::collections::HashMap;
use std::env::VarError;

/// Where environment variable lookups are answered from.
#[derive(Clone, Debug)]
pub enum Env {
    /// The real process environment.
    Process,
    /// A fixed table of values, for tests.
    #[cfg(test)]
    Table(HashMap<String, String>),
}

impl Env {
    /// An `Env` backed by the process environment.
    pub fn real() -> Self {
        Env::Process
    }

    /// An `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Env::Table(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a variable by name.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match self {
            Env::Process => std::env::var(name),
            #[cfg(test)]
            Env::Table(map) => map.get(name).cloned().ok_or(VarError::NotPresent),
        }
    }
}
