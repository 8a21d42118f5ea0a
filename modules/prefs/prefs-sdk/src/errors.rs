//! Error types for the prefs SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    #[error("unknown {set} value: {value}")]
    UnknownValue { set: &'static str, value: String },
}

impl PrefsError {
    #[must_use]
    pub fn unknown_value(set: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            set,
            value: value.into(),
        }
    }
}
