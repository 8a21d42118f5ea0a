//! Prefs SDK
//!
//! Shared preference vocabulary for the document workspace:
//! - Record shapes (`UserPrefs`, `UserOrgPrefs`, `OrgPrefs`) keyed by user
//!   id, org id, or both
//! - Closed string sets (`SortPref`, `ViewPref`, `DeprecationWarning`,
//!   `DismissedPopup`) with their exact wire literals
//! - Theme preferences (`ThemePrefs`)
//! - Error type (`PrefsError`)
//!
//! This crate is a contract, not a service: the storage layer, request
//! handlers, and UI all read and write these shapes, and all defaulting
//! and merge behavior lives with those consumers. Every field is optional
//! and absence means "unset", so an empty record is a valid record.

#![forbid(unsafe_code)]

pub mod errors;
pub mod models;
pub mod theme;

pub use errors::PrefsError;
pub use models::{
    DeprecationWarning, DismissedPopup, OrgPrefs, Prefs, SortPref, UserOrgPrefs, UserPrefs,
    ViewPref,
};
pub use theme::{ThemeAppearance, ThemeColors, ThemePrefs};
