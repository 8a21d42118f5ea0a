//! Record shapes and closed string sets for user and org preferences.
//!
//! These are transport-agnostic data structures that define the contract
//! between the preference storage layer and its consumers. Wire field
//! names are camelCase and every field is optional; a record with no
//! fields set serializes to an empty JSON object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::PrefsError;
use crate::theme::ThemePrefs;

/// Sort order for the document menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortPref {
    /// Alphabetical by document name.
    Name,
    /// Most recently changed first.
    Date,
}

impl SortPref {
    /// Every member of the set, in declaration order.
    pub const ALL: [Self; 2] = [Self::Name, Self::Date];

    /// The exact wire literal for this member.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for SortPref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortPref {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            other => Err(PrefsError::unknown_value("SortPref", other)),
        }
    }
}

/// View mode for the document menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewPref {
    /// Compact rows.
    List,
    /// Icon grid.
    Icons,
}

impl ViewPref {
    /// Every member of the set, in declaration order.
    pub const ALL: [Self; 2] = [Self::List, Self::Icons];

    /// The exact wire literal for this member.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Icons => "icons",
        }
    }
}

impl fmt::Display for ViewPref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewPref {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "icons" => Ok(Self::Icons),
            other => Err(PrefsError::unknown_value("ViewPref", other)),
        }
    }
}

/// Deprecated-feature warnings a user can see and dismiss.
///
/// The storage layer marks all of these as seen for newly created users,
/// so only pre-existing users are shown the warnings. The members double
/// as the identifiers of the deprecated keyboard shortcuts they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DeprecationWarning {
    DeprecatedInsertRowBefore,
    DeprecatedInsertRecordAfter,
    DeprecatedDeleteRecords,
}

impl DeprecationWarning {
    /// Every member of the set, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::DeprecatedInsertRowBefore,
        Self::DeprecatedInsertRecordAfter,
        Self::DeprecatedDeleteRecords,
    ];

    /// The exact wire literal for this member.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeprecatedInsertRowBefore => "deprecatedInsertRowBefore",
            Self::DeprecatedInsertRecordAfter => "deprecatedInsertRecordAfter",
            Self::DeprecatedDeleteRecords => "deprecatedDeleteRecords",
        }
    }
}

impl fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeprecationWarning {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deprecatedInsertRowBefore" => Ok(Self::DeprecatedInsertRowBefore),
            "deprecatedInsertRecordAfter" => Ok(Self::DeprecatedInsertRecordAfter),
            "deprecatedDeleteRecords" => Ok(Self::DeprecatedDeleteRecords),
            other => Err(PrefsError::unknown_value("DeprecationWarning", other)),
        }
    }
}

/// Confirmation popups a user can see and dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DismissedPopup {
    /// Confirmation for the delete-records keyboard shortcut.
    DeleteRecords,
    /// Confirmation for the delete-columns keyboard shortcut.
    DeleteFields,
}

impl DismissedPopup {
    /// Every member of the set, in declaration order.
    pub const ALL: [Self; 2] = [Self::DeleteRecords, Self::DeleteFields];

    /// The exact wire literal for this member.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeleteRecords => "deleteRecords",
            Self::DeleteFields => "deleteFields",
        }
    }
}

impl fmt::Display for DismissedPopup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DismissedPopup {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deleteRecords" => Ok(Self::DeleteRecords),
            "deleteFields" => Ok(Self::DeleteFields),
            other => Err(PrefsError::unknown_value("DismissedPopup", other)),
        }
    }
}

/// Base preference bag shared by every scope.
///
/// Carries no production fields; org-scoped records are currently exactly
/// this shape (see [`OrgPrefs`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prefs {
    /// Dummy field used only in tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Preferences scoped to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    /// Dummy field used only in tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether to ask the user to fill out the use-case form when the
    /// document menu opens. Set on first login and cleared when the form
    /// closes, so the form shows at most once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_new_user_questions: Option<bool>,

    /// Whether a sign-up analytics event still needs to be recorded. Set
    /// on first login and cleared once the event has been emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_sign_up_event: Option<bool>,

    /// Theme-related preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePrefs>,

    /// Deprecation warnings the user has already seen. Values are unique
    /// in practice, but the shape does not enforce it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen_deprecated_warnings: Option<Vec<DeprecationWarning>>,

    /// Confirmation popups the user has dismissed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissed_popups: Option<Vec<DismissedPopup>>,
}

/// Preferences scoped to a (user, org) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOrgPrefs {
    /// Dummy field used only in tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Sort order for the document menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_menu_sort: Option<SortPref>,

    /// View mode for the document menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_menu_view: Option<ViewPref>,

    /// Ids of example documents whose welcome card the user has
    /// dismissed. Scoped here so it applies only to the org that hosts
    /// the examples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen_examples: Option<Vec<i64>>,

    /// Whether the user should see the onboarding tour. The storage layer
    /// sets this to true when a user is created; pre-existing users keep
    /// it unset (false). Applies to the personal org only, where the tour
    /// is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grist_tour: Option<bool>,

    /// Ids of documents whose document tour the user has dismissed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen_doc_tours: Option<Vec<String>>,
}

/// Preferences scoped to an org. No org-specific fields exist yet.
pub type OrgPrefs = Prefs;
