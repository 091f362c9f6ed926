//! Domain value objects: Visibility, MemberKind, ChangeKind.
//!
//! # Design
//!
//! These are plain `Copy` values with no identity.
//! They hold no comparison logic. Matching rules live in `differ.rs` and
//! participation rules live in `visibility.rs`. This file's only job is to
//! define the types, their string representations, and their `FromStr`
//! parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Visibility ────────────────────────────────────────────────────────────────

/// Accessibility of a type or member as recorded in compiled metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    /// Visible to derived types (`family`).
    Protected,
    /// Visible to derived types or the same assembly (`famorassem`).
    ProtectedInternal,
    /// Visible to the same assembly only.
    Internal,
    /// Visible to derived types in the same assembly only (`famandassem`).
    PrivateProtected,
    Private,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected-internal",
            Self::Internal => "internal",
            Self::PrivateProtected => "private-protected",
            Self::Private => "private",
        }
    }

    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }

    /// Protected and protected-internal both count as protected.
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Protected | Self::ProtectedInternal)
    }

    /// Reachable from outside the declaring assembly.
    pub const fn is_externally_visible(self) -> bool {
        self.is_public() || self.is_protected()
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "public" => Ok(Self::Public),
            "protected" | "family" => Ok(Self::Protected),
            "protected-internal" | "family-or-assembly" | "famorassem" => {
                Ok(Self::ProtectedInternal)
            }
            "internal" | "assembly" => Ok(Self::Internal),
            "private-protected" | "family-and-assembly" | "famandassem" => {
                Ok(Self::PrivateProtected)
            }
            "private" => Ok(Self::Private),
            _ => Err(DomainError::InvalidVisibility {
                value: s.to_string(),
            }),
        }
    }
}

// ── MemberKind ────────────────────────────────────────────────────────────────

/// Discriminant of a [`crate::domain::Member`], used for errors and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Type,
    Method,
    Constructor,
    Field,
    Property,
    Event,
}

impl MemberKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Field => "field",
            Self::Property => "property",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ChangeKind ────────────────────────────────────────────────────────────────

/// Which side an unmatched member was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present in the baseline, no structural counterpart in the challenger.
    Removed,
    /// Present in the challenger, no structural counterpart in the baseline.
    Added,
}

impl ChangeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Removed => "removed",
            Self::Added => "added",
        }
    }

    /// Single-character marker used in human output.
    pub const fn marker(&self) -> char {
        match self {
            Self::Removed => '-',
            Self::Added => '+',
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Removed => Self::Added,
            Self::Added => Self::Removed,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
