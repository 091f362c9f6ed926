//! The output unit of a comparison.

use std::fmt;

use serde::Serialize;

use super::member::Member;
use crate::domain::value_objects::ChangeKind;

/// A member with no structural counterpart on the other side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    pub change: ChangeKind,
    pub member: Member,
}

impl Difference {
    pub fn removed(member: Member) -> Self {
        Self {
            change: ChangeKind::Removed,
            member,
        }
    }

    pub fn added(member: Member) -> Self {
        Self {
            change: ChangeKind::Added,
            member,
        }
    }

    /// The report line for this difference (no change marker).
    pub fn describe(&self) -> String {
        self.member.describe()
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.change.marker(), self.member.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MethodDescriptor, TypeRef};

    #[test]
    fn display_carries_marker() {
        let m = MethodDescriptor::new(&TypeRef::of("Acme.Widget"), "Spin");
        assert_eq!(
            Difference::added(m.clone().into()).to_string(),
            "+ Acme.Widget Void Spin()"
        );
        assert_eq!(
            Difference::removed(m.into()).to_string(),
            "- Acme.Widget Void Spin()"
        );
    }
}
