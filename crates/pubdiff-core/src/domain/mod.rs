//! Core domain layer for pubdiff.
//!
//! Pure comparison logic over type descriptors. Loading descriptors and
//! writing reports are handled through ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: descriptors arrive fully built
//! - **No external crates**: only std, serde derives and thiserror
//! - **Immutable inputs**: comparisons never mutate descriptors
//! - **Structural identity**: types match by namespace, name and generic
//!   arguments, never by reference
//!
pub mod differ;
pub mod entities;
pub mod error;
pub mod value_objects;
pub mod visibility;

pub use entities::{
    AssemblyDescriptor, Difference, EventDescriptor, FieldDescriptor, Member, MethodDescriptor,
    PropertyDescriptor, TypeDescriptor, TypeRef,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ChangeKind, MemberKind, Visibility};

pub use differ::{
    are_equal, compare_assemblies, compare_members, compare_types, properties_equal, types_equal,
};
pub use visibility::{is_member_visible, is_type_visible, visible_members, visible_types};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn visibility_parses_metadata_aliases() {
        assert_eq!(Visibility::from_str("public").unwrap(), Visibility::Public);
        assert_eq!(Visibility::from_str("family").unwrap(), Visibility::Protected);
        assert_eq!(
            Visibility::from_str("FamORAssem").unwrap(),
            Visibility::ProtectedInternal
        );
        assert_eq!(
            Visibility::from_str("protected_internal").unwrap(),
            Visibility::ProtectedInternal
        );
        assert_eq!(Visibility::from_str("assembly").unwrap(), Visibility::Internal);
        assert!(Visibility::from_str("friend").is_err());
    }

    #[test]
    fn visibility_classification() {
        assert!(Visibility::Public.is_externally_visible());
        assert!(Visibility::ProtectedInternal.is_protected());
        assert!(!Visibility::PrivateProtected.is_protected());
        assert!(!Visibility::Internal.is_externally_visible());
    }

    #[test]
    fn visibility_serde_is_kebab_case() {
        let json = serde_json::to_string(&Visibility::ProtectedInternal).unwrap();
        assert_eq!(json, "\"protected-internal\"");
    }

    #[test]
    fn change_kind_markers() {
        assert_eq!(ChangeKind::Removed.marker(), '-');
        assert_eq!(ChangeKind::Added.marker(), '+');
        assert_eq!(ChangeKind::Removed.flipped(), ChangeKind::Added);
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn unsupported_member_message_names_argument_and_kind() {
        let err = DomainError::UnsupportedMember {
            argument: "baseline",
            kind: MemberKind::Property,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'baseline' is an unsupported member kind: property"
        );
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn validation_errors_carry_suggestions() {
        let err = DomainError::InvalidVisibility {
            value: "friend".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    // ========================================================================
    // Assembly Comparison Tests
    // ========================================================================

    #[test]
    fn identical_assemblies_have_no_differences() {
        let widget = TypeRef::of("Acme.Widget");
        let assembly = AssemblyDescriptor::new("Acme").with_type(
            TypeDescriptor::new(widget.clone())
                .with_member(MethodDescriptor::constructor(&widget))
                .with_member(MethodDescriptor::new(&widget, "Spin")),
        );
        assert!(compare_assemblies(&assembly, &assembly.clone()).is_empty());
    }

    #[test]
    fn removed_and_added_top_level_types() {
        let old = AssemblyDescriptor::new("Acme")
            .with_type(TypeDescriptor::new(TypeRef::of("Acme.Gear")));
        let new = AssemblyDescriptor::new("Acme")
            .with_type(TypeDescriptor::new(TypeRef::of("Acme.Sprocket")));

        let lines: Vec<String> = compare_assemblies(&old, &new)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines, vec!["- Acme.Gear", "+ Acme.Sprocket"]);
    }

    #[test]
    fn internal_top_level_types_are_ignored() {
        let old = AssemblyDescriptor::new("Acme").with_type(
            TypeDescriptor::new(TypeRef::of("Acme.Hidden")).visibility(Visibility::Internal),
        );
        let new = AssemblyDescriptor::new("Acme");
        assert!(compare_assemblies(&old, &new).is_empty());
    }
}
