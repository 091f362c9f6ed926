//! Which members take part in a comparison.
//!
//! Only externally visible surface counts: public, protected and
//! protected-internal. Properties never participate themselves; their
//! accessor methods stand in for them. Events always participate and their
//! accessors are filtered like any other method.
//!
//! [`visible_types`] deliberately lists top-level types only, even though
//! public nested types are part of the visible surface too. Nested types
//! are compared once, through their enclosing type's member list.

use crate::domain::entities::{AssemblyDescriptor, Member, MethodDescriptor, TypeDescriptor};

/// Whether `member` participates in comparison at all.
pub fn is_member_visible(member: &Member) -> bool {
    match member {
        Member::Type(ty) => ty.visibility.is_externally_visible(),
        Member::Method(m) | Member::Constructor(m) => m.visibility.is_externally_visible(),
        Member::Field(f) => f.visibility.is_externally_visible(),
        Member::Event(_) => true,
        Member::Property(_) => false,
    }
}

/// Whether a type is part of an assembly's visible surface.
///
/// Top-level types must be public. Nested types follow the member rule.
pub fn is_type_visible(ty: &TypeDescriptor) -> bool {
    if ty.is_nested() {
        ty.visibility.is_externally_visible()
    } else {
        ty.visibility.is_public()
    }
}

/// The members of `ty` that take part in comparison, in declaration order.
///
/// Each property is replaced by its visible accessors. Each event is kept
/// and followed by its visible accessors.
pub fn visible_members(ty: &TypeDescriptor) -> Vec<Member> {
    let mut visible = Vec::with_capacity(ty.members.len());
    for member in &ty.members {
        match member {
            Member::Property(p) => visible.extend(visible_accessors(p.accessors())),
            Member::Event(e) => {
                visible.push(member.clone());
                visible.extend(visible_accessors(e.accessors()));
            }
            other if is_member_visible(other) => visible.push(other.clone()),
            _ => {}
        }
    }
    visible
}

/// The visible top-level types of `assembly`, in declaration order.
///
/// Nested types are reached through member recursion, never listed here.
pub fn visible_types(assembly: &AssemblyDescriptor) -> Vec<&TypeDescriptor> {
    assembly.types.iter().filter(|t| is_type_visible(t)).collect()
}

fn visible_accessors(accessors: Vec<MethodDescriptor>) -> impl Iterator<Item = Member> {
    accessors
        .into_iter()
        .filter(|m| m.visibility.is_externally_visible())
        .map(Member::Method)
}
