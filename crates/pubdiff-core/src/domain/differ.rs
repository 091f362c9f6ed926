//! Member-set differ.
//!
//! Walks two member graphs and reports every member that has no structural
//! counterpart on the other side. Matching is first-match in challenger
//! order; each challenger member is consumed at most once. The working set
//! of unmatched challenger members is owned by a single call and dropped
//! when it returns.
//!
//! Output order: baseline declaration order, with the differences of
//! matched nested types emitted inline, followed by leftover challenger
//! members in challenger declaration order.

use crate::domain::{
    entities::{
        AssemblyDescriptor, Difference, FieldDescriptor, Member, MethodDescriptor,
        PropertyDescriptor, TypeDescriptor,
    },
    error::DomainError,
    visibility::{visible_members, visible_types},
};

/// Compare the visible top-level types of two assemblies.
pub fn compare_assemblies(
    baseline: &AssemblyDescriptor,
    challenger: &AssemblyDescriptor,
) -> Vec<Difference> {
    let mut remaining = visible_types(challenger);
    let mut differences = Vec::new();

    for baseline_type in visible_types(baseline) {
        let found = take_first(&mut remaining, |candidate| {
            baseline_type
                .identity
                .same_identity(&candidate.identity)
                .then_some(candidate)
        });
        match found {
            Some(challenger_type) => {
                differences.extend(compare_types(baseline_type, challenger_type));
            }
            None => differences.push(Difference::removed(Member::Type(baseline_type.clone()))),
        }
    }

    differences.extend(
        remaining
            .into_iter()
            .map(|ty| Difference::added(Member::Type(ty.clone()))),
    );
    differences
}

/// Compare the visible members of two versions of one type.
///
/// Types with different identities are not versions of each other and
/// yield nothing.
pub fn compare_types(baseline: &TypeDescriptor, challenger: &TypeDescriptor) -> Vec<Difference> {
    if !baseline.identity.same_identity(&challenger.identity) {
        return Vec::new();
    }
    compare_members(&visible_members(baseline), &visible_members(challenger))
}

/// Compare two member lists.
///
/// Properties and events are consumed by name and never reported; their
/// accessors are expected in the lists as ordinary methods.
pub fn compare_members(baseline: &[Member], challenger: &[Member]) -> Vec<Difference> {
    let mut remaining: Vec<&Member> = challenger.iter().collect();
    let mut differences = Vec::new();

    for member in baseline {
        match member {
            Member::Type(baseline_type) => {
                let found = take_first(&mut remaining, |candidate| match candidate {
                    Member::Type(t) if baseline_type.identity.same_identity(&t.identity) => {
                        Some(t)
                    }
                    _ => None,
                });
                match found {
                    Some(challenger_type) => {
                        differences.extend(compare_types(baseline_type, challenger_type));
                    }
                    None => differences.push(Difference::removed(member.clone())),
                }
            }
            Member::Property(baseline_property) => {
                take_first(&mut remaining, |candidate| match candidate {
                    Member::Property(p) if p.name == baseline_property.name => Some(()),
                    _ => None,
                });
            }
            Member::Event(baseline_event) => {
                take_first(&mut remaining, |candidate| match candidate {
                    Member::Event(e) if e.name == baseline_event.name => Some(()),
                    _ => None,
                });
            }
            Member::Method(_) | Member::Constructor(_) | Member::Field(_) => {
                let found = take_first(&mut remaining, |candidate| {
                    matches!(are_equal(member, candidate), Ok(true)).then_some(())
                });
                if found.is_none() {
                    differences.push(Difference::removed(member.clone()));
                }
            }
        }
    }

    differences.extend(
        remaining
            .into_iter()
            .filter(|m| !matches!(m, Member::Property(_) | Member::Event(_)))
            .map(|m| Difference::added(m.clone())),
    );
    differences
}

/// Structural equality for methods, constructors and fields.
///
/// Mismatched kinds are simply unequal. A baseline type, property or event
/// is a caller error: use [`types_equal`] or [`properties_equal`].
pub fn are_equal(baseline: &Member, challenger: &Member) -> Result<bool, DomainError> {
    match (baseline, challenger) {
        (Member::Method(b), Member::Method(c)) | (Member::Constructor(b), Member::Constructor(c)) => {
            Ok(methods_equal(b, c))
        }
        (Member::Field(b), Member::Field(c)) => Ok(fields_equal(b, c)),
        (Member::Method(_) | Member::Constructor(_) | Member::Field(_), _) => Ok(false),
        (other, _) => Err(DomainError::UnsupportedMember {
            argument: "baseline",
            kind: other.kind(),
        }),
    }
}

/// Name, declaring type, public-ness, protected-ness, static-ness, and
/// parameter types position by position.
pub fn methods_equal(baseline: &MethodDescriptor, challenger: &MethodDescriptor) -> bool {
    baseline.name == challenger.name
        && baseline
            .declaring_type
            .same_identity(&challenger.declaring_type)
        && baseline.visibility.is_protected() == challenger.visibility.is_protected()
        && baseline.visibility.is_public() == challenger.visibility.is_public()
        && baseline.is_static == challenger.is_static
        && baseline.parameters.len() == challenger.parameters.len()
        && baseline
            .parameters
            .iter()
            .zip(&challenger.parameters)
            .all(|(b, c)| b.same_identity(c))
}

/// Fields cannot be overloaded, so the name alone decides.
pub fn fields_equal(baseline: &FieldDescriptor, challenger: &FieldDescriptor) -> bool {
    baseline.name == challenger.name
}

/// Same identity and no differences between their visible members.
pub fn types_equal(baseline: &TypeDescriptor, challenger: &TypeDescriptor) -> bool {
    baseline.identity.same_identity(&challenger.identity)
        && compare_types(baseline, challenger).is_empty()
}

/// Same name, same declaring type, and matching public accessors.
pub fn properties_equal(baseline: &PropertyDescriptor, challenger: &PropertyDescriptor) -> bool {
    let public_accessors = |p: &PropertyDescriptor| -> Vec<Member> {
        p.accessors()
            .into_iter()
            .filter(|m| m.visibility.is_public())
            .map(Member::Method)
            .collect()
    };

    baseline.name == challenger.name
        && baseline
            .declaring_type
            .same_identity(&challenger.declaring_type)
        && compare_members(&public_accessors(baseline), &public_accessors(challenger)).is_empty()
}

/// Remove and return the first element `select` accepts.
fn take_first<'a, T: ?Sized, U>(
    remaining: &mut Vec<&'a T>,
    mut select: impl FnMut(&'a T) -> Option<U>,
) -> Option<U> {
    let (index, selected) = remaining
        .iter()
        .enumerate()
        .find_map(|(i, candidate)| select(*candidate).map(|s| (i, s)))?;
    remaining.remove(index);
    Some(selected)
}
