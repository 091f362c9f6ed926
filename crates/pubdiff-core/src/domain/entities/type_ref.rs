//! Structural type identity.
//!
//! A [`TypeRef`] names a type the way compiled metadata does: a namespace, a
//! simple name, and an ordered list of generic arguments. Two references from
//! different assemblies denote the same type when [`TypeRef::same_identity`]
//! holds; reference identity never matters.
//!
//! The string form accepted by [`FromStr`] and produced by [`fmt::Display`]:
//!
//! ```text
//! System.String
//! System.Collections.Generic.Dictionary<System.String, System.Int32>
//! Textile.Blocks.HyperLinkBlockModifier+Target
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A namespace-qualified, possibly generic, possibly nested type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    namespace: String,
    name: String,
    generic_arguments: Vec<TypeRef>,
    /// Enclosing type for nested types. Display only; not part of identity.
    enclosing: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// A non-generic, top-level type. `namespace` may be empty.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            generic_arguments: Vec::new(),
            enclosing: None,
        }
    }

    /// A type nested inside `outer`. It shares the outer type's namespace.
    pub fn nested_in(outer: &TypeRef, name: impl Into<String>) -> Self {
        Self {
            namespace: outer.namespace.clone(),
            name: name.into(),
            generic_arguments: Vec::new(),
            enclosing: Some(Box::new(outer.clone())),
        }
    }

    /// Parse a type reference, panicking on malformed input.
    ///
    /// Intended for literals in tests and fixtures; use [`FromStr`] for
    /// anything user-supplied.
    pub fn of(s: &str) -> Self {
        s.parse()
            .unwrap_or_else(|e| panic!("invalid type reference literal '{s}': {e}"))
    }

    pub fn with_generic_arguments(mut self, args: impl IntoIterator<Item = TypeRef>) -> Self {
        self.generic_arguments = args.into_iter().collect();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generic_arguments(&self) -> &[TypeRef] {
        &self.generic_arguments
    }

    pub fn enclosing(&self) -> Option<&TypeRef> {
        self.enclosing.as_deref()
    }

    pub fn is_nested(&self) -> bool {
        self.enclosing.is_some()
    }

    /// Structural identity: namespace, name, and generic arguments, the last
    /// compared position by position and recursively.
    pub fn same_identity(&self, other: &TypeRef) -> bool {
        self.namespace == other.namespace
            && self.name == other.name
            && self.generic_arguments.len() == other.generic_arguments.len()
            && self
                .generic_arguments
                .iter()
                .zip(&other.generic_arguments)
                .all(|(a, b)| a.same_identity(b))
    }

    /// `Namespace.Outer+Name<Args>`.
    pub fn full_name(&self) -> String {
        let mut out = match (&self.enclosing, self.namespace.is_empty()) {
            (Some(outer), _) => format!("{}+{}", outer.full_name(), self.name),
            (None, true) => self.name.clone(),
            (None, false) => format!("{}.{}", self.namespace, self.name),
        };
        if !self.generic_arguments.is_empty() {
            let args: Vec<String> = self.generic_arguments.iter().map(Self::full_name).collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for TypeRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |reason: &str| DomainError::InvalidTypeReference {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("empty type name"));
        }

        let segments =
            split_top_level(input, '+').ok_or_else(|| invalid("unbalanced angle brackets"))?;
        let mut segments = segments.into_iter();
        let (outermost, outer_args) = parse_segment(segments.next().unwrap_or_default())
            .map_err(|reason| invalid(reason))?;
        let (namespace, name) = outermost.rsplit_once('.').unwrap_or(("", outermost));
        check_identifier(name).map_err(|reason| invalid(reason))?;

        let mut current = TypeRef::new(namespace, name).with_generic_arguments(outer_args);
        for segment in segments {
            let (nested, args) = parse_segment(segment).map_err(|reason| invalid(reason))?;
            check_identifier(nested).map_err(|reason| invalid(reason))?;
            current = TypeRef::nested_in(&current, nested).with_generic_arguments(args);
        }

        Ok(current)
    }
}

/// One `+`-separated segment: a name and its own generic argument list.
fn parse_segment(segment: &str) -> Result<(&str, Vec<TypeRef>), &'static str> {
    let Some(open) = segment.find('<') else {
        return if segment.contains('>') {
            Err("unbalanced angle brackets")
        } else {
            Ok((segment, Vec::new()))
        };
    };
    let inner = segment[open + 1..]
        .strip_suffix('>')
        .ok_or("generic argument list is not closed")?;
    let args = split_top_level(inner, ',')
        .ok_or("unbalanced angle brackets")?
        .into_iter()
        .map(|arg| arg.parse::<TypeRef>().map_err(|_| "invalid generic argument"))
        .collect::<Result<Vec<_>, _>>()?;
    if args.is_empty() {
        return Err("empty generic argument list");
    }
    Ok((&segment[..open], args))
}

impl TryFrom<String> for TypeRef {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.full_name()
    }
}

fn check_identifier(segment: &str) -> Result<(), &'static str> {
    if segment.is_empty() {
        return Err("empty name segment");
    }
    if segment.chars().any(|c| c.is_whitespace() || matches!(c, ',' | '<' | '>')) {
        return Err("name contains an invalid character");
    }
    Ok(())
}

/// Split on `sep` at bracket depth zero. `None` when brackets don't balance.
fn split_top_level(s: &str, sep: char) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            c if c == sep && depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    let last = s[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    Some(parts)
}
