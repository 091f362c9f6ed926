//! Type descriptors: the language-neutral stand-in for reflection metadata.
//!
//! A [`Member`] is a tagged variant over everything a compiled type can
//! expose. Descriptors are built once (by a loader adapter or by hand in
//! tests) and never mutated during a comparison.

use serde::Serialize;

use super::type_ref::TypeRef;
use crate::domain::value_objects::{MemberKind, Visibility};

const CONSTRUCTOR_NAME: &str = ".ctor";
const STATIC_CONSTRUCTOR_NAME: &str = ".cctor";

// ── Member ────────────────────────────────────────────────────────────────────

/// One element of a type's member graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Member {
    /// A nested type.
    Type(TypeDescriptor),
    Method(MethodDescriptor),
    Constructor(MethodDescriptor),
    Field(FieldDescriptor),
    Property(PropertyDescriptor),
    Event(EventDescriptor),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Self::Type(_) => MemberKind::Type,
            Self::Method(_) => MemberKind::Method,
            Self::Constructor(_) => MemberKind::Constructor,
            Self::Field(_) => MemberKind::Field,
            Self::Property(_) => MemberKind::Property,
            Self::Event(_) => MemberKind::Event,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Type(t) => t.identity.name(),
            Self::Method(m) | Self::Constructor(m) => &m.name,
            Self::Field(f) => &f.name,
            Self::Property(p) => &p.name,
            Self::Event(e) => &e.name,
        }
    }

    /// The type that declares this member; the enclosing type for nested
    /// types. Differs from the owning type for inherited members.
    pub fn declaring_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Type(t) => t.identity.enclosing(),
            Self::Method(m) | Self::Constructor(m) => Some(&m.declaring_type),
            Self::Field(f) => Some(&f.declaring_type),
            Self::Property(p) => Some(&p.declaring_type),
            Self::Event(e) => Some(&e.declaring_type),
        }
    }

    /// One report line: `<owning-type-full-name> <member-signature>`, or
    /// just the full name for a type.
    pub fn describe(&self) -> String {
        match self {
            Self::Type(t) => t.identity.full_name(),
            Self::Method(m) | Self::Constructor(m) => format!("{} {}", m.owner, m.signature()),
            Self::Field(f) => format!("{} {}", f.owner, f.signature()),
            Self::Property(p) => format!("{} {} {}", p.owner, p.property_type, p.name),
            Self::Event(e) => format!("{} {}", e.owner, e.signature()),
        }
    }
}

impl From<MethodDescriptor> for Member {
    fn from(method: MethodDescriptor) -> Self {
        if method.is_constructor() {
            Self::Constructor(method)
        } else {
            Self::Method(method)
        }
    }
}

impl From<TypeDescriptor> for Member {
    fn from(value: TypeDescriptor) -> Self {
        Self::Type(value)
    }
}

impl From<FieldDescriptor> for Member {
    fn from(value: FieldDescriptor) -> Self {
        Self::Field(value)
    }
}

impl From<PropertyDescriptor> for Member {
    fn from(value: PropertyDescriptor) -> Self {
        Self::Property(value)
    }
}

impl From<EventDescriptor> for Member {
    fn from(value: EventDescriptor) -> Self {
        Self::Event(value)
    }
}

// ── AssemblyDescriptor ────────────────────────────────────────────────────────

/// A compiled unit: a name and its top-level types in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AssemblyDescriptor {
    pub name: String,
    pub types: Vec<TypeDescriptor>,
}

impl AssemblyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeDescriptor) -> Self {
        self.types.push(ty);
        self
    }

    /// Depth-first search through top-level and nested types by full name.
    pub fn find_type(&self, full_name: &str) -> Option<&TypeDescriptor> {
        fn search<'a>(ty: &'a TypeDescriptor, full_name: &str) -> Option<&'a TypeDescriptor> {
            if ty.identity.full_name() == full_name {
                return Some(ty);
            }
            ty.nested_types().find_map(|nested| search(nested, full_name))
        }
        self.types.iter().find_map(|ty| search(ty, full_name))
    }
}

// ── TypeDescriptor ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDescriptor {
    pub identity: TypeRef,
    pub visibility: Visibility,
    pub members: Vec<Member>,
}

impl TypeDescriptor {
    pub fn new(identity: TypeRef) -> Self {
        Self {
            identity,
            visibility: Visibility::Public,
            members: Vec::new(),
        }
    }

    /// A nested type declared inside `outer`.
    pub fn nested(outer: &TypeRef, name: impl Into<String>) -> Self {
        Self::new(TypeRef::nested_in(outer, name))
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn is_nested(&self) -> bool {
        self.identity.is_nested()
    }

    pub fn nested_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.members.iter().filter_map(|m| match m {
            Member::Type(t) => Some(t),
            _ => None,
        })
    }

    /// First method or constructor with the given name.
    pub fn find_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.members.iter().find_map(|m| match m {
            Member::Method(method) | Member::Constructor(method) if method.name == name => {
                Some(method)
            }
            _ => None,
        })
    }
}

// ── MethodDescriptor ──────────────────────────────────────────────────────────

/// A method or constructor signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub owner: TypeRef,
    pub declaring_type: TypeRef,
    pub visibility: Visibility,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub parameters: Vec<TypeRef>,
    pub return_type: Option<TypeRef>,
}

impl MethodDescriptor {
    /// A public instance method with no parameters returning nothing.
    pub fn new(owner: &TypeRef, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.clone(),
            declaring_type: owner.clone(),
            visibility: Visibility::Public,
            is_static: false,
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// A public instance constructor (`.ctor`).
    pub fn constructor(owner: &TypeRef) -> Self {
        Self::new(owner, CONSTRUCTOR_NAME)
    }

    /// Mark the method as inherited from `base`.
    pub fn declared_in(mut self, base: TypeRef) -> Self {
        self.declaring_type = base;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn parameter(mut self, ty: TypeRef) -> Self {
        self.parameters.push(ty);
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME || self.name == STATIC_CONSTRUCTOR_NAME
    }

    /// `<ReturnType> <Name>(<Param>, ...)`; `Void` when nothing is returned.
    pub fn signature(&self) -> String {
        let ret = self
            .return_type
            .as_ref()
            .map_or_else(|| "Void".to_string(), TypeRef::full_name);
        let params: Vec<String> = self.parameters.iter().map(TypeRef::full_name).collect();
        format!("{ret} {}({})", self.name, params.join(", "))
    }
}

// ── FieldDescriptor ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub owner: TypeRef,
    pub declaring_type: TypeRef,
    pub visibility: Visibility,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub field_type: TypeRef,
}

impl FieldDescriptor {
    pub fn new(owner: &TypeRef, name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            owner: owner.clone(),
            declaring_type: owner.clone(),
            visibility: Visibility::Public,
            is_static: false,
            field_type,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn declared_in(mut self, base: TypeRef) -> Self {
        self.declaring_type = base;
        self
    }

    pub fn signature(&self) -> String {
        format!("{} {}", self.field_type, self.name)
    }
}

// ── PropertyDescriptor ────────────────────────────────────────────────────────

/// A property. Only its accessors take part in comparisons.
///
/// `get`/`set` hold the accessor visibility, `None` when the accessor is
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub owner: TypeRef,
    pub declaring_type: TypeRef,
    pub property_type: TypeRef,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub get: Option<Visibility>,
    pub set: Option<Visibility>,
}

impl PropertyDescriptor {
    /// A property with no accessors yet.
    pub fn new(owner: &TypeRef, name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            owner: owner.clone(),
            declaring_type: owner.clone(),
            property_type,
            is_static: false,
            get: None,
            set: None,
        }
    }

    pub fn getter(mut self, visibility: Visibility) -> Self {
        self.get = Some(visibility);
        self
    }

    pub fn setter(mut self, visibility: Visibility) -> Self {
        self.set = Some(visibility);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn declared_in(mut self, base: TypeRef) -> Self {
        self.declaring_type = base;
        self
    }

    /// `get_<Name>()` then `set_<Name>(<type>)`, whichever exist.
    pub fn accessors(&self) -> Vec<MethodDescriptor> {
        let mut accessors = Vec::with_capacity(2);
        if let Some(visibility) = self.get {
            accessors.push(
                MethodDescriptor::new(&self.owner, format!("get_{}", self.name))
                    .declared_in(self.declaring_type.clone())
                    .visibility(visibility)
                    .with_static(self.is_static)
                    .returns(self.property_type.clone()),
            );
        }
        if let Some(visibility) = self.set {
            accessors.push(
                MethodDescriptor::new(&self.owner, format!("set_{}", self.name))
                    .declared_in(self.declaring_type.clone())
                    .visibility(visibility)
                    .with_static(self.is_static)
                    .parameter(self.property_type.clone()),
            );
        }
        accessors
    }
}

// ── EventDescriptor ───────────────────────────────────────────────────────────

/// An event. Its `add_`/`remove_` accessors are compared as methods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDescriptor {
    pub name: String,
    pub owner: TypeRef,
    pub declaring_type: TypeRef,
    pub handler_type: TypeRef,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub add: Visibility,
    pub remove: Visibility,
}

impl EventDescriptor {
    /// A public event with public accessors.
    pub fn new(owner: &TypeRef, name: impl Into<String>, handler_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            owner: owner.clone(),
            declaring_type: owner.clone(),
            handler_type,
            is_static: false,
            add: Visibility::Public,
            remove: Visibility::Public,
        }
    }

    /// Set both accessor visibilities.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.add = visibility;
        self.remove = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn declared_in(mut self, base: TypeRef) -> Self {
        self.declaring_type = base;
        self
    }

    pub fn signature(&self) -> String {
        format!("{} {}", self.handler_type, self.name)
    }

    /// `add_<Name>(<handler>)` then `remove_<Name>(<handler>)`.
    pub fn accessors(&self) -> Vec<MethodDescriptor> {
        [("add", self.add), ("remove", self.remove)]
            .into_iter()
            .map(|(prefix, visibility)| {
                MethodDescriptor::new(&self.owner, format!("{prefix}_{}", self.name))
                    .declared_in(self.declaring_type.clone())
                    .visibility(visibility)
                    .with_static(self.is_static)
                    .parameter(self.handler_type.clone())
            })
            .collect()
    }
}
