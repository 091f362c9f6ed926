//! Filesystem-based descriptor loader.
//!
//! Reads assembly descriptors from `.toml` or `.json` files and converts them
//! into domain [`AssemblyDescriptor`] values ready for comparison.
//!
//! # Layout accepted
//!
//! ```text
//! textile-base.toml             ← one file, one assembly
//!
//! textile-base/                 ← directory: every .toml/.json below it,
//! ├── blocks.toml                  loaded in path order and merged into
//! └── states/                      one assembly named after the directory
//!     └── formatter.json
//! ```
//!
//! # Descriptor format
//!
//! ```toml
//! name = "Textile"
//!
//! [[types]]
//! namespace  = "Textile.Blocks"
//! name       = "CodeBlockModifier"
//! visibility = "public"          # default: public
//!
//! [[types.members]]
//! kind       = "method"          # type | method | constructor | field | property | event
//! name       = "CodeFormatMatchEvaluator"
//! static     = true              # default: false
//! returns    = "System.String"   # omitted: Void
//! parameters = ["System.Text.RegularExpressions.Match"]
//!
//! [[types.members]]
//! kind = "property"
//! name = "Pattern"
//! type = "System.String"
//! get  = "public"                # omitted: no getter
//! set  = "internal"              # omitted: no setter
//!
//! [[types.members]]
//! kind        = "method"
//! name        = "ModifyLine"
//! declared_in = "Textile.BlockModifier"   # inherited; omitted: this type
//! ```
//!
//! Unknown keys are rejected rather than ignored.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use pubdiff_core::{
    application::{ApplicationError, ports::DescriptorSource},
    domain::{
        AssemblyDescriptor, DomainError, EventDescriptor, FieldDescriptor, Member,
        MethodDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef, Visibility,
    },
    error::PubdiffResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one descriptor file.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct AssemblyManifest {
    /// Assembly name. Defaults to the file stem.
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

/// One `[[types]]` entry: a top-level type.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    pub visibility: Option<String>,
    #[serde(default)]
    pub generic_arguments: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

/// One `[[types.members]]` entry, tagged by `kind`.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberEntry {
    Type(NestedTypeEntry),
    Method(MethodEntry),
    Constructor(ConstructorEntry),
    Field(FieldEntry),
    Property(PropertyEntry),
    Event(EventEntry),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct NestedTypeEntry {
    pub name: String,
    pub visibility: Option<String>,
    #[serde(default)]
    pub generic_arguments: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct MethodEntry {
    pub name: String,
    /// Base type an inherited member comes from; the owning type when absent.
    pub declared_in: Option<String>,
    pub visibility: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    pub returns: Option<String>,
    #[serde(default)]
    pub parameters: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConstructorEntry {
    pub visibility: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub parameters: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,
    pub declared_in: Option<String>,
    #[serde(rename = "type")]
    pub field_type: String,
    pub visibility: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct PropertyEntry {
    pub name: String,
    pub declared_in: Option<String>,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    pub get: Option<String>,
    pub set: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct EventEntry {
    pub name: String,
    pub declared_in: Option<String>,
    pub handler: String,
    pub visibility: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    pub add: Option<String>,
    pub remove: Option<String>,
}

/// Serialisation format, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Toml,
    Json,
}

impl DescriptorFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
enum ParseFailure {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`AssemblyDescriptor`]s from descriptor files or directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemDescriptorLoader;

impl FilesystemDescriptorLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load one file, or every descriptor file below a directory.
    #[instrument(skip(self), fields(path = %location.display()))]
    pub fn load_path(&self, location: &Path) -> PubdiffResult<AssemblyDescriptor> {
        if !location.exists() {
            return Err(ApplicationError::DescriptorLoad {
                path: location.to_path_buf(),
                reason: "path does not exist".into(),
            }
            .into());
        }

        if location.is_dir() {
            self.load_dir(location)
        } else {
            self.load_file(location)
        }
    }

    fn load_dir(&self, dir: &Path) -> PubdiffResult<AssemblyDescriptor> {
        let mut assembly = AssemblyDescriptor::new(file_stem(dir));

        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::DescriptorLoad {
                path: dir.to_path_buf(),
                reason: format!("directory walk error: {e}"),
            })?;
            if !entry.file_type().is_file() || DescriptorFormat::from_path(entry.path()).is_none()
            {
                continue;
            }

            let part = self.load_file(entry.path())?;
            debug!(
                file = %entry.path().display(),
                types = part.types.len(),
                "merged descriptor file"
            );
            assembly.types.extend(part.types);
        }

        debug!(types = assembly.types.len(), "finished loading directory");
        Ok(assembly)
    }

    fn load_file(&self, path: &Path) -> PubdiffResult<AssemblyDescriptor> {
        let format = DescriptorFormat::from_path(path).ok_or_else(|| {
            DomainError::InvalidDescriptor(format!(
                "{}: expected a .toml or .json file",
                path.display()
            ))
        })?;

        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::DescriptorLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let assembly = parse_descriptor(&raw, format, &file_stem(path))
            .map_err(|e| DomainError::InvalidDescriptor(format!("{}: {e}", path.display())))?;

        debug!(name = %assembly.name, types = assembly.types.len(), "loaded descriptor");
        Ok(assembly)
    }
}

impl DescriptorSource for FilesystemDescriptorLoader {
    fn load(&self, location: &Path) -> PubdiffResult<AssemblyDescriptor> {
        self.load_path(location)
    }
}

// ── Conversion ────────────────────────────────────────────────────────────────

/// Parse descriptor text. `default_name` is used when the file has no `name`.
pub fn parse_descriptor(
    raw: &str,
    format: DescriptorFormat,
    default_name: &str,
) -> Result<AssemblyDescriptor, String> {
    parse_manifest(raw, format)
        .and_then(|manifest| Ok(manifest.into_assembly(default_name)?))
        .map_err(|e| e.to_string())
}

fn parse_manifest(raw: &str, format: DescriptorFormat) -> Result<AssemblyManifest, ParseFailure> {
    Ok(match format {
        DescriptorFormat::Toml => toml::from_str(raw)?,
        DescriptorFormat::Json => serde_json::from_str(raw)?,
    })
}

impl AssemblyManifest {
    pub fn into_assembly(self, default_name: &str) -> Result<AssemblyDescriptor, DomainError> {
        let mut assembly = AssemblyDescriptor::new(self.name.unwrap_or_else(|| default_name.into()));
        for entry in self.types {
            assembly.types.push(entry.into_type()?);
        }
        Ok(assembly)
    }
}

impl TypeEntry {
    fn into_type(self) -> Result<TypeDescriptor, DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        let full_name = if self.namespace.is_empty() {
            self.name
        } else {
            format!("{}.{}", self.namespace, self.name)
        };
        let identity = full_name
            .parse::<TypeRef>()?
            .with_generic_arguments(parse_types(&self.generic_arguments)?);
        build_type(identity, self.visibility.as_deref(), self.members)
    }
}

fn build_type(
    identity: TypeRef,
    visibility: Option<&str>,
    members: Vec<MemberEntry>,
) -> Result<TypeDescriptor, DomainError> {
    let mut ty = TypeDescriptor::new(identity).visibility(parse_visibility(visibility)?);
    for entry in members {
        let member = entry.into_member(&ty.identity)?;
        ty.members.push(member);
    }
    Ok(ty)
}

impl MemberEntry {
    fn into_member(self, owner: &TypeRef) -> Result<Member, DomainError> {
        Ok(match self {
            Self::Type(t) => {
                let identity = TypeRef::nested_in(owner, t.name)
                    .with_generic_arguments(parse_types(&t.generic_arguments)?);
                Member::Type(build_type(identity, t.visibility.as_deref(), t.members)?)
            }
            Self::Method(m) => {
                let mut method = MethodDescriptor::new(owner, m.name)
                    .declared_in(declaring_type(owner, m.declared_in.as_deref())?)
                    .visibility(parse_visibility(m.visibility.as_deref())?)
                    .with_static(m.is_static);
                method.parameters = parse_types(&m.parameters)?;
                method.return_type = m.returns.as_deref().map(str::parse::<TypeRef>).transpose()?;
                Member::from(method)
            }
            Self::Constructor(c) => {
                let mut ctor = MethodDescriptor::constructor(owner)
                    .visibility(parse_visibility(c.visibility.as_deref())?)
                    .with_static(c.is_static);
                if c.is_static {
                    ctor.name = ".cctor".into();
                }
                ctor.parameters = parse_types(&c.parameters)?;
                Member::Constructor(ctor)
            }
            Self::Field(f) => Member::Field(
                FieldDescriptor::new(owner, f.name, f.field_type.parse()?)
                    .declared_in(declaring_type(owner, f.declared_in.as_deref())?)
                    .visibility(parse_visibility(f.visibility.as_deref())?)
                    .with_static(f.is_static),
            ),
            Self::Property(p) => {
                let mut property = PropertyDescriptor::new(owner, p.name, p.property_type.parse()?)
                    .declared_in(declaring_type(owner, p.declared_in.as_deref())?)
                    .with_static(p.is_static);
                property.get = p.get.as_deref().map(str::parse::<Visibility>).transpose()?;
                property.set = p.set.as_deref().map(str::parse::<Visibility>).transpose()?;
                Member::Property(property)
            }
            Self::Event(e) => {
                let default = parse_visibility(e.visibility.as_deref())?;
                let mut event = EventDescriptor::new(owner, e.name, e.handler.parse()?)
                    .declared_in(declaring_type(owner, e.declared_in.as_deref())?)
                    .visibility(default)
                    .with_static(e.is_static);
                event.add = e.add.as_deref().map_or(Ok(default), str::parse::<Visibility>)?;
                event.remove = e.remove.as_deref().map_or(Ok(default), str::parse::<Visibility>)?;
                Member::Event(event)
            }
        })
    }
}

fn parse_visibility(value: Option<&str>) -> Result<Visibility, DomainError> {
    value.map_or(Ok(Visibility::Public), str::parse::<Visibility>)
}

fn declaring_type(owner: &TypeRef, declared_in: Option<&str>) -> Result<TypeRef, DomainError> {
    declared_in.map_or_else(|| Ok(owner.clone()), str::parse::<TypeRef>)
}

fn parse_types(values: &[String]) -> Result<Vec<TypeRef>, DomainError> {
    values.iter().map(|v| v.parse()).collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
