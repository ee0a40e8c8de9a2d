//! Internal models for the member table macros.
//!
//! These are built from syn items and keep span information for error
//! messages.

use proc_macro2::Span;
use syn::{Generics, Ident, ItemImpl, Type};
use varpath_naming::AccessorKind;

/// A struct deriving `Members`.
pub struct MembersInput {
    pub ident: Ident,
    pub generics: Generics,
    /// Readable fields, in declaration order.
    pub fields: Vec<FieldEntry>,
    /// Whether getter/asserter probes route to `MemberMethods`.
    pub methods: bool,
}

/// A public field exposed through the field probe.
pub struct FieldEntry {
    /// Lookup name (raw identifiers lose their `r#`).
    pub name: SpannedIdent,
    /// The field as written, for generating the access expression.
    pub ident: Ident,
}

/// An inherent impl block marked `#[member_methods]`.
pub struct MethodsInput {
    pub item: ItemImpl,
    pub self_ty: Type,
    pub accessors: Vec<AccessorEntry>,
}

/// A registered `get_*` / `is_*` method.
pub struct AccessorEntry {
    pub kind: AccessorKind,
    /// Capitalized member key the method answers.
    pub key: String,
    pub method: Ident,
}

/// Wrapper for identifiers that preserves span information.
#[derive(Clone)]
pub struct SpannedIdent {
    pub name: String,
    pub span: Span,
}

impl SpannedIdent {
    /// Create a SpannedIdent from a string and span.
    pub fn from_str(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}
