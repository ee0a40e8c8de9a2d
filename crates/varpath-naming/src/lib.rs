//! Shared member naming rules used by both runtime lookup (`varpath`) and the
//! member table generators (`varpath-macros`).
//!
//! A segment `name` is looked up on an object by probing a getter and an
//! asserter registered under the capitalized form `Name`, then a field called
//! exactly `name`. The macros register `get_name` / `is_name` methods under the
//! same capitalized key, so both sides must agree on [`capitalize`].

use std::borrow::Cow;

/// One kind of object member probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// A zero-argument `get_<member>` method.
    Getter,
    /// A zero-argument boolean-style `is_<member>` method.
    Asserter,
    /// A publicly readable field.
    Field,
}

impl AccessorKind {
    /// Probes in the order object lookup tries them. Never reordered.
    pub const LOOKUP_ORDER: [AccessorKind; 3] = [
        AccessorKind::Getter,
        AccessorKind::Asserter,
        AccessorKind::Field,
    ];

    /// Method name prefix for method-backed probes.
    pub fn method_prefix(self) -> Option<&'static str> {
        match self {
            AccessorKind::Getter => Some("get_"),
            AccessorKind::Asserter => Some("is_"),
            AccessorKind::Field => None,
        }
    }

    /// Whether this probe is keyed by the capitalized member name.
    pub fn uses_capitalized_key(self) -> bool {
        self.method_prefix().is_some()
    }
}

/// Uppercases the first character of `name` if it is an ASCII lowercase
/// letter. All other characters are left untouched.
///
/// ```
/// use varpath_naming::capitalize;
///
/// assert_eq!(capitalize("firstName"), "FirstName");
/// assert_eq!(capitalize("first_name"), "First_name");
/// assert_eq!(capitalize("émile"), "émile");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(name: &str) -> Cow<'_, str> {
    match name.as_bytes().first() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut owned = name.to_owned();
            owned[..1].make_ascii_uppercase();
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(name),
    }
}

/// Classifies a method identifier as a getter or asserter and returns the key
/// it is registered under.
///
/// `get_title` registers the getter `Title`, `is_visible` the asserter
/// `Visible`. Identifiers without a prefix, or with nothing after it, are not
/// accessors.
pub fn accessor_for_method(method: &str) -> Option<(AccessorKind, String)> {
    [AccessorKind::Getter, AccessorKind::Asserter]
        .into_iter()
        .find_map(|kind| {
            let member = method.strip_prefix(kind.method_prefix()?)?;
            if member.is_empty() {
                return None;
            }
            Some((kind, capitalize(member).into_owned()))
        })
}

/// Returns the method names that would be probed for `name`, in lookup order.
///
/// Used for diagnostics; lookup itself goes through the capitalized key.
pub fn probed_method_names(name: &str) -> [String; 2] {
    [format!("get_{name}"), format!("is_{name}")]
}
