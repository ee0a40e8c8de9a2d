//! Compile-time checks for the member table macros.
//!
//! Reports duplicate accessor keys and unknown `#[members(...)]` options,
//! with typo suggestions computed by Levenshtein distance.

use std::collections::HashMap;

use quote::ToTokens;
use strsim::levenshtein;
use varpath_naming::AccessorKind;

use crate::input::{AccessorEntry, MethodsInput};

/// Main validation entry point for `#[member_methods]`.
///
/// Two methods may not answer the same member with the same probe, e.g.
/// `get_title` and `get_Title` both register the getter `Title`.
pub fn validate_methods(input: &MethodsInput) -> syn::Result<()> {
    let mut seen: HashMap<(AccessorKind, &str), &AccessorEntry> = HashMap::new();

    for entry in &input.accessors {
        if let Some(first) = seen.insert((entry.kind, entry.key.as_str()), entry) {
            let probe = match entry.kind {
                AccessorKind::Getter => "getter",
                AccessorKind::Asserter => "asserter",
                AccessorKind::Field => "field",
            };
            return Err(syn::Error::new(
                entry.method.span(),
                format!(
                    "`{}` and `{}` both register the {probe} `{}`\nhelp: rename one of the methods",
                    first.method, entry.method, entry.key
                ),
            ));
        }
    }

    Ok(())
}

/// Error for an unsupported `#[members(...)]` option.
pub fn unknown_option(path: &impl ToTokens, name: &str, allowed: &[&str]) -> syn::Error {
    let mut msg = format!("unknown `members` option '{name}'");
    match compute_suggestions(name, allowed).first() {
        Some(suggestion) => msg.push_str(&format!("\nhelp: did you mean '{suggestion}'?")),
        None => msg.push_str(&format!("\nnote: supported options: {}", allowed.join(", "))),
    }
    syn::Error::new_spanned(path, msg)
}

/// Compute typo suggestions from a static slice of &str.
fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
