//! Builds the macro input models from syn items.

use proc_macro2::TokenStream;
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DeriveInput, Fields, FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType,
    Visibility,
};
use varpath_naming::accessor_for_method;

use crate::input::{AccessorEntry, FieldEntry, MembersInput, MethodsInput, SpannedIdent};
use crate::validate::unknown_option;

/// Options accepted in `#[members(...)]` on the struct.
const STRUCT_OPTIONS: &[&str] = &["methods"];

/// Options accepted in `#[members(...)]` on a field.
const FIELD_OPTIONS: &[&str] = &["skip"];

impl MembersInput {
    pub fn from_derive(input: DeriveInput) -> syn::Result<Self> {
        let methods = parse_options(&input.attrs, STRUCT_OPTIONS)?
            .iter()
            .any(|option| option == "methods");

        let named = match input.data {
            Data::Struct(data) => match data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Members` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(_) | Data::Union(_) => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "`Members` can only be derived for structs",
                ));
            }
        };

        let mut fields = Vec::new();
        for field in named.named {
            let skip = parse_options(&field.attrs, FIELD_OPTIONS)?
                .iter()
                .any(|option| option == "skip");
            if skip || !matches!(field.vis, Visibility::Public(_)) {
                continue;
            }
            let Some(ident) = field.ident else {
                continue;
            };
            fields.push(FieldEntry {
                name: SpannedIdent::from_str(ident.unraw().to_string(), ident.span()),
                ident,
            });
        }

        Ok(MembersInput {
            ident: input.ident,
            generics: input.generics,
            fields,
            methods,
        })
    }
}

impl MethodsInput {
    pub fn from_impl(args: TokenStream, item: ItemImpl) -> syn::Result<Self> {
        if !args.is_empty() {
            return Err(syn::Error::new_spanned(
                args,
                "`#[member_methods]` takes no arguments",
            ));
        }
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new_spanned(
                path,
                "`#[member_methods]` goes on an inherent impl block, not a trait impl",
            ));
        }

        let accessors = item
            .items
            .iter()
            .filter_map(|impl_item| match impl_item {
                ImplItem::Fn(method) => accessor_entry(method),
                _ => None,
            })
            .collect();

        Ok(MethodsInput {
            self_ty: (*item.self_ty).clone(),
            item,
            accessors,
        })
    }
}

/// Classifies a method, returning `None` unless it can be called as
/// `self.method()` and is named like an accessor.
fn accessor_entry(method: &ImplItemFn) -> Option<AccessorEntry> {
    let sig = &method.sig;
    if !matches!(method.vis, Visibility::Public(_))
        || sig.asyncness.is_some()
        || sig.unsafety.is_some()
        || !sig.generics.params.is_empty()
        || sig.inputs.len() != 1
        || matches!(sig.output, ReturnType::Default)
    {
        return None;
    }
    let Some(FnArg::Receiver(receiver)) = sig.inputs.first() else {
        return None;
    };
    if receiver.reference.is_none() || receiver.mutability.is_some() {
        return None;
    }

    let (kind, key) = accessor_for_method(&sig.ident.unraw().to_string())?;
    Some(AccessorEntry {
        kind,
        key,
        method: sig.ident.clone(),
    })
}

/// Collects the flags of every `#[members(...)]` attribute.
fn parse_options(attrs: &[Attribute], allowed: &[&str]) -> syn::Result<Vec<String>> {
    let mut options = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("members")) {
        attr.parse_nested_meta(|meta| {
            let name = meta
                .path
                .get_ident()
                .map(ToString::to_string)
                .unwrap_or_default();
            if allowed.contains(&name.as_str()) {
                options.push(name);
                Ok(())
            } else {
                Err(unknown_option(&meta.path, &name, allowed))
            }
        })?;
    }
    Ok(options)
}
