//! Code generation for the member table macros.
//!
//! Tables are plain `match` expressions over member names, fixed per type at
//! compile time:
//! - `#[derive(Members)]` produces `Members` (field probe, plus routing to
//!   `MemberMethods` when requested), `ToValue` and `From<Self> for Value`
//! - `#[member_methods]` re-emits the impl block and produces `MemberMethods`

use proc_macro2::TokenStream;
use quote::quote;
use syn::{LitStr, parse_quote};
use varpath_naming::AccessorKind;

use crate::input::{MembersInput, MethodsInput};

/// Main code generation entry point for `#[derive(Members)]`.
pub fn members_impl(input: &MembersInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_arms = input.fields.iter().map(|field| {
        let name = LitStr::new(&field.name.name, field.name.span);
        let member = &field.ident;
        quote! {
            #name => ::std::option::Option::Some(::varpath::ToValue::to_value(&self.#member)),
        }
    });

    let method_probes = if input.methods {
        quote! {
            fn call_getter(&self, member: &str) -> ::std::option::Option<::varpath::Value> {
                ::varpath::MemberMethods::getter(self, member)
            }

            fn call_asserter(&self, member: &str) -> ::std::option::Option<::varpath::Value> {
                ::varpath::MemberMethods::asserter(self, member)
            }
        }
    } else {
        TokenStream::new()
    };

    // Wrapping as an object needs an owned, shareable copy.
    let mut object_generics = input.generics.clone();
    object_generics
        .make_where_clause()
        .predicates
        .push(parse_quote! { #ident #ty_generics: ::std::clone::Clone + 'static });
    let (_, _, object_where_clause) = object_generics.split_for_impl();

    quote! {
        impl #impl_generics ::varpath::Members for #ident #ty_generics #where_clause {
            #method_probes

            fn read_field(&self, name: &str) -> ::std::option::Option<::varpath::Value> {
                match name {
                    #(#field_arms)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl #impl_generics ::varpath::ToValue for #ident #ty_generics #object_where_clause {
            fn to_value(&self) -> ::varpath::Value {
                ::varpath::Value::object(::std::clone::Clone::clone(self))
            }
        }

        impl #impl_generics ::std::convert::From<#ident #ty_generics> for ::varpath::Value
            #object_where_clause
        {
            fn from(object: #ident #ty_generics) -> Self {
                ::varpath::Value::object(object)
            }
        }
    }
}

/// Main code generation entry point for `#[member_methods]`.
pub fn methods_impl(input: &MethodsInput) -> TokenStream {
    let item = &input.item;
    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    let getter_arms = method_arms(input, AccessorKind::Getter);
    let asserter_arms = method_arms(input, AccessorKind::Asserter);

    quote! {
        #item

        impl #impl_generics ::varpath::MemberMethods for #self_ty #where_clause {
            fn getter(&self, member: &str) -> ::std::option::Option<::varpath::Value> {
                match member {
                    #(#getter_arms)*
                    _ => ::std::option::Option::None,
                }
            }

            fn asserter(&self, member: &str) -> ::std::option::Option<::varpath::Value> {
                match member {
                    #(#asserter_arms)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    }
}

/// Generate one `match` arm per registered method of `kind`.
fn method_arms(input: &MethodsInput, kind: AccessorKind) -> Vec<TokenStream> {
    input
        .accessors
        .iter()
        .filter(|entry| entry.kind == kind)
        .map(|entry| {
            let key = &entry.key;
            let method = &entry.method;
            quote! {
                #key => ::std::option::Option::Some(::varpath::ToValue::to_value(&self.#method())),
            }
        })
        .collect()
}
