use proc_macro::TokenStream;

mod codegen;
mod input;
mod parse;
mod validate;

/// Derives `varpath::Members` for a struct with named fields.
///
/// Every `pub` field becomes readable through the field probe under its own
/// name. Non-public fields and fields marked `#[members(skip)]` are invisible.
///
/// With `#[members(methods)]` on the struct, getter and asserter probes are
/// routed to the table generated by `#[member_methods]` on one of the type's
/// `impl` blocks.
///
/// The derive also implements `varpath::ToValue` and `From<Self> for
/// varpath::Value`, wrapping the struct as an object. Those require `Clone`.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Members)]
/// #[members(methods)]
/// struct User {
///     pub name: String,
///     password: String,
/// }
///
/// #[member_methods]
/// impl User {
///     pub fn get_display_name(&self) -> String { ... }
///     pub fn is_admin(&self) -> bool { ... }
/// }
/// ```
#[proc_macro_derive(Members, attributes(members))]
pub fn derive_members(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    let input = match input::MembersInput::from_derive(input) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error().into(),
    };

    codegen::members_impl(&input).into()
}

/// Registers the getters and asserters of an inherent `impl` block.
///
/// A method is registered when it is `pub`, takes `&self` and nothing else,
/// has no type parameters, returns a value, and is named `get_<member>`
/// (getter) or `is_<member>` (asserter). It is looked up under the
/// capitalized member name, so `get_title` answers the `title` segment.
/// All other methods are left alone.
///
/// Generates an implementation of `varpath::MemberMethods`.
#[proc_macro_attribute]
pub fn member_methods(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    let item = syn::parse_macro_input!(item as syn::ItemImpl);

    let input = match input::MethodsInput::from_impl(args, item) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error().into(),
    };

    if let Err(e) = validate::validate_methods(&input) {
        return e.to_compile_error().into();
    }

    codegen::methods_impl(&input).into()
}
