extern crate proc_macro;

use proc_macro::TokenStream;

/// Implement `stardao::Entity` for a struct with named fields.
///
/// Every field becomes a property named after it. `#[property(name = "...")]`
/// renames one, and `#[association]` marks an `Option<T>` (or
/// `Option<Box<T>>`) field holding a referenced entity. An association is
/// written as the referenced entity's `id` property, or the property named by
/// `#[association(key = ...)]`.
#[proc_macro_derive(Entity, attributes(association, property))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match stardao_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
