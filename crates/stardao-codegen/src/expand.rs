use crate::schema::{Entity, Field, FieldTy};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    entity: &'a Entity,

    /// Path prefix for stardao types
    stardao: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let stardao = &self.stardao;
        let ident = &self.entity.ident;
        let name = &self.entity.name;
        let (impl_generics, ty_generics, where_clause) = self.entity.generics.split_for_impl();

        let properties = self.entity.fields.iter().map(|field| &field.property);
        let get_arms = self.entity.fields.iter().map(|field| self.expand_get_arm(field));
        let set_arms = self.entity.fields.iter().map(|field| self.expand_set_arm(field));

        wrap_in_const(quote! {
            impl #impl_generics #stardao::Entity for #ident #ty_generics #where_clause {
                fn properties() -> &'static [&'static str] {
                    &[ #( #properties ),* ]
                }

                fn get(&self, property: &str) -> #stardao::Result<#stardao::Value> {
                    match property {
                        #( #get_arms )*
                        _ => #stardao::Err(#stardao::unknown_property(#name, property)),
                    }
                }

                #[allow(unused_variables)]
                fn set(&mut self, property: &str, value: #stardao::Value) -> #stardao::Result<()> {
                    match property {
                        #( #set_arms )*
                        _ => return #stardao::Err(#stardao::unknown_property(#name, property)),
                    }

                    #stardao::Ok(())
                }
            }
        })
    }

    fn expand_get_arm(&self, field: &Field) -> TokenStream {
        let stardao = &self.stardao;
        let ident = &field.ident;
        let property = &field.property;

        match &field.ty {
            FieldTy::Primitive(_) => quote! {
                #property => #stardao::Ok(#stardao::Value::from(
                    #stardao::Clone::clone(&self.#ident)
                )),
            },
            FieldTy::Association(association) => {
                let key = &association.key;
                let referenced = if association.boxed {
                    quote!(#stardao::Option::as_deref(&self.#ident))
                } else {
                    quote!(#stardao::Option::as_ref(&self.#ident))
                };

                quote! {
                    #property => #stardao::association_key(#referenced, #key),
                }
            }
        }
    }

    fn expand_set_arm(&self, field: &Field) -> TokenStream {
        let stardao = &self.stardao;
        let ident = &field.ident;
        let property = &field.property;

        match &field.ty {
            FieldTy::Primitive(ty) => quote! {
                #property => self.#ident = <#ty as #stardao::Primitive>::load(value)?,
            },
            FieldTy::Association(association) if association.boxed => {
                let target = &association.target;

                quote! {
                    #property => self.#ident = #stardao::Option::map(
                        #stardao::load_association::<#target>(value)?,
                        #stardao::Box::new,
                    ),
                }
            }
            FieldTy::Association(association) => {
                let target = &association.target;

                quote! {
                    #property => self.#ident = #stardao::load_association::<#target>(value)?,
                }
            }
        }
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    Expand {
        entity,
        stardao: quote!(_stardao::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use stardao as _stardao;
            #code
        };
    }
}
