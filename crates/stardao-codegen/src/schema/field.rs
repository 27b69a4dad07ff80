use super::{Association, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier in the struct
    pub(crate) ident: syn::Ident,

    /// Property name the mapping refers to
    pub(crate) property: String,

    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// Converted to and from a `Value` directly
    Primitive(syn::Type),

    /// Another entity, stored as its key
    Association(Association),
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut property = None;
        let mut ty = None;

        for attr in &field.attrs {
            if attr.path().is_ident("association") {
                if ty.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[association] attribute",
                    ));
                } else {
                    match Association::from_ast(attr, &field.ty) {
                        Ok(association) => ty = Some(FieldTy::Association(association)),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("property") {
                if property.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[property] attribute"));
                } else {
                    match parse_property_name(attr) {
                        Ok(name) => property = Some(name),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            property: property.unwrap_or_else(|| ident.unraw().to_string()),
            ty: ty.unwrap_or_else(|| FieldTy::Primitive(field.ty.clone())),
        })
    }
}

/// `#[property(name = "...")]`
fn parse_property_name(attr: &syn::Attribute) -> syn::Result<String> {
    let mut name = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            let value: syn::LitStr = meta.value()?.parse()?;
            name = Some(value.value());
            Ok(())
        } else {
            Err(meta.error("expected `name`"))
        }
    })?;

    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(syn::Error::new_spanned(
            attr,
            "expected #[property(name = \"...\")]",
        )),
    }
}
