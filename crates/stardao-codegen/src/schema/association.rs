#[derive(Debug)]
pub(crate) struct Association {
    /// The referenced entity type
    pub(crate) target: syn::Type,

    /// True when the field holds `Option<Box<T>>`
    pub(crate) boxed: bool,

    /// Property of the referenced entity stored in the association column
    pub(crate) key: String,
}

impl Association {
    pub(super) fn from_ast(attr: &syn::Attribute, ty: &syn::Type) -> syn::Result<Self> {
        let mut key = None;

        if let syn::Meta::List(_) = &attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    let value: syn::Ident = meta.value()?.parse()?;
                    key = Some(value.to_string());
                    Ok(())
                } else {
                    Err(meta.error("expected `key`"))
                }
            })?;
        } else if !matches!(attr.meta, syn::Meta::Path(_)) {
            return Err(syn::Error::new_spanned(
                attr,
                "expected #[association] or #[association(key = <field>)]",
            ));
        }

        let Some(inner) = generic_argument(ty, "Option") else {
            return Err(syn::Error::new_spanned(
                ty,
                "association fields must be `Option<T>` or `Option<Box<T>>`",
            ));
        };

        let (target, boxed) = match generic_argument(inner, "Box") {
            Some(target) => (target.clone(), true),
            None => (inner.clone(), false),
        };

        Ok(Self {
            target,
            boxed,
            key: key.unwrap_or_else(|| "id".to_string()),
        })
    }
}

/// `T` when `ty` is `<wrapper><T>`, matched on the last path segment.
fn generic_argument<'a>(ty: &'a syn::Type, wrapper: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first()? {
        syn::GenericArgument::Type(ty) if args.args.len() == 1 => Some(ty),
        _ => None,
    }
}
