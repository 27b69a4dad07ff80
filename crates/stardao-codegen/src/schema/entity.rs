use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// The struct being derived
    pub(crate) ident: syn::Ident,

    pub(crate) generics: syn::Generics,

    /// Name used in error messages at runtime
    pub(crate) name: String,

    /// One per struct field, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields: Vec<Field> = vec![];

        for node in &node.named {
            let field = match Field::from_ast(node) {
                Ok(field) => field,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if fields.iter().any(|other| other.property == field.property) {
                errs.push(syn::Error::new_spanned(
                    node,
                    format!("duplicate property `{}`", field.property),
                ));
                continue;
            }

            fields.push(field);
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            name: ast.ident.to_string(),
            fields,
        })
    }
}
