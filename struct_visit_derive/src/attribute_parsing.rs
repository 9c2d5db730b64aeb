use syn::{Lit, Meta, NestedMeta};

use crate::datastructure::Field;

/// The configuration for a field, parsed from its `#[visit(...)]` attributes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FieldConfig {
    /// Whether the field is declared without being registered.
    pub(crate) skipped: bool,
    /// The name the member is registered under,
    /// overriding the literal field name.
    pub(crate) rename: Option<String>,
}

/// Parses the `#[visit(...)]` attributes of a field.
pub(crate) fn parse_field_attrs(field: &Field<'_>) -> Result<FieldConfig, syn::Error> {
    let mut config = FieldConfig::default();

    for attr in field.attrs {
        if !attr.path.is_ident("visit") {
            continue;
        }

        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            _ => return_spanned_err!(
                attr,
                "expected `#[visit(...)]`, with a parenthesized attribute list",
            ),
        };

        with_nested_meta("visit", list.nested, |meta| match meta {
            Meta::Path(ref path) if path.is_ident("skip") => {
                config.skipped = true;
                Ok(())
            }
            Meta::NameValue(ref nv) if nv.path.is_ident("rename") => match &nv.lit {
                Lit::Str(lit) => {
                    config.rename = Some(lit.value());
                    Ok(())
                }
                lit => Err(spanned_err!(
                    lit,
                    "expected a string literal: `#[visit(rename = \"...\")]`",
                )),
            },
            meta => Err(spanned_err!(
                meta,
                "unrecognized `#[visit(...)]` attribute, \
                 the valid attributes are `skip` and `rename = \"...\"`",
            )),
        })?;
    }

    if config.skipped && config.rename.is_some() {
        return_spanned_err!(
            field.ident,
            "cannot use both `#[visit(skip)]` and `#[visit(rename = \"...\")]` on the same field, \
             a skipped field is not registered under any name",
        );
    }

    Ok(config)
}

/// Iterates over an iterator of syn::NestedMeta,
/// unwrapping it into a syn::Meta and passing it into the `f` closure.
fn with_nested_meta<I, F>(attr_name: &str, iter: I, mut f: F) -> Result<(), syn::Error>
where
    F: FnMut(Meta) -> Result<(), syn::Error>,
    I: IntoIterator<Item = NestedMeta>,
{
    for elem in iter {
        match elem {
            NestedMeta::Meta(attr) => {
                f(attr)?;
            }
            NestedMeta::Lit(lit) => {
                return_spanned_err!(
                    lit,
                    "the #[{}(...)] attribute does not allow literals in the attribute list",
                    attr_name,
                );
            }
        }
    }
    Ok(())
}
