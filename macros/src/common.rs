//! Shared attribute parsing for the derive.

use syn::{Attribute, Meta, Path, Token, punctuated::Punctuated};

/// Name of the container attribute understood by the derive.
pub(crate) const ATTR_NAME: &str = "enumerated";

/// Find `#[enumerated(crate = some::path)]` among the item's attributes.
///
/// # Returns
/// - `Ok(Some(path))` if the attribute names a crate path.
/// - `Ok(None)` if the attribute is absent.
/// - `Err(...)` if the attribute is malformed or uses an unknown key.
pub(crate) fn get_crate_path(item_attrs: &[Attribute]) -> syn::Result<Option<Path>> {
    let mut crate_path = None;

    for attr in item_attrs.iter().filter(|a| a.path().is_ident(ATTR_NAME)) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("crate") {
                return Err(meta.error(format!(
                    "[enumerated] unknown attribute, expected `{}(crate = path)`",
                    ATTR_NAME
                )));
            }
            if crate_path.is_some() {
                return Err(meta.error("[enumerated] `crate` is specified more than once"));
            }
            crate_path = Some(meta.value()?.parse::<Path>()?);
            Ok(())
        })?;
    }

    Ok(crate_path)
}

/// Reject `#[repr(u128)]`, whose values may not fit the `i128` discriminant.
pub(crate) fn check_repr(item_attrs: &[Attribute]) -> syn::Result<()> {
    for attr in item_attrs.iter().filter(|a| a.path().is_ident("repr")) {
        let hints = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        if let Some(hint) = hints.iter().find(|hint| hint.path().is_ident("u128")) {
            return Err(syn::Error::new_spanned(
                hint,
                "[enumerated] `repr(u128)` is not supported, discriminants must fit in `i128`",
            ));
        }
    }
    Ok(())
}
