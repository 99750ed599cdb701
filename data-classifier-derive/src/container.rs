//! Container-level attribute parsing for `#[derive(Classified)]`.
//!
//! This module handles attributes on the struct/enum itself and on enum
//! variants, not on fields.

use syn::{Attribute, Meta, Path, Result};

use crate::strategy::parse_flag_list;

/// Options parsed from container-level (or variant-level)
/// `#[classified(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Flags carried by every value of the container (or variant).
    pub(crate) flags: Vec<Path>,
}

/// Parses container-level `#[classified(...)]` attributes.
///
/// Several attributes may be stacked; their flags accumulate.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("classified") {
            continue;
        }

        match &attr.meta {
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "bare #[classified] is only meaningful on fields; \
                     list the flags this type carries, e.g. #[classified(PERSIST)]",
                ));
            }
            Meta::List(list) => {
                options.flags.extend(parse_flag_list(list)?);
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[classified]",
                ));
            }
        }
    }

    Ok(options)
}
