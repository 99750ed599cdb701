//! Shared field contribution logic for struct and enum derivation.
//!
//! A field contributes an expression of type `Classification` that the
//! generated `classification()` body folds into its result with
//! `Classification::union`.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, Path, Result};

use crate::{
    crate_path, generics::collect_generics_from_type, strategy::Strategy, types::is_scalar_type,
};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// What a single field adds to the generated body.
pub(crate) struct FieldContribution {
    /// Whether the pattern must bind the field.
    pub(crate) binds: bool,
    /// `Classification`-typed expressions to union into the result.
    pub(crate) terms: Vec<TokenStream>,
}

/// Resolves a flag path to a `Classification` expression.
///
/// A bare identifier names an associated constant of `Classification`
/// (`PII` becomes `Classification::PII`); any longer path is used verbatim.
pub(crate) fn flag_expr(flag: &Path) -> TokenStream {
    let span = flag.span();
    if flag.leading_colon.is_none() && flag.segments.len() == 1 {
        if let Some(ident) = flag.get_ident() {
            let classification = crate_path("Classification");
            return quote_spanned! { span => #classification::#ident };
        }
    }
    quote_spanned! { span => #flag }
}

/// Folds terms into a single `Classification` expression.
pub(crate) fn union_terms(terms: &[TokenStream]) -> TokenStream {
    let classification = crate_path("Classification");
    quote! {
        #classification::NO_VALUE #(.union(#terms))*
    }
}

/// Generates the contribution of a single field.
///
/// ## Field Contribution Rules
///
/// | Annotation | Contribution |
/// |------------|--------------|
/// | None | nothing; the field is not bound |
/// | `#[classified]` | `<Ty as Classified>::classification(field)` |
/// | `#[classified(FLAGS)]` | the flags; the field is not bound |
pub(crate) fn generate_field_contribution(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    strategy: &Strategy,
) -> Result<FieldContribution> {
    match strategy {
        Strategy::PassThrough => Ok(FieldContribution {
            binds: false,
            terms: Vec::new(),
        }),
        Strategy::Walk => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new_spanned(
                    ty,
                    "scalar fields cannot be walked: use #[classified(FLAG)] to classify \
                     the field by declaration",
                ));
            }
            collect_generics_from_type(ty, ctx.generics, ctx.used_generics);
            let classified_path = crate_path("Classified");
            let span = ty.span();
            Ok(FieldContribution {
                binds: true,
                terms: vec![quote_spanned! { span =>
                    <#ty as #classified_path>::classification(#binding)
                }],
            })
        }
        Strategy::Flags(flags) => Ok(FieldContribution {
            binds: false,
            terms: flags.iter().map(flag_expr).collect(),
        }),
    }
}
