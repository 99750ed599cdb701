//! Parsing of `#[classified(...)]` field attributes.
//!
//! This module maps attribute syntax to aggregation decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{
    punctuated::Punctuated, spanned::Spanned, Attribute, Meta, MetaList, Path, Result, Token,
};

/// Field contribution strategy based on `#[classified(...)]` attributes.
///
/// ## Strategy Mapping
///
/// | Attribute | Strategy | Contribution |
/// |-----------|----------|--------------|
/// | None | `PassThrough` | nothing |
/// | `#[classified]` | `Walk` | the field's own `Classified::classification()` |
/// | `#[classified(PII, ...)]` | `Flags(..)` | the listed flags, by declaration |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: the field carries no classification.
    ///
    /// External types like `DateTime<Utc>` work without implementing
    /// `Classified`.
    PassThrough,
    /// Bare `#[classified]`: ask the field for its classification.
    Walk,
    /// `#[classified(FLAG, ...)]`: the field always carries these flags,
    /// whatever its runtime value.
    Flags(Vec<Path>),
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[classified] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

/// Parses the flag list of `#[classified(A, B, ...)]`.
///
/// Shared by field, variant, and container attributes.
pub(crate) fn parse_flag_list(list: &MetaList) -> Result<Vec<Path>> {
    let flags = list
        .parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
        .map_err(|_| {
            syn::Error::new(
                list.span(),
                "expected classification flags (e.g., #[classified(PII, HIGH_CARDINALITY)])",
            )
        })?;
    if flags.is_empty() {
        return Err(syn::Error::new(
            list.span(),
            "expected at least one classification flag in #[classified(...)]",
        ));
    }
    Ok(flags.into_iter().collect())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("classified") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_strategy(&mut strategy, Strategy::Walk, attr.span())?;
            }
            Meta::List(list) => {
                let flags = parse_flag_list(list)?;
                set_strategy(&mut strategy, Strategy::Flags(flags), attr.span())?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[classified]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::PassThrough))
}
