//! Derive macros for `data-classifier`.
//!
//! This crate generates the aggregation code behind `#[derive(Classified)]`. It:
//! - reads `#[classified(...)]` container, variant, and field attributes
//! - emits a `Classified` implementation that unions the declared flags with
//!   the classifications of walked fields
//!
//! It does **not** define the flags themselves. Those live in the main
//! `data-classifier` crate as constants of `Classification`.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_classified_bounds;
use transform::{flag_expr, union_terms};

/// Derives `data_classifier::Classified` for structs and enums.
///
/// # Container Attributes
///
/// These attributes are placed on the struct/enum itself:
///
/// - `#[classified(FLAG, ...)]` - Every value of the type carries these flags, whatever its
///   fields hold. Stacked attributes accumulate.
///
/// # Variant Attributes
///
/// - `#[classified(FLAG, ...)]` - A value carries these flags while it is this variant.
///
/// # Field Attributes
///
/// - **No annotation**: The field contributes nothing. Use this for fields that hold no
///   classified data, including external types like `chrono::DateTime`.
///
/// - `#[classified]`: The field's own `Classified::classification()` is combined in. Works for
///   nested types that derive `Classified`, for `Classification` itself, and for std containers
///   of those (`Option`, `Vec`, `Box`, maps, sets). Rejected on scalar primitives.
///
/// - `#[classified(FLAG, ...)]`: The field carries these flags by declaration, whatever its
///   runtime value.
///
/// A `FLAG` that is a single identifier names a constant of `Classification`
/// (`PII`, `HIGH_CARDINALITY`, ...). A longer path (`my_flags::CUSTOM`) is used verbatim and
/// must evaluate to a `Classification`.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Classified, attributes(classified))]
pub fn derive_classified(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the data-classifier crate root.
///
/// Handles crate renaming (e.g., `labels = { package = "data-classifier", ... }`)
/// and internal usage (when derive is used inside the data-classifier crate itself).
fn crate_root() -> TokenStream {
    match crate_name("data-classifier") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::data_classifier },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { flags } = parse_container_options(&attrs)?;
    let uninhabited = matches!(&data, Data::Enum(data) if data.variants.is_empty());

    let (classification_body, used_generics) = match data {
        Data::Struct(data) => {
            let output = derive_struct(&ident, data, &generics)?;
            (output.classification_body, output.used_generics)
        }
        Data::Enum(data) => {
            let output = derive_enum(&ident, data, &generics)?;
            (output.classification_body, output.used_generics)
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Classified` cannot be derived for unions",
            ));
        }
    };

    let classified_generics = add_classified_bounds(generics, &used_generics);
    let (impl_generics, ty_generics, where_clause) = classified_generics.split_for_impl();
    let classified_path = crate_path("Classified");
    let classification_path = crate_path("Classification");
    // No value of an uninhabited enum exists, so its flags are never observed.
    let body = if uninhabited {
        classification_body
    } else {
        let container_terms: Vec<TokenStream> = flags.iter().map(flag_expr).collect();
        let container_flags = union_terms(&container_terms);
        quote! { #container_flags.union(#classification_body) }
    };

    Ok(quote! {
        impl #impl_generics #classified_path for #ident #ty_generics #where_clause {
            fn classification(&self) -> #classification_path {
                #body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand_tokens(tokens: TokenStream) -> Result<String> {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        expand(input).map(|output| output.to_string().replace(' ', ""))
    }

    #[test]
    fn unions_are_rejected() {
        let result = expand_tokens(quote! {
            union Bits {
                raw: u64,
                float: f64,
            }
        });
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be derived for unions"));
    }

    #[test]
    fn walked_scalar_is_rejected() {
        let result = expand_tokens(quote! {
            struct Counter {
                #[classified]
                count: u64,
            }
        });
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("scalar fields cannot be walked"));
    }

    #[test]
    fn struct_impl_binds_only_walked_fields() {
        let output = expand_tokens(quote! {
            #[classified(PERSIST)]
            struct Event {
                #[classified(PII)]
                user: String,
                #[classified]
                body: Message,
                id: u64,
            }
        })
        .unwrap();
        assert!(output.contains("ClassifiedforEvent"));
        assert!(output.contains("Event{body,..}"));
        assert!(output.contains("Classification::PERSIST"));
        assert!(output.contains("Classification::PII"));
        assert!(!output.contains("id,"));
    }

    #[test]
    fn tuple_struct_ignores_unwalked_positions() {
        let output = expand_tokens(quote! {
            struct Pair(#[classified(UGC)] String, #[classified] Inner);
        })
        .unwrap();
        assert!(output.contains("Pair(_,field_1)"));
    }

    #[test]
    fn walked_generics_receive_bounds() {
        let output = expand_tokens(quote! {
            struct Wrapper<T, M> {
                #[classified]
                inner: Vec<T>,
                #[classified]
                marker: PhantomData<M>,
            }
        })
        .unwrap();
        assert!(output.contains("T:"));
        assert!(output.contains("Classified,M>"));
    }

    #[test]
    fn enum_arms_cover_every_variant() {
        let output = expand_tokens(quote! {
            enum Payload {
                #[classified(SENSITIVE)]
                Secret(String),
                Text { #[classified] body: Message },
                Empty,
            }
        })
        .unwrap();
        assert!(output.contains("Payload::Secret(_)"));
        assert!(output.contains("Payload::Text{body,..}"));
        assert!(output.contains("Payload::Empty=>"));
    }

    #[test]
    fn empty_enum_matches_on_deref() {
        let output = expand_tokens(quote! {
            enum Never {}
        })
        .unwrap();
        assert!(output.contains("{match*self{}}"));
        assert!(!output.contains(".union(match"));
    }

    #[test]
    fn empty_enum_with_flags_still_matches_on_deref() {
        let output = expand_tokens(quote! {
            #[classified(PII)]
            enum Never {}
        })
        .unwrap();
        assert!(output.contains("{match*self{}}"));
        assert!(!output.contains("union"));
    }
}
