//! Enum-specific `Classified` derivation.
//!
//! This module generates one match arm per variant. Each arm unions the
//! variant's own flags with the contributions of its fields.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    container::parse_container_options,
    strategy::parse_field_strategy,
    transform::{flag_expr, generate_field_contribution, union_terms, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) classification_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
) -> Result<EnumDeriveOutput> {
    let mut arms = Vec::new();
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };

    for variant in data.variants {
        let variant_ident = &variant.ident;
        let options = parse_container_options(&variant.attrs)?;
        let mut terms: Vec<TokenStream> = options.flags.iter().map(flag_expr).collect();

        let pattern = match variant.fields {
            Fields::Unit => quote! {},
            Fields::Named(fields) => {
                let mut bindings = Vec::new();
                for field in fields.named {
                    let span = field.span();
                    let strategy = parse_field_strategy(&field.attrs)?;
                    let Some(ident) = field.ident else {
                        return Err(syn::Error::new(span, "named field should have an identifier"));
                    };
                    let contribution =
                        generate_field_contribution(&mut ctx, &field.ty, &ident, &strategy)?;
                    if contribution.binds {
                        bindings.push(ident);
                    }
                    terms.extend(contribution.terms);
                }
                quote! { { #(#bindings,)* .. } }
            }
            Fields::Unnamed(fields) => {
                let mut patterns = Vec::new();
                for (index, field) in fields.unnamed.into_iter().enumerate() {
                    let binding = format_ident!("field_{index}");
                    let strategy = parse_field_strategy(&field.attrs)?;
                    let contribution =
                        generate_field_contribution(&mut ctx, &field.ty, &binding, &strategy)?;
                    patterns.push(if contribution.binds {
                        quote! { #binding }
                    } else {
                        quote! { _ }
                    });
                    terms.extend(contribution.terms);
                }
                quote! { ( #(#patterns),* ) }
            }
        };

        let union = union_terms(&terms);
        arms.push(quote! {
            #name::#variant_ident #pattern => #union
        });
    }

    // An empty enum has no values to classify.
    let classification_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms),*
            }
        }
    };

    Ok(EnumDeriveOutput {
        classification_body,
        used_generics,
    })
}
