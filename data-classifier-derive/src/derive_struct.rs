//! Struct-specific `Classified` derivation.
//!
//! This module generates the aggregation body for struct fields and collects
//! generic parameters that require trait bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_contribution, union_terms, DeriveContext},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) classification_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };

    let classification_body = match data.fields {
        Fields::Named(fields) => derive_named_struct(name, fields, &mut ctx)?,
        Fields::Unnamed(fields) => derive_unnamed_struct(name, fields, &mut ctx)?,
        Fields::Unit => union_terms(&[]),
    };

    Ok(StructDeriveOutput {
        classification_body,
        used_generics,
    })
}

fn derive_named_struct(
    name: &Ident,
    fields: syn::FieldsNamed,
    ctx: &mut DeriveContext<'_>,
) -> Result<TokenStream> {
    let mut bindings = Vec::new();
    let mut terms = Vec::new();

    for field in fields.named {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let Some(ident) = field.ident else {
            return Err(syn::Error::new(span, "named field should have an identifier"));
        };
        let contribution = generate_field_contribution(ctx, &field.ty, &ident, &strategy)?;
        if contribution.binds {
            bindings.push(ident);
        }
        terms.extend(contribution.terms);
    }

    let union = union_terms(&terms);
    Ok(quote! {
        match self {
            #name { #(#bindings,)* .. } => #union,
        }
    })
}

fn derive_unnamed_struct(
    name: &Ident,
    fields: syn::FieldsUnnamed,
    ctx: &mut DeriveContext<'_>,
) -> Result<TokenStream> {
    let mut patterns = Vec::new();
    let mut terms = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let binding = format_ident!("field_{index}");
        let strategy = parse_field_strategy(&field.attrs)?;
        let contribution = generate_field_contribution(ctx, &field.ty, &binding, &strategy)?;
        patterns.push(if contribution.binds {
            quote! { #binding }
        } else {
            quote! { _ }
        });
        terms.extend(contribution.terms);
    }

    let union = union_terms(&terms);
    Ok(quote! {
        match self {
            #name ( #(#patterns),* ) => #union,
        }
    })
}
