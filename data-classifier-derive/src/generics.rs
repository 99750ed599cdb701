//! Generic type parameter handling and trait bound management.
//!
//! Only generics that appear in walked (`#[classified]`) fields receive a
//! `Classified` bound. Fields classified by declaration or left unannotated
//! impose nothing on their types.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics:
//!
//! ```ignore
//! #[derive(Classified)]
//! struct TypedId<T> {
//!     #[classified]
//!     id: Tagged<String>,
//!     #[classified]
//!     _marker: PhantomData<T>,  // T must NOT require Classified
//! }
//! ```

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Array(array) => {
            collect_generics_from_type(&array.elem, generics, result);
        }
        syn::Type::Slice(slice) => {
            collect_generics_from_type(&slice.elem, generics, result);
        }
        syn::Type::Paren(paren) => {
            collect_generics_from_type(&paren.elem, generics, result);
        }
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

/// Adds `Classified` bounds to generic parameters used in walked fields.
pub(crate) fn add_classified_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    let classified_path = crate_path("Classified");
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#classified_path));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn collect(ty: proc_macro2::TokenStream, generics: proc_macro2::TokenStream) -> Vec<String> {
        let ty: syn::Type = syn::parse2(ty).expect("should parse as Type");
        let generics: syn::Generics = syn::parse2(generics).expect("should parse as Generics");
        let mut result = Vec::new();
        collect_generics_from_type(&ty, &generics, &mut result);
        result.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn nested_generic_is_collected() {
        assert_eq!(collect(quote! { Vec<Option<T>> }, quote! { <T, U> }), ["T"]);
    }

    #[test]
    fn phantom_data_is_skipped() {
        assert!(collect(quote! { PhantomData<T> }, quote! { <T> }).is_empty());
    }

    #[test]
    fn references_and_arrays_are_traversed() {
        assert_eq!(collect(quote! { &'a [U; 4] }, quote! { <'a, T, U> }), ["U"]);
    }

    #[test]
    fn each_generic_is_collected_once() {
        assert_eq!(
            collect(quote! { std::collections::HashMap<K, (K, V)> }, quote! { <K, V> }),
            ["K", "V"]
        );
    }
}
