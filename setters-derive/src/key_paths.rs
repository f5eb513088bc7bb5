//! Implementation of the `#[derive(KeyPaths)]` macro.
//!
//! For every named field `foo: T` the derive emits
//! `fn foo_path() -> impl KeyPath<Self, T> + Clone` with the field's own
//! visibility.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Entry point called from the `proc_macro_derive` function.
pub fn derive_key_paths_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

/// Expands a parsed item into the generated `impl` block or a compile error.
pub fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_key_paths(&input.ident, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "KeyPaths can only be derived for structs with named fields, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "KeyPaths cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

fn generate_struct_key_paths(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let methods: Vec<TokenStream2> =
                named_fields.named.iter().filter_map(key_path_method).collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "KeyPaths can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "KeyPaths cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

fn key_path_method(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let visibility = &field.vis;
    // r#type -> type_path
    let method_name = format_ident!("{}_path", field_name.unraw());
    let doc = format!(" Returns the key path to the `{}` field.", field_name.unraw());

    Some(quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        #[allow(dead_code)]
        #visibility fn #method_name() -> impl ::setters::setter::KeyPath<Self, #field_type> + Clone {
            ::setters::setter::FunctionKeyPath::new(
                |root: &Self| &root.#field_name,
                |mut root: Self, value: #field_type| {
                    root.#field_name = value;
                    root
                },
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    fn generates_one_method_per_field() {
        let input: DeriveInput = parse_quote! {
            struct User {
                pub name: String,
                location: String,
                age: u32,
            }
        };

        let generated = expand(&input).to_string();

        assert!(generated.contains("fn name_path"));
        assert!(generated.contains("fn location_path"));
        assert!(generated.contains("fn age_path"));
        assert!(generated.contains("pub fn name_path"));
        assert!(!generated.contains("pub fn age_path"));
    }

    #[rstest]
    fn strips_raw_identifier_prefix() {
        let input: DeriveInput = parse_quote! {
            struct Token {
                r#type: String,
            }
        };

        let generated = expand(&input).to_string();

        assert!(generated.contains("fn type_path"));
        assert!(generated.contains("root . r#type"));
    }

    #[rstest]
    #[case::tuple_struct(parse_quote! { struct Pair(i32, i32); }, "tuple structs")]
    #[case::unit_struct(parse_quote! { struct Empty; }, "unit structs")]
    #[case::enumeration(parse_quote! { enum Shape { Circle(f64) } }, "not enums")]
    fn rejects_unsupported_items(#[case] input: DeriveInput, #[case] message: &str) {
        let generated = expand(&input).to_string();

        assert!(generated.contains("compile_error"));
        assert!(generated.contains(message));
    }
}
