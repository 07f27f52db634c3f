//! # Opacode Derive Macros
//!
//! This crate provides the procedural macros for `opacode`. It automates the
//! implementation of the [`Compact`] and [`Trivial`] serialization traits for
//! user-defined structs by visiting every field in declaration order.
//!
//! ## Architecture
//! Both derives expand to plain field-by-field trait calls:
//! 1. **`Compact`:** byte size, forward write, and in-place read are each the
//!    concatenation of the per-field operations.
//! 2. **`Trivial`:** additionally emits the `SIZE` associated constant as the
//!    sum of the field constants, so the encoded width stays a compile-time
//!    value.
//!
//! Field order is the struct's declaration order on both the write and the
//! read path, which is what keeps the two sides of the wire format in sync.
//!
//! Compatible with `syn 2.0`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index, Member};

/// Derives `opacode::Compact` for a struct.
///
/// Every field must implement `Compact`. Fields are encoded and decoded in
/// declaration order.
#[proc_macro_derive(Compact)]
pub fn derive_compact(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let fields = match struct_fields(&name, &input.data) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let count_terms = fields.iter().map(|f| {
        let member = &f.member;
        quote! { total += opacode::Compact::count(&self.#member); }
    });
    let put_stmts = fields.iter().map(|f| {
        let member = &f.member;
        quote! { opacode::Compact::put(&self.#member, out); }
    });
    let get_stmts = fields.iter().map(|f| {
        let member = &f.member;
        quote! { opacode::Compact::get(&mut self.#member, inp)?; }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics opacode::Compact for #name #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn count(&self) -> usize {
                let mut total = 0usize;
                #(#count_terms)*
                total
            }

            #[allow(unused_variables)]
            fn put(&self, out: &mut ::std::vec::Vec<u8>) {
                #(#put_stmts)*
            }

            #[allow(unused_variables)]
            fn get(&mut self, inp: &mut &[u8]) -> opacode::Result<()> {
                #(#get_stmts)*
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derives `opacode::Trivial` for a struct.
///
/// Every field must implement `Trivial`; the generated `SIZE` constant is the
/// sum of the field sizes, preserving the fixed-width layout.
#[proc_macro_derive(Trivial)]
pub fn derive_trivial(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let fields = match struct_fields(&name, &input.data) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let size_terms = fields.iter().map(|f| {
        let ty = &f.ty;
        quote! { + <#ty as opacode::Trivial>::SIZE }
    });
    let put_stmts = fields.iter().map(|f| {
        let member = &f.member;
        quote! { opacode::Trivial::put(&self.#member, out); }
    });
    let get_stmts = fields.iter().map(|f| {
        let member = &f.member;
        quote! { opacode::Trivial::get(&mut self.#member, inp)?; }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics opacode::Trivial for #name #ty_generics #where_clause {
            const SIZE: usize = 0usize #(#size_terms)*;

            #[allow(unused_variables)]
            fn put(&self, out: &mut ::std::vec::Vec<u8>) {
                #(#put_stmts)*
            }

            #[allow(unused_variables)]
            fn get(&mut self, inp: &mut &[u8]) -> opacode::Result<()> {
                #(#get_stmts)*
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}

// --- Internal Data Structures ---

struct FieldSpec {
    member: Member,
    ty: syn::Type,
}

/// Collects the struct fields in declaration order.
/// Named, tuple, and unit structs are supported; enums and unions are not.
fn struct_fields(name: &syn::Ident, data: &Data) -> syn::Result<Vec<FieldSpec>> {
    let data_struct = match data {
        Data::Struct(ds) => ds,
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "Compact/Trivial derives only support structs",
            ))
        }
    };

    let mut fields = Vec::new();
    match &data_struct.fields {
        Fields::Named(named) => {
            for field in &named.named {
                let ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| syn::Error::new(name.span(), "expected a named field"))?;
                fields.push(FieldSpec {
                    member: Member::Named(ident),
                    ty: field.ty.clone(),
                });
            }
        }
        Fields::Unnamed(unnamed) => {
            for (idx, field) in unnamed.unnamed.iter().enumerate() {
                fields.push(FieldSpec {
                    member: Member::Unnamed(Index::from(idx)),
                    ty: field.ty.clone(),
                });
            }
        }
        Fields::Unit => {}
    }

    Ok(fields)
}
