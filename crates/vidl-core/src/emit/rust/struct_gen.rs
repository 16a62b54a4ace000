// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command payload struct generation.
//!
//! # Generated Code
//!
//! For `void CmdA(int x, const std::string& name);`:
//!
//! ```rust,ignore
//! /// `void CmdA(int x, const std::string& name)`
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct VidlCmdA {
//!     pub x: i32,
//!     pub name: String,
//! }
//!
//! impl VidlCmdA {
//!     pub const MAGIC: u32 = 0x...;
//!     pub const NAME: &'static str = "CmdA";
//!
//!     pub fn new(x: i32, name: String) -> Self { ... }
//! }
//! ```
//!
//! Commands without parameters also derive `Default`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::LitInt;

use super::RustCommand;
use crate::magic::hex_literal;

/// Generate all command payload structs.
pub fn generate(commands: &[RustCommand<'_>]) -> TokenStream {
    let structs: Vec<TokenStream> = commands.iter().map(generate_struct).collect();
    quote! { #(#structs)* }
}

/// The magic as a hex literal token.
fn magic_lit(magic: u32) -> LitInt {
    LitInt::new(&hex_literal(magic), Span::call_site())
}

fn generate_struct(cmd: &RustCommand<'_>) -> TokenStream {
    let ident = &cmd.ident;
    let name = &cmd.def.name;
    let magic = magic_lit(cmd.magic);
    let doc = format!("`{}`", cmd.def.signature());

    let field_idents: Vec<_> = cmd.fields.iter().map(|f| &f.ident).collect();
    let field_types: Vec<_> = cmd.fields.iter().map(|f| &f.ty).collect();
    let field_docs: Vec<String> = cmd
        .def
        .params
        .iter()
        .map(|p| format!("`{} {}`", p.ty, p.orig_name))
        .collect();

    let derives = if cmd.fields.is_empty() {
        quote! { #[derive(Debug, Clone, Default, PartialEq)] }
    } else {
        quote! { #[derive(Debug, Clone, PartialEq)] }
    };

    quote! {
        #[doc = #doc]
        #derives
        pub struct #ident {
            #(
                #[doc = #field_docs]
                pub #field_idents: #field_types,
            )*
        }

        impl #ident {
            /// Wire tag identifying this command.
            pub const MAGIC: u32 = #magic;
            /// Name of the declaration this command was generated from.
            pub const NAME: &'static str = #name;

            /// Build the command from its arguments.
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#field_idents: #field_types),*) -> Self {
                Self { #(#field_idents),* }
            }
        }
    }
}
