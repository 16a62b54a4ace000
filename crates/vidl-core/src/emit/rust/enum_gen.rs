// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command enum generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, PartialEq)]
//! pub enum VidlCommand {
//!     CmdA(VidlCmdA),
//!     CmdB(VidlCmdB),
//! }
//!
//! impl VidlCommand {
//!     pub const MAGICS: &'static [u32] = &[VidlCmdA::MAGIC, VidlCmdB::MAGIC];
//!     pub const NAMES: &'static [&'static str] = &["CmdA", "CmdB"];
//!
//!     pub fn magic(&self) -> u32 { ... }
//!     pub fn name(&self) -> &'static str { ... }
//!     pub fn name_for_magic(magic: u32) -> Option<&'static str> { ... }
//! }
//!
//! impl From<VidlCmdA> for VidlCommand { ... }
//! ```
//!
//! Matches dereference `self` so an empty batch still yields a valid,
//! uninhabited enum.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, RustCommand};

/// Generate the command enum and its implementations.
pub fn generate(ctx: &Context, commands: &[RustCommand<'_>]) -> TokenStream {
    let enum_name = &ctx.command_enum;
    let variants: Vec<_> = commands.iter().map(|c| &c.variant).collect();
    let structs: Vec<_> = commands.iter().map(|c| &c.ident).collect();
    let variant_docs: Vec<String> = commands
        .iter()
        .map(|c| format!("`{}`", c.def.signature()))
        .collect();

    let doc = "Every generated command, tagged by its magic.";

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        pub enum #enum_name {
            #(
                #[doc = #variant_docs]
                #variants(#structs),
            )*
        }

        impl #enum_name {
            /// Magic of every command, in declaration order.
            pub const MAGICS: &'static [u32] = &[#(#structs::MAGIC),*];
            /// Name of every command, in declaration order.
            pub const NAMES: &'static [&'static str] = &[#(#structs::NAME),*];

            /// Wire tag of this command.
            #[must_use]
            pub fn magic(&self) -> u32 {
                match *self {
                    #(Self::#variants(_) => #structs::MAGIC,)*
                }
            }

            /// Declaration name of this command.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match *self {
                    #(Self::#variants(_) => #structs::NAME,)*
                }
            }

            /// Declaration name for a wire tag, if any command carries it.
            #[must_use]
            pub fn name_for_magic(magic: u32) -> ::core::option::Option<&'static str> {
                Self::MAGICS
                    .iter()
                    .zip(Self::NAMES)
                    .find_map(|(&m, &name)| (m == magic).then_some(name))
            }
        }

        #(
            impl ::core::convert::From<#structs> for #enum_name {
                fn from(cmd: #structs) -> Self {
                    Self::#variants(cmd)
                }
            }
        )*
    }
}
