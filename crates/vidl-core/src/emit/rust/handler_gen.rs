// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Handler trait generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! pub trait VidlHandler {
//!     fn handle_cmd_a(&mut self, cmd: &VidlCmdA) { let _ = cmd; }
//!     fn handle_cmd_b(&mut self, cmd: &VidlCmdB) { let _ = cmd; }
//!
//!     fn handle(&mut self, cmd: &VidlCommand) {
//!         match *cmd {
//!             VidlCommand::CmdA(ref inner) => self.handle_cmd_a(inner),
//!             VidlCommand::CmdB(ref inner) => self.handle_cmd_b(inner),
//!         }
//!     }
//! }
//! ```
//!
//! Implementors override only the commands they care about.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, RustCommand};

/// Generate the handler trait.
pub fn generate(ctx: &Context, commands: &[RustCommand<'_>]) -> TokenStream {
    let trait_name = &ctx.handler_trait;
    let enum_name = &ctx.command_enum;

    let methods: Vec<TokenStream> = commands
        .iter()
        .map(|cmd| {
            let handler = &cmd.handler;
            let ident = &cmd.ident;
            let doc = format!("Handle `{}`. Does nothing by default.", cmd.def.name);
            quote! {
                #[doc = #doc]
                fn #handler(&mut self, cmd: &#ident) {
                    let _ = cmd;
                }
            }
        })
        .collect();

    let variants: Vec<_> = commands.iter().map(|c| &c.variant).collect();
    let handlers: Vec<_> = commands.iter().map(|c| &c.handler).collect();

    let doc = format!("Receives [`{enum_name}`] values, one method per command.");

    quote! {
        #[doc = #doc]
        pub trait #trait_name {
            #(#methods)*

            /// Route `cmd` to its handler method.
            fn handle(&mut self, cmd: &#enum_name) {
                match *cmd {
                    #(#enum_name::#variants(ref inner) => self.#handlers(inner),)*
                }
            }
        }
    }
}
