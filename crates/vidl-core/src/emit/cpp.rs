// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! C++ header generation.
//!
//! # Generated Code
//!
//! For `void vhBeginMarker(const std::string& name);`:
//!
//! ```cpp
//! // void vhBeginMarker(const std::string& name)
//! struct VIDL_vhBeginMarker
//! {
//!     static constexpr uint32_t kMagic = 0x1F2E3D4C;
//!
//!     uint32_t MAGIC = kMagic;
//!     const std::string name;
//!
//!     VIDL_vhBeginMarker() = default;
//!     explicit VIDL_vhBeginMarker(const std::string& _name) : name(_name) {}
//! };
//! ```
//!
//! Members are always value types: a reference parameter is stored as a
//! copy, while the constructor keeps the reference so the call site does
//! not copy twice. `MAGIC` is the first member of every struct and mirrors
//! the shared header struct, which is how `HandleCmd` reads the tag through
//! an opaque pointer.
//!
//! The handler class closes the header:
//!
//! ```cpp
//! class VIDLHandler
//! {
//! public:
//!     virtual ~VIDLHandler() = default;
//!
//!     virtual void Handle_vhBeginMarker(VIDL_vhBeginMarker* cmd) { (void)cmd; }
//!
//!     bool HandleCmd(void* cmd)
//!     {
//!         ...
//!         switch (static_cast<const VIDLCmdHeader*>(cmd)->MAGIC)
//!         {
//!             case 0x1F2E3D4C:
//!                 Handle_vhBeginMarker( (VIDL_vhBeginMarker*) cmd );
//!                 return true;
//!             default:
//!                 return false;
//!         }
//!     }
//! };
//! ```

use super::{Emitter, ensure_unique, ensure_unique_members};
use crate::{
    config::GeneratorConfig,
    error::EmitError,
    magic::{self, Tagged, hex_literal},
    parse::CommandDef
};

const INDENT: &str = "    ";

/// Members every generated struct declares on its own.
const RESERVED_MEMBERS: &[&str] = &["MAGIC", "kMagic"];

/// Emits a self-contained C++ header.
#[derive(Debug, Clone, Copy)]
pub struct CppEmitter<'a> {
    config: &'a GeneratorConfig
}

impl<'a> CppEmitter<'a> {
    /// Create an emitter using the naming conventions in `config`.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    fn emit_header(&self, out: &mut Vec<String>) {
        out.push("// Generated by vidl. Do not edit.".to_string());
        out.push("#pragma once".to_string());
        out.push(String::new());
        out.push("#include <cstdint>".to_string());
        out.push(String::new());
        out.push(format!("struct {}", self.config.header_struct));
        out.push("{".to_string());
        out.push(format!("{INDENT}uint32_t MAGIC;"));
        out.push("};".to_string());
        out.push(String::new());
    }

    fn emit_struct(&self, tagged: &Tagged<'_>, out: &mut Vec<String>) {
        let cmd = tagged.command;
        let name = self.config.struct_name(&cmd.sanitized_name);

        out.push(format!("// {}", cmd.signature()));
        out.push(format!("struct {name}"));
        out.push("{".to_string());
        out.push(format!(
            "{INDENT}static constexpr uint32_t kMagic = {};",
            hex_literal(tagged.magic)
        ));
        out.push(String::new());
        out.push(format!("{INDENT}uint32_t MAGIC = kMagic;"));
        for param in &cmd.params {
            out.push(format!("{INDENT}{} {};", param.value_type(), param.name));
        }
        out.push(String::new());
        out.push(format!("{INDENT}{name}() = default;"));

        if !cmd.params.is_empty() {
            let prefix = &self.config.ctor_param_prefix;
            let args: Vec<String> = cmd
                .params
                .iter()
                .map(|p| format!("{} {prefix}{}", p.ty, p.name))
                .collect();
            let inits: Vec<String> = cmd
                .params
                .iter()
                .map(|p| format!("{}({prefix}{})", p.name, p.name))
                .collect();
            let explicit = if cmd.params.len() == 1 { "explicit " } else { "" };
            out.push(format!(
                "{INDENT}{explicit}{name}({}) : {} {{}}",
                args.join(", "),
                inits.join(", ")
            ));
        }

        out.push("};".to_string());
        out.push(String::new());
    }

    fn emit_handler(&self, tagged: &[Tagged<'_>], out: &mut Vec<String>) {
        let config = self.config;
        let class = &config.handler_class;
        let body = format!("{INDENT}{INDENT}");
        let case = format!("{body}{INDENT}");
        let stmt = format!("{case}{INDENT}");

        out.push(format!("class {class}"));
        out.push("{".to_string());
        out.push("public:".to_string());
        out.push(format!("{INDENT}virtual ~{class}() = default;"));
        out.push(String::new());

        for t in tagged {
            let name = &t.command.sanitized_name;
            out.push(format!(
                "{INDENT}virtual void {}({}* cmd) {{ (void)cmd; }}",
                config.handler_name(name),
                config.struct_name(name)
            ));
        }
        if !tagged.is_empty() {
            out.push(String::new());
        }

        out.push(format!("{INDENT}bool HandleCmd(void* cmd)"));
        out.push(format!("{INDENT}{{"));
        out.push(format!("{body}if (cmd == nullptr)"));
        out.push(format!("{body}{{"));
        out.push(format!("{body}{INDENT}return false;"));
        out.push(format!("{body}}}"));
        out.push(String::new());
        out.push(format!(
            "{body}switch (static_cast<const {}*>(cmd)->MAGIC)",
            config.header_struct
        ));
        out.push(format!("{body}{{"));
        for t in tagged {
            let name = &t.command.sanitized_name;
            out.push(format!("{case}case {}:", hex_literal(t.magic)));
            out.push(format!(
                "{stmt}{}( ({}*) cmd );",
                config.handler_name(name),
                config.struct_name(name)
            ));
            out.push(format!("{stmt}return true;"));
        }
        out.push(format!("{case}default:"));
        out.push(format!("{stmt}return false;"));
        out.push(format!("{body}}}"));
        out.push(format!("{INDENT}}}"));
        out.push("};".to_string());
    }
}

impl Emitter for CppEmitter<'_> {
    type Output = String;

    fn emit(&self, commands: &[CommandDef]) -> Result<String, EmitError> {
        ensure_unique(commands.iter().map(|c| c.sanitized_name.as_str()))?;
        for cmd in commands {
            ensure_unique_members(cmd, cmd.params.iter().map(|p| p.name.as_str()), RESERVED_MEMBERS)?;
        }
        let tagged = magic::assign(commands, self.config.max_magic_attempts)?;

        let mut out = Vec::new();
        self.emit_header(&mut out);
        for t in &tagged {
            self.emit_struct(t, &mut out);
        }
        self.emit_handler(&tagged, &mut out);

        let mut text = out.join("\n");
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{magic::magic_for, parse::parse_declaration};

    fn emit(decls: &[&str]) -> String {
        let config = GeneratorConfig::default();
        let commands: Vec<CommandDef> = decls
            .iter()
            .map(|d| parse_declaration(d).unwrap())
            .collect();
        CppEmitter::new(&config).emit(&commands).unwrap()
    }

    #[test]
    fn struct_with_members_and_constructor() {
        let out = emit(&["void TestFunc(int x, float y)"]);
        assert!(out.contains("struct VIDL_TestFunc\n{"));
        assert!(out.contains(&format!(
            "static constexpr uint32_t kMagic = {};",
            hex_literal(magic_for("TestFunc"))
        )));
        assert!(out.contains("    uint32_t MAGIC = kMagic;\n    int x;\n    float y;\n"));
        assert!(out.contains("VIDL_TestFunc() = default;"));
        assert!(out.contains("    VIDL_TestFunc(int _x, float _y) : x(_x), y(_y) {}"));
    }

    #[test]
    fn single_parameter_constructor_is_explicit() {
        let out = emit(&["void CmdA(int x)"]);
        assert!(out.contains("explicit VIDL_CmdA(int _x) : x(_x) {}"));
    }

    #[test]
    fn zero_parameters_only_default_constructor() {
        let out = emit(&["void DoNothing()"]);
        assert!(out.contains("VIDL_DoNothing() = default;"));
        assert!(!out.contains("VIDL_DoNothing() :"));
        assert!(!out.contains("VIDL_DoNothing() {"));
    }

    #[test]
    fn reference_members_become_values() {
        let out = emit(&["void vhBeginMarker(const std::string& name)"]);
        assert!(out.contains("    const std::string name;\n"));
        assert!(!out.contains("const std::string& name;"));
        assert!(out.contains("VIDL_vhBeginMarker(const std::string& _name) : name(_name) {}"));
    }

    #[test]
    fn pointer_members_kept() {
        let out = emit(&["void FunctionTest2(uint32_t* x, TestStruct* ptr)"]);
        assert!(out.contains("    uint32_t* x;\n    TestStruct* ptr;\n"));
        assert!(out.contains("VIDL_FunctionTest2(uint32_t* _x, TestStruct* _ptr) : x(_x), ptr(_ptr) {}"));
    }

    #[test]
    fn keyword_parameters() {
        let out = emit(&["void Func(int virtual, float class, bool switch)"]);
        assert!(out.contains("    int virtual_;\n    float class_;\n    bool switch_;\n"));
        assert!(out.contains("int _virtual_, float _class_, bool _switch_"));
        assert!(out.contains(": virtual_(_virtual_), class_(_class_), switch_(_switch_) {}"));
    }

    #[test]
    fn dispatch_cases() {
        let out = emit(&["void CmdA(int x)", "void CmdB(float y)", "void CmdC()"]);
        for name in ["CmdA", "CmdB", "CmdC"] {
            let case = format!("case {}:", hex_literal(magic_for(name)));
            assert_eq!(out.matches(&case).count(), 1);
            assert!(out.contains(&format!("Handle_{name}( (VIDL_{name}*) cmd );")));
            assert!(out.contains(&format!(
                "virtual void Handle_{name}(VIDL_{name}* cmd) {{ (void)cmd; }}"
            )));
        }
        assert!(out.contains("switch (static_cast<const VIDLCmdHeader*>(cmd)->MAGIC)"));
    }

    #[test]
    fn output_order_follows_input() {
        let out = emit(&["void Zeta()", "void Alpha()"]);
        let zeta = out.find("struct VIDL_Zeta").unwrap();
        let alpha = out.find("struct VIDL_Alpha").unwrap();
        assert!(zeta < alpha);
        assert!(out.find("Handle_Zeta(").unwrap() < out.find("Handle_Alpha(").unwrap());
    }

    #[test]
    fn empty_batch_still_has_handler() {
        let out = emit(&[]);
        assert!(out.contains("class VIDLHandler"));
        assert!(out.contains("default:\n                return false;"));
        assert!(!out.contains("case "));
    }

    #[test]
    fn custom_naming() {
        let config = GeneratorConfig::default()
            .with_struct_prefix("Rpc")
            .with_handler_class("RpcHandler")
            .with_handler_prefix("On");
        let commands = vec![parse_declaration("void Ping(int seq)").unwrap()];
        let out = CppEmitter::new(&config).emit(&commands).unwrap();
        assert!(out.contains("struct RpcPing\n"));
        assert!(out.contains("class RpcHandler\n"));
        assert!(out.contains("virtual void OnPing(RpcPing* cmd)"));
        assert!(out.contains("OnPing( (RpcPing*) cmd );"));
    }

    #[test]
    fn duplicate_command_rejected() {
        let config = GeneratorConfig::default();
        let commands = vec![
            parse_declaration("void Twin()").unwrap(),
            parse_declaration("int Twin(int a)").unwrap(),
        ];
        assert_eq!(
            CppEmitter::new(&config).emit(&commands),
            Err(EmitError::DuplicateCommand {
                name: "Twin".into()
            })
        );
    }

    #[test]
    fn sanitized_names_collide() {
        let config = GeneratorConfig::default();
        let commands = vec![
            parse_declaration("void class()").unwrap(),
            parse_declaration("void class_()").unwrap(),
        ];
        assert!(matches!(
            CppEmitter::new(&config).emit(&commands),
            Err(EmitError::DuplicateCommand { .. })
        ));
    }

    #[test]
    fn duplicate_and_reserved_members_rejected() {
        let config = GeneratorConfig::default();
        let dup = vec![parse_declaration("void F(int a, float a)").unwrap()];
        assert_eq!(
            CppEmitter::new(&config).emit(&dup),
            Err(EmitError::DuplicateMember {
                command: "F".into(),
                member:  "a".into()
            })
        );
        let reserved = vec![parse_declaration("void G(int MAGIC)").unwrap()];
        assert!(matches!(
            CppEmitter::new(&config).emit(&reserved),
            Err(EmitError::DuplicateMember { .. })
        ));
    }
}
