// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end behaviour of the C++ pipeline.

use vidl_core::{
    Error, GeneratorConfig, ParseErrorKind, RustEmitter, generate, generate_cpp, magic_for,
    parse_declaration
};

fn cpp(source: &str) -> String {
    generate_cpp(source, &GeneratorConfig::default()).unwrap()
}

/// The `kMagic` literal declared inside `struct {name}`.
fn struct_magic<'a>(output: &'a str, name: &str) -> &'a str {
    let start = output.find(&format!("struct {name}\n")).unwrap();
    let rest = &output[start..];
    let value = &rest[rest.find("kMagic = ").unwrap() + "kMagic = ".len()..];
    &value[..value.find(';').unwrap()]
}

#[test]
fn keyword_collision_extreme() {
    let result = parse_declaration("void Func(int virtual, float class, bool switch)").unwrap();
    let names: Vec<_> = result.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["virtual_", "class_", "switch_"]);

    let output = cpp("// VIDL_GENERATE\nvoid Func(int virtual, float class, bool switch);\n");
    for member in ["int virtual_", "float class_", "bool switch_"] {
        assert!(output.contains(member), "missing member `{member}`");
    }
    for arg in ["int _virtual_", "float _class_", "bool _switch_"] {
        assert!(output.contains(arg), "missing constructor argument `{arg}`");
    }
    for init in ["virtual_(_virtual_)", "class_(_class_)", "switch_(_switch_)"] {
        assert!(output.contains(init), "missing initializer `{init}`");
    }
}

#[test]
fn generation_integrity() {
    let source = "
        // VIDL_GENERATE
        void CmdA(int x);

        // VIDL_GENERATE
        void CmdB(float y);

        // VIDL_GENERATE
        void CmdC();
        ";
    let output = cpp(source);

    let magic_a = struct_magic(&output, "VIDL_CmdA");
    let magic_b = struct_magic(&output, "VIDL_CmdB");
    let magic_c = struct_magic(&output, "VIDL_CmdC");
    assert_ne!(magic_a, magic_b);
    assert_ne!(magic_a, magic_c);
    assert_ne!(magic_b, magic_c);

    for magic in [magic_a, magic_b, magic_c] {
        assert_eq!(output.matches(&format!("case {magic}:")).count(), 1);
    }
    assert!(output.contains("Handle_CmdA( (VIDL_CmdA*) cmd );"));
    assert!(output.contains("Handle_CmdB( (VIDL_CmdB*) cmd );"));
    assert!(output.contains("Handle_CmdC( (VIDL_CmdC*) cmd );"));

    // Each case casts to the struct that owns the magic.
    let case_a = output.find(&format!("case {magic_a}:")).unwrap();
    let next = &output[case_a..];
    assert!(next[..next.find("return true;").unwrap()].contains("(VIDL_CmdA*)"));
}

#[test]
fn magics_are_deterministic() {
    let source = "// VIDL_GENERATE\nvoid MyFunc(int a);\n";
    assert_eq!(cpp(source), cpp(source));
    assert_eq!(
        struct_magic(&cpp(source), "VIDL_MyFunc"),
        format!("0x{:08X}", magic_for("MyFunc"))
    );
}

#[test]
fn comments_inside_declaration() {
    let output = cpp("// VIDL_GENERATE\nvoid Func(int x /* index */, float y // value\n);");
    assert!(output.contains("int x;"));
    assert!(output.contains("float y;"));

    let plain = cpp("// VIDL_GENERATE\nvoid Func(int x, float y);");
    assert_eq!(output, plain);
}

#[test]
fn empty_func() {
    let output = cpp("// VIDL_GENERATE\nvoid DoNothing();\n");
    assert!(output.contains("VIDL_DoNothing() = default;"));
    assert!(!output.contains("VIDL_DoNothing() :"));
}

#[test]
fn reference_members() {
    let output = cpp("// VIDL_GENERATE\nvoid vhBeginMarker(const std::string& name);\n");
    assert!(output.contains("const std::string name;"));
    assert!(!output.contains("const std::string& name;"));
    assert!(output.contains("VIDL_vhBeginMarker(const std::string& _name)"));
}

#[test]
fn multiline_declaration_with_templates_and_defaults() {
    let output = cpp("\
// VIDL_GENERATE
void Configure(
    std::map<int, float> weights,  // per id
    const char* label = \"a, b\",
    int limit = 1'000
);
");
    assert!(output.contains("    std::map<int, float> weights;\n    const char* label;\n    int limit;\n"));
}

#[test]
fn unmarked_declarations_are_ignored() {
    let output = cpp("\
void Hidden(int x);
// VIDL_GENERATE
void Shown(int x);
");
    assert!(!output.contains("Hidden"));
    assert!(output.contains("struct VIDL_Shown"));
}

#[test]
fn batch_reports_every_malformed_declaration() {
    let source = "\
// VIDL_GENERATE
void Good(int x);
// VIDL_GENERATE
void NoName(int);
// VIDL_GENERATE
void Unbalanced(std::vector<int x);
// VIDL_GENERATE
void AlsoGood(float y);
";
    let err = generate_cpp(source, &GeneratorConfig::default()).unwrap_err();
    let lines: Vec<_> = err
        .errors
        .iter()
        .map(|e| match e {
            Error::Parse(p) => p.line,
            Error::Emit(_) => None
        })
        .collect();
    assert_eq!(lines, [Some(3), Some(5)]);
    let names: Vec<_> = err.commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Good", "AlsoGood"]);

    let Error::Parse(first) = &err.errors[0] else {
        panic!("expected parse error");
    };
    assert_eq!(first.kind, ParseErrorKind::UnsplittableParameter);
}

#[test]
fn rust_backend_shares_magics() {
    let config = GeneratorConfig::default();
    let source = "// VIDL_GENERATE\nvoid CmdA(int x);\n";
    let tokens = generate(source, &config, &RustEmitter::new(&config))
        .unwrap()
        .to_string();
    assert!(tokens.contains(&format!("0x{:08X}", magic_for("CmdA"))));
    assert!(tokens.contains("VidlCmdA"));
}
