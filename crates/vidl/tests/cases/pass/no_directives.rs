// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

vidl::commands! {
    source = "void Plain(int x);"
}

struct Nop;

impl VidlHandler for Nop {}

fn main() {
    let _handler = Nop;
    assert!(VidlCommand::MAGICS.is_empty());
    assert_eq!(VidlCommand::name_for_magic(1), None);
}
