// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

vidl::commands! {
    source = "// VIDL_GENERATE\nvoid NoName(int);\n// VIDL_GENERATE\nvoid Empty(int a, );"
}

fn main() {}
