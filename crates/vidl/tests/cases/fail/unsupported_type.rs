// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

vidl::commands! {
    source = "// VIDL_GENERATE\nvoid Callback(std::function<void()> cb);"
}

fn main() {}
