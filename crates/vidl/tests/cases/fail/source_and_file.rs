// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

vidl::commands! { source = "void A(int x);", file = "tests/data/commands.h" }

fn main() {}
