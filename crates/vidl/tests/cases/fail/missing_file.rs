// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

vidl::commands! {
    file = "tests/data/missing.h"
}

fn main() {}
