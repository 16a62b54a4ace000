// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

vidl::commands! {
    source = r#"
        // VIDL_GENERATE
        void vhBeginMarker(const std::string& name);

        // VIDL_GENERATE
        uint32_t ComplexFunc(char* ptr, bool flag = true);

        // VIDL_GENERATE
        void Func(int virtual, float class, bool type);

        // VIDL_GENERATE
        void Collect(
            std::vector<int> list,                   // ids
            const std::map<int, float>& weights,
            uint64_t* out /* written by the handler */
        );
    "#
}

fn main() {
    let begin = VidlVhBeginMarker::new(String::from("frame"));
    assert_eq!(begin.name, "frame");

    let complex = VidlComplexFunc::new(std::ptr::null_mut(), true);
    assert!(complex.ptr.is_null());
    assert!(complex.flag);

    let func = VidlFunc::new(1, 2.5, false);
    assert_eq!(func.r#virtual, 1);
    assert_eq!(func.class, 2.5);
    assert!(!func.r#type);

    let mut weights = BTreeMap::new();
    weights.insert(1, 0.5_f32);
    let mut total = 0_u64;
    let collect = VidlCollect::new(vec![1, 2, 3], weights, &mut total);
    assert_eq!(collect.list.len(), 3);
    assert_eq!(collect.weights[&1], 0.5);
    assert!(!collect.out.is_null());

    let cmd: VidlCommand = begin.into();
    assert_eq!(cmd.name(), "vhBeginMarker");
}
