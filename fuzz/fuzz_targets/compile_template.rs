#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let compiled = fuzz_ab::template::compile(input);
        debug_assert_eq!(compiled.segments().len(), compiled.slot_count() * 2 + 1);

        let mut vars = BTreeMap::new();
        for name in compiled.slots().keys() {
            vars.insert(name.clone(), format!("{{{{{}}}}}", name));
        }
        debug_assert_eq!(compiled.render(&vars), input);
    }
});
