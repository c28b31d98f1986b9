#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(vars) = serde_json::from_slice::<fuzz_ab::template::VarSets>(data) else {
        return;
    };
    let expected = fuzz_ab::template::combination_count(&vars);
    if expected > 10_000 {
        return;
    }
    let bindings = fuzz_ab::template::expand(&vars);
    debug_assert_eq!(bindings.len(), expected);
    for binding in &bindings {
        debug_assert_eq!(binding.len(), vars.len());
    }
});
