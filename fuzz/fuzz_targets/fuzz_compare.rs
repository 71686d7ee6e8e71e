#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let _ = cadastro::text::compare_strings(Some(input.0), Some(input.1));
});
