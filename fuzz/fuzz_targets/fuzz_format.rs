#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let out = cadastro::format_cpf_cnpj(s);
        assert!(out.bytes().filter(u8::is_ascii_digit).count() <= cadastro::CNPJ_LEN);
        assert_eq!(cadastro::format_cpf_cnpj(&out), out);
    }
});
