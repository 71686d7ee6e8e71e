#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the predicate must agree with the parser.
        let valid = cadastro::validate_cpf_or_cnpj(s);
        assert_eq!(valid, cadastro::TaxId::parse(s).is_ok());
    }
});
