use cadastro::core::*;

fn main() {
    // Live masking, one keystroke at a time
    println!("=== Input Mask ===\n");

    let typed = "11222333000181";
    for n in 1..=typed.len() {
        println!("  {:<14} => {}", &typed[..n], format_cpf_cnpj(&typed[..n]));
    }

    // Checksum validation
    println!("\n=== Validation ===\n");

    let inputs = [
        "111.444.777-35",
        "11.222.333/0001-81",
        "111.111.111-11",  // repeated digits
        "111.444.777-36",  // bad check digit
        "123456",          // wrong length
    ];

    for input in &inputs {
        match TaxId::parse(input) {
            Ok(id) => println!("  {input} => valid {} ({})", id.kind(), id.digits()),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    // Check digit generation
    println!("\n=== Check Digits ===\n");

    for base in ["529982247", "604009130001"] {
        if let Some(full) = complete_with_check_digits(base) {
            println!("  {base} => {}", format_cpf_cnpj(&full));
        }
    }
}
