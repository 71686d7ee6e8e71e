use cadastro::documents::*;
use chrono::NaiveDate;

fn main() -> Result<(), DocumentError> {
    let mut docs = ClientDocuments::for_client("111.444.777-35")?;
    docs.add_template(DocumentTemplate::new("proc", "Procuração INSS"))?;
    docs.add_template(DocumentTemplate::new("decl", "Declaração de hipossuficiência"))?;
    docs.add_template(DocumentTemplate::new("contrato", "Contrato de honorários"))?;

    let day = NaiveDate::from_ymd_opt(2024, 6, 15);
    let mut generated = StatusRecord::new("PROCURACAO INSS", GenerationState::Generated);
    generated.updated_on = day;
    docs.add_record(generated);
    docs.add_record(StatusRecord::new(
        "declaracao de hipossuficiencia",
        GenerationState::Failed,
    ));

    println!("Client {}\n", docs.client());
    for doc in docs.next_documents() {
        println!("  {:<32} {:?}", doc.template.label, doc.state);
    }

    let progress = docs.progress();
    println!(
        "\n{}/{} generated ({}%)",
        progress.generated,
        progress.total,
        progress.percent()
    );
    Ok(())
}
