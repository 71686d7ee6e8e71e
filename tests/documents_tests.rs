#![cfg(feature = "documents")]

use cadastro::core::TaxId;
use cadastro::documents::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn business_client() -> ClientDocuments {
    ClientDocuments::for_client("11.222.333/0001-81")
        .unwrap()
        .template("proc", "Procuração")
        .template("contrato", "Contrato de honorários")
        .template("decl", "Declaração de residência")
}

#[test]
fn client_is_typed() {
    let docs = business_client();
    assert!(docs.client().is_cnpj());
    assert_eq!(docs.client().digits(), "11222333000181");
}

#[test]
fn workflow_to_completion() {
    let mut docs = business_client();
    assert_eq!(docs.progress().percent(), 0);

    docs.add_record(StatusRecord::new("PROCURACAO", GenerationState::Generated).on(date(2024, 5, 2)));
    docs.add_record(
        StatusRecord::new("contrato de honorarios", GenerationState::Failed).on(date(2024, 5, 2)),
    );
    assert_eq!(docs.progress(), Completion { generated: 1, total: 3 });

    let pending: Vec<_> = docs.pending().into_iter().map(|d| d.template.id).collect();
    assert_eq!(pending, ["contrato", "decl"]);

    docs.add_record(
        StatusRecord::new("Contrato de Honorários", GenerationState::Generated)
            .on(date(2024, 5, 3)),
    );
    docs.add_record(StatusRecord::new(
        "Declaração de Residência",
        GenerationState::Generated,
    ));

    let progress = docs.progress();
    assert!(progress.is_complete());
    assert_eq!(progress.percent(), 100);
    assert!(docs.pending().is_empty());
}

#[test]
fn next_documents_keep_selection_order() {
    let ids: Vec<_> = business_client()
        .next_documents()
        .into_iter()
        .map(|d| d.template.id)
        .collect();
    assert_eq!(ids, ["proc", "contrato", "decl"]);
}

#[test]
fn unmatched_records_are_kept_but_ignored() {
    let docs = business_client().record(StatusRecord::new(
        "Substabelecimento",
        GenerationState::Generated,
    ));
    assert_eq!(docs.records().len(), 1);
    assert_eq!(docs.progress().generated, 0);
}

#[test]
fn serde_shape() {
    let docs = ClientDocuments::new(TaxId::parse("111.444.777-35").unwrap())
        .template("proc", "Procuração")
        .record(
            StatusRecord::new("Procuração", GenerationState::Generated).on(date(2024, 1, 31)),
        );

    let json = serde_json::to_value(&docs).unwrap();
    assert_eq!(json["client"], "11144477735");
    assert_eq!(json["records"][0]["state"], "generated");
    assert_eq!(json["records"][0]["updated_on"], "2024-01-31");

    let back: ClientDocuments = serde_json::from_value(json).unwrap();
    assert_eq!(back, docs);
}

#[test]
fn serde_rejects_invalid_client() {
    let json = serde_json::json!({
        "client": "11111111111",
        "templates": [],
        "records": []
    });
    assert!(serde_json::from_value::<ClientDocuments>(json).is_err());
}

#[test]
fn error_display() {
    let err = ClientDocuments::for_client("123").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid client identifier: expected 11 digits (CPF) or 14 digits (CNPJ), got 3"
    );
}
