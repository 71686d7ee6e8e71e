use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::types::*;
use crate::core::TaxId;
use crate::text::compare_strings;

/// A client's selected document templates and the status records
/// received for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDocuments {
    client: TaxId,
    templates: Vec<DocumentTemplate>,
    records: Vec<StatusRecord>,
}

impl ClientDocuments {
    /// Start an empty document set for a client.
    pub fn new(client: TaxId) -> Self {
        Self {
            client,
            templates: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Start an empty document set from a raw CPF/CNPJ.
    pub fn for_client(raw: &str) -> Result<Self, DocumentError> {
        Ok(Self::new(TaxId::parse(raw)?))
    }

    /// Select a template (builder style, unchecked).
    pub fn template(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.templates.push(DocumentTemplate::new(id, label));
        self
    }

    /// Attach a status record (builder style).
    pub fn record(mut self, record: StatusRecord) -> Self {
        self.add_record(record);
        self
    }

    /// Select a template, rejecting duplicate ids and blank labels.
    pub fn add_template(&mut self, template: DocumentTemplate) -> Result<(), DocumentError> {
        if template.label.trim().is_empty() {
            return Err(DocumentError::EmptyLabel(template.id));
        }
        if self.templates.iter().any(|t| t.id == template.id) {
            return Err(DocumentError::DuplicateTemplate(template.id));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Attach a status record.
    pub fn add_record(&mut self, record: StatusRecord) {
        if !self.templates.iter().any(|t| record_matches(&record, t)) {
            tracing::debug!(
                client = %self.client.kind(),
                label = %record.label,
                "status record matches no selected template"
            );
        }
        self.records.push(record);
    }

    pub fn client(&self) -> &TaxId {
        &self.client
    }

    pub fn templates(&self) -> &[DocumentTemplate] {
        &self.templates
    }

    pub fn records(&self) -> &[StatusRecord] {
        &self.records
    }

    /// Resolved state of one template, or `None` if it is not selected.
    pub fn state_of(&self, template_id: &str) -> Option<GenerationState> {
        self.templates
            .iter()
            .find(|t| t.id == template_id)
            .map(|t| self.resolve(t).state)
    }

    /// Every selected template with its resolved state, in selection order.
    ///
    /// A record matches a template when its label contains the template
    /// label, ignoring accents and case. The latest-dated match wins;
    /// undated records count as older than dated ones, and among equals
    /// the record added last wins. Templates without a match are
    /// [`GenerationState::Pending`].
    pub fn next_documents(&self) -> Vec<NextDocument> {
        self.templates.iter().map(|t| self.resolve(t)).collect()
    }

    /// Templates that are not generated yet (pending or failed).
    pub fn pending(&self) -> Vec<NextDocument> {
        self.next_documents()
            .into_iter()
            .filter(|d| d.state != GenerationState::Generated)
            .collect()
    }

    /// Generated versus selected template counts.
    pub fn progress(&self) -> Completion {
        let docs = self.next_documents();
        Completion {
            generated: docs
                .iter()
                .filter(|d| d.state == GenerationState::Generated)
                .count(),
            total: docs.len(),
        }
    }

    fn resolve(&self, template: &DocumentTemplate) -> NextDocument {
        let latest = self
            .records
            .iter()
            .filter(|r| record_matches(r, template))
            .fold(None::<&StatusRecord>, |best, r| match best {
                Some(b) if b.updated_on > r.updated_on => Some(b),
                _ => Some(r),
            });

        tracing::trace!(
            template = %template.id,
            matched = latest.is_some(),
            "resolved document state"
        );

        NextDocument {
            template: template.clone(),
            state: latest.map(|r| r.state).unwrap_or_default(),
            updated_on: latest.and_then(|r| r.updated_on),
        }
    }
}

fn record_matches(record: &StatusRecord, template: &DocumentTemplate) -> bool {
    compare_strings(Some(&record.label), Some(&template.label))
}
