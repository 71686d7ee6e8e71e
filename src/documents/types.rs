use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A petition or document template that can be generated for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTemplate {
    /// Stable template identifier.
    pub id: String,
    /// Display label, also used to match status records.
    pub label: String,
}

impl DocumentTemplate {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Generation state of a single document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    /// Not generated yet, or no status reported.
    #[default]
    Pending,
    /// The PDF was generated successfully.
    Generated,
    /// The last generation attempt failed.
    Failed,
}

/// A status entry reported by the document-generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Free-text label naming the document.
    pub label: String,
    /// Reported state.
    pub state: GenerationState,
    /// Day the state was recorded, if known.
    pub updated_on: Option<NaiveDate>,
}

impl StatusRecord {
    pub fn new(label: impl Into<String>, state: GenerationState) -> Self {
        Self {
            label: label.into(),
            state,
            updated_on: None,
        }
    }

    /// Set the day the state was recorded.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.updated_on = Some(date);
        self
    }
}

/// A template together with its resolved generation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextDocument {
    pub template: DocumentTemplate,
    pub state: GenerationState,
    /// Date of the record the state came from.
    pub updated_on: Option<NaiveDate>,
}

/// How many of a client's documents have been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub generated: usize,
    pub total: usize,
}

impl Completion {
    /// True when there is at least one template and all are generated.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.generated == self.total
    }

    /// Whole-number percentage, rounded down. 0 when there are no templates.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.generated * 100 / self.total).min(100) as u8
    }
}
