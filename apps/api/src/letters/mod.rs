//! Letter domain model — request types, validation, and output file naming.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod handlers;
pub mod prompts;

/// The three supported letter categories. Drives prompt phrasing, the
/// document subject line, and the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterType {
    Employment,
    Proposal,
    Notice,
}

impl LetterType {
    /// Human-facing name, as it appears in the subject line and file name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LetterType::Employment => "Employment Letter",
            LetterType::Proposal => "Business Proposal",
            LetterType::Notice => "Notice Letter",
        }
    }
}

/// One letter generation request, as submitted by the form.
///
/// `equity_percent` is meaningful only when `letter_type` is Employment and
/// `include_equity` is set; any value it carries otherwise is ignored rather
/// than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterRequest {
    pub letter_type: LetterType,
    pub recipient_name: String,
    pub recipient_email: String,
    pub position: String,
    #[serde(default)]
    pub include_equity: bool,
    #[serde(default)]
    pub equity_percent: Option<String>,
    pub date: NaiveDate,
}

impl LetterRequest {
    /// Checks the fields a letter cannot be generated without.
    pub fn validate(&self) -> Result<(), String> {
        if self.recipient_name.trim().is_empty() {
            return Err("recipient_name cannot be empty".to_string());
        }
        if self.recipient_email.trim().is_empty() {
            return Err("recipient_email cannot be empty".to_string());
        }
        if self.position.trim().is_empty() {
            return Err("position cannot be empty".to_string());
        }
        Ok(())
    }

    /// True when the generated prompt should carry the equity clause.
    pub fn equity_clause_applies(&self) -> bool {
        self.letter_type == LetterType::Employment
            && self.include_equity
            && self
                .equity_percent
                .as_deref()
                .is_some_and(|pct| !pct.trim().is_empty())
    }

    /// Date rendered in long month-name format, e.g. "August 04, 2025".
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }
}

/// Deterministic output file name: recipient name and letter type with
/// spaces replaced by underscores, plus the fixed suffix. Independent of
/// position, date, email, and generated text.
///
/// Path separators are stripped from the user-supplied name so the file
/// always lands inside the configured output directory; double quotes are
/// stripped so the name embeds cleanly in a quoted Content-Disposition value.
pub fn output_filename(request: &LetterRequest) -> String {
    let name = sanitize_component(&request.recipient_name);
    let letter_type = request.letter_type.display_name().replace(' ', "_");
    format!("{name}_{letter_type}_Coursemon_Letter.docx")
}

fn sanitize_component(raw: &str) -> String {
    raw.replace(['/', '\\', '"'], "").replace(' ', "_")
}
