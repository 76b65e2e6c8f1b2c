//! Prompt construction for letter generation.
//!
//! `build_prompt` is a pure function of the request — the same request always
//! yields the same prompt string.

use crate::letters::LetterRequest;

/// Sender identity baked into every prompt's sign-off block.
pub const SENDER_NAME: &str = "Ammar Jamshed";
pub const SENDER_TITLE: &str = "Founder & CEO, Coursemon";
pub const SENDER_EMAIL: &str = "contact@coursemon.com";

/// Builds the single user prompt sent to the completion provider.
///
/// Contains the lower-cased letter type, recipient, position, long-format
/// date, the equity clause when it applies, structural instructions, and the
/// fixed tone instruction.
pub fn build_prompt(request: &LetterRequest) -> String {
    let equity_line = if request.equity_clause_applies() {
        let pct = request.equity_percent.as_deref().unwrap_or_default().trim();
        format!("\nInclude equity offering of {pct}% as part of this role.")
    } else {
        String::new()
    };

    format!(
        "You are a professional business assistant writing a formal {letter_type} \
on behalf of {sender}, {title}.

Recipient: {name}
Position: {position}
Date: {date}
{equity_line}
Write a structured letter with:
- A subject line
- Professional greeting
- Context and purpose
- Sections (such as Overview, Role Expectations, or Terms depending on the letter type)
- Closing with contact and sign-off:
{sender}
{title}
{email}

Use a warm and professional tone suitable for startup and business communication.",
        letter_type = request.letter_type.display_name().to_lowercase(),
        sender = SENDER_NAME,
        title = SENDER_TITLE,
        email = SENDER_EMAIL,
        name = request.recipient_name,
        position = request.position,
        date = request.formatted_date(),
        equity_line = equity_line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::LetterType;
    use chrono::NaiveDate;

    fn request(letter_type: LetterType) -> LetterRequest {
        LetterRequest {
            letter_type,
            recipient_name: "Malaika Khan".to_string(),
            recipient_email: "malaika@example.com".to_string(),
            position: "Business Development Specialist".to_string(),
            include_equity: false,
            equity_percent: None,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_prompt_contains_core_fields() {
        let mut req = request(LetterType::Employment);
        req.include_equity = true;
        req.equity_percent = Some("5".to_string());

        let prompt = build_prompt(&req);
        assert!(prompt.contains("employment letter"));
        assert!(prompt.contains("Malaika Khan"));
        assert!(prompt.contains("Business Development Specialist"));
        assert!(prompt.contains("January 15, 2025"));
        assert!(prompt.contains("equity offering of 5%"));
    }

    #[test]
    fn test_prompt_omits_equity_without_toggle() {
        let mut req = request(LetterType::Employment);
        req.equity_percent = Some("5".to_string());
        let prompt = build_prompt(&req);
        assert!(!prompt.contains("equity"));
    }

    #[test]
    fn test_prompt_never_mentions_equity_for_other_types() {
        for letter_type in [LetterType::Proposal, LetterType::Notice] {
            let mut req = request(letter_type);
            req.include_equity = true;
            req.equity_percent = Some("12".to_string());
            let prompt = build_prompt(&req);
            assert!(!prompt.contains("equity"), "{letter_type:?}");
        }
    }

    #[test]
    fn test_prompt_contains_sign_off_block() {
        let prompt = build_prompt(&request(LetterType::Proposal));
        assert!(prompt.contains(SENDER_NAME));
        assert!(prompt.contains(SENDER_TITLE));
        assert!(prompt.contains(SENDER_EMAIL));
        assert!(prompt.contains("business proposal"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request(LetterType::Notice);
        assert_eq!(build_prompt(&req), build_prompt(&req));
    }
}
