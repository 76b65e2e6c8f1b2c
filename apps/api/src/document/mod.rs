//! Letter document assembly.
//!
//! `assemble` maps a request plus the generated text to an ordered block
//! sequence. It is pure: no I/O, no clock, no randomness — the serializer in
//! [`docx`] is the only place the logo file is actually read.

use crate::letters::LetterRequest;

pub mod docx;

/// Logo display width in the header cell, in inches.
pub const LOGO_WIDTH_IN: f32 = 1.2;

/// Two-line organization tagline shown beside the logo.
pub const TAGLINE: &str = "Coursemon\nEmpowering Learning Journeys";

const FOOTER_LINES: [&str; 6] = [
    "Warm regards,",
    "Ammar Jamshed",
    "Co-Founder & CEO, Coursemon",
    "WhatsApp: 03412917004",
    "https://coursemon.net",
    "NED University, University Road, NIC Karachi",
];

/// One typed block of the final document, in render order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Two-column header: scaled logo in column one, tagline in column two.
    HeaderTable {
        logo_width_in: f32,
        tagline: String,
    },
    /// Empty paragraph used as vertical spacing.
    Spacer,
    /// Plain paragraph. Embedded newlines become line breaks.
    Paragraph(String),
    /// Heading-styled line (the subject).
    Heading(String),
}

/// An assembled letter: an immutable, ordered block sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterDocument {
    pub blocks: Vec<Block>,
}

/// Builds the canonical letter layout: table header, dated body, the
/// generated text verbatim as a single paragraph, and the fixed footer.
///
/// The generated text is not inspected or parsed — it is inserted as-is even
/// when it carries no structural markers.
pub fn assemble(request: &LetterRequest, generated_text: &str) -> LetterDocument {
    let mut blocks = vec![
        Block::HeaderTable {
            logo_width_in: LOGO_WIDTH_IN,
            tagline: TAGLINE.to_string(),
        },
        Block::Spacer,
        Block::Paragraph(format!("Date: {}", request.formatted_date())),
        Block::Paragraph(format!(
            "To:\n{}\n{}",
            request.recipient_name, request.recipient_email
        )),
        Block::Spacer,
        Block::Heading(format!(
            "Subject: {} for {}",
            request.letter_type.display_name(),
            request.position
        )),
        Block::Paragraph(generated_text.to_string()),
        Block::Spacer,
    ];
    blocks.extend(FOOTER_LINES.iter().map(|line| Block::Paragraph(line.to_string())));

    LetterDocument { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::LetterType;
    use chrono::NaiveDate;

    fn request() -> LetterRequest {
        LetterRequest {
            letter_type: LetterType::Employment,
            recipient_name: "Malaika Khan".to_string(),
            recipient_email: "malaika@example.com".to_string(),
            position: "Business Development Specialist".to_string(),
            include_equity: true,
            equity_percent: Some("5".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_block_order() {
        let doc = assemble(&request(), "Dear Malaika, ...");
        assert!(matches!(doc.blocks[0], Block::HeaderTable { .. }));
        assert_eq!(doc.blocks[1], Block::Spacer);
        assert_eq!(
            doc.blocks[2],
            Block::Paragraph("Date: January 15, 2025".to_string())
        );
        assert_eq!(
            doc.blocks[3],
            Block::Paragraph("To:\nMalaika Khan\nmalaika@example.com".to_string())
        );
        assert_eq!(doc.blocks[4], Block::Spacer);
        assert_eq!(
            doc.blocks[5],
            Block::Heading(
                "Subject: Employment Letter for Business Development Specialist".to_string()
            )
        );
        assert_eq!(
            doc.blocks[6],
            Block::Paragraph("Dear Malaika, ...".to_string())
        );
        assert_eq!(doc.blocks[7], Block::Spacer);
    }

    #[test]
    fn test_footer_closes_the_document() {
        let doc = assemble(&request(), "body");
        let tail: Vec<_> = doc.blocks.iter().rev().take(6).collect();
        assert_eq!(
            *tail[0],
            Block::Paragraph("NED University, University Road, NIC Karachi".to_string())
        );
        assert_eq!(*tail[5], Block::Paragraph("Warm regards,".to_string()));
    }

    #[test]
    fn test_generated_text_inserted_verbatim() {
        let text = "no greeting\n\nno subject ```raw```";
        let doc = assemble(&request(), text);
        assert!(doc.blocks.contains(&Block::Paragraph(text.to_string())));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let req = request();
        assert_eq!(assemble(&req, "same text"), assemble(&req, "same text"));
    }
}
