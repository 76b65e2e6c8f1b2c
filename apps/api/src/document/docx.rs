//! Serializes a [`LetterDocument`] block sequence into `.docx` bytes.
//!
//! This is the only impure part of the document pipeline: it reads the logo
//! asset from disk and packages the OOXML archive.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Pic, Run, Style, StyleType, Table, TableCell, TableRow};
use image::GenericImageView;
use thiserror::Error;

use crate::document::{Block, LetterDocument};

const EMU_PER_INCH: f32 = 914_400.0;
const SUBJECT_STYLE_ID: &str = "Heading2";

#[derive(Debug, Error)]
pub enum DocError {
    #[error("logo asset unreadable at '{path}': {source}")]
    AssetMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("logo asset is not a decodable image: {0}")]
    AssetDecode(#[from] image::ImageError),

    #[error("docx packaging failed: {0}")]
    Pack(String),
}

/// Renders the block sequence to a complete `.docx` archive in memory.
///
/// The logo is read from `logo_path` and scaled to the block's display width
/// with its aspect ratio preserved. An unreadable or undecodable logo aborts
/// the whole render — no partial document is produced.
pub fn render_docx(document: &LetterDocument, logo_path: &str) -> Result<Vec<u8>, DocError> {
    let mut docx = Docx::new().add_style(
        Style::new(SUBJECT_STYLE_ID, StyleType::Paragraph)
            .name("Heading 2")
            .bold()
            .size(26),
    );

    for block in &document.blocks {
        docx = match block {
            Block::HeaderTable {
                logo_width_in,
                tagline,
            } => docx.add_table(header_table(logo_path, *logo_width_in, tagline)?),
            Block::Spacer => docx.add_paragraph(Paragraph::new()),
            Block::Paragraph(text) => docx.add_paragraph(text_paragraph(text)),
            Block::Heading(text) => {
                docx.add_paragraph(text_paragraph(text).style(SUBJECT_STYLE_ID))
            }
        };
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocError::Pack(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Two-column header: logo cell, tagline cell.
fn header_table(logo_path: &str, width_in: f32, tagline: &str) -> Result<Table, DocError> {
    let bytes = std::fs::read(logo_path).map_err(|source| DocError::AssetMissing {
        path: logo_path.to_string(),
        source,
    })?;

    let (px_w, px_h) = image::load_from_memory(&bytes)?.dimensions();
    let width_emu = (width_in * EMU_PER_INCH) as u32;
    let height_emu = (width_emu as f32 * px_h as f32 / px_w as f32) as u32;

    let logo_cell = TableCell::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_image(Pic::new(&bytes).size(width_emu, height_emu))),
    );
    let tagline_cell = TableCell::new().add_paragraph(text_paragraph(tagline));

    Ok(Table::new(vec![TableRow::new(vec![logo_cell, tagline_cell])]))
}

/// Single paragraph; embedded newlines render as in-paragraph line breaks.
fn text_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::assemble;
    use crate::letters::{LetterRequest, LetterType};
    use chrono::NaiveDate;

    fn request() -> LetterRequest {
        LetterRequest {
            letter_type: LetterType::Proposal,
            recipient_name: "Malaika Khan".to_string(),
            recipient_email: "malaika@example.com".to_string(),
            position: "Business Development Specialist".to_string(),
            include_equity: false,
            equity_percent: None,
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
        }
    }

    fn write_test_logo(dir: &std::path::Path) -> String {
        let img = image::RgbaImage::from_pixel(6, 3, image::Rgba([20, 40, 80, 255]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        let path = dir.join("logo.png");
        std::fs::write(&path, buffer.into_inner()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_render_produces_zip_archive() {
        let dir = tempfile::tempdir().unwrap();
        let logo = write_test_logo(dir.path());
        let doc = assemble(&request(), "Dear Malaika, welcome aboard.");

        let bytes = render_docx(&doc, &logo).unwrap();
        // OOXML containers are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_missing_logo_is_asset_error() {
        let doc = assemble(&request(), "body");
        let err = render_docx(&doc, "/nonexistent/logo.jpg").unwrap_err();
        assert!(matches!(err, DocError::AssetMissing { .. }));
    }

    #[test]
    fn test_undecodable_logo_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        let doc = assemble(&request(), "body");
        let err = render_docx(&doc, path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, DocError::AssetDecode(_)));
    }
}
