//! Single-page PDF emission.
//!
//! Draws the wrapped letter text as one text section on a US Letter page:
//! cursor at (50pt, 750pt) from the bottom-left corner, builtin Times-Roman
//! at 12pt, 14.4pt leading, one line per [`emit_lines`] entry. There is no
//! pagination — text past the page bottom draws off-page. Known limitation;
//! do not add multi-page flow here.

use anyhow::{Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::render::wrap::emit_lines;

// US Letter, in millimetres.
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;

// Text origin in PDF points, measured from the bottom-left corner.
const START_X_PT: f32 = 50.0;
const START_Y_PT: f32 = 750.0;

const FONT_SIZE_PT: f32 = 12.0;
/// Leading between baselines: 1.2 x font size.
const LINE_HEIGHT_PT: f32 = 14.4;

/// Renders letter text into a single-page PDF byte buffer.
///
/// The buffer is complete and ready to stream; nothing touches the
/// filesystem. Drawing failures propagate to the caller.
pub fn render_letter(text: &str) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Government Letter",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::TimesRoman)
        .context("failed to register builtin Times-Roman")?;

    layer.begin_text_section();
    layer.set_font(&font, FONT_SIZE_PT);
    layer.set_text_cursor(Mm::from(Pt(START_X_PT)), Mm::from(Pt(START_Y_PT)));
    layer.set_line_height(LINE_HEIGHT_PT);

    for line in emit_lines(text) {
        layer.write_text(line, &font);
        layer.add_line_break();
    }

    layer.end_text_section();

    doc.save_to_bytes().context("failed to serialize PDF")
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUB_LETTER: &str = "Dear Sir,\n\nPlease provide water.\n\nRegards,\nJane";

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_letter(STUB_LETTER).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_rendered_text_is_extractable() {
        let bytes = render_letter(STUB_LETTER).unwrap();
        let extracted = pdf_extract::extract_text_from_mem(&bytes).unwrap();

        for expected in ["Dear Sir,", "Please provide water.", "Regards,", "Jane"] {
            assert!(
                extracted.contains(expected),
                "missing {expected:?} in {extracted:?}"
            );
        }
    }

    #[test]
    fn test_render_empty_text() {
        // An empty letter still renders a valid single-page document
        let bytes = render_letter("").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
