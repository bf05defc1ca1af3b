//! Fixed-width line wrapping for PDF layout.
//!
//! The wrap is a hard cut at 90 characters with no word-boundary awareness.
//! The exact split points are part of the output contract: for a raw line of
//! L characters the emitted sub-lines number ceil(L / 90) and concatenate
//! back to the original line unchanged. Do not upgrade this to word wrap.

/// Maximum characters per emitted PDF line.
pub const MAX_LINE_CHARS: usize = 90;

/// Splits `text` into the exact sequence of lines drawn on the page.
///
/// Paragraphs are separated by `"\n\n"`, raw lines within a paragraph by
/// `"\n"`. Raw lines longer than [`MAX_LINE_CHARS`] are cut into 90-character
/// pieces front to back. Each paragraph is followed by one empty output line,
/// including the last.
///
/// Characters are Unicode scalars, not bytes, so multibyte text never gets
/// cut mid-character.
pub fn emit_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split("\n\n") {
        for raw_line in paragraph.split('\n') {
            let mut rest = raw_line;
            while rest.chars().count() > MAX_LINE_CHARS {
                let cut = rest
                    .char_indices()
                    .nth(MAX_LINE_CHARS)
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                lines.push(rest[..cut].to_string());
                rest = &rest[cut..];
            }
            lines.push(rest.to_string());
        }
        // Blank line between paragraphs, kept after the last one too
        lines.push(String::new());
    }

    lines
}
