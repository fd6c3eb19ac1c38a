//! Paragraph formatting for description text.

/// Splits free text into `maml:para` units.
///
/// Absent or empty text yields exactly one empty paragraph rather than none;
/// help viewers expect a paragraph element to exist even when there is
/// nothing to say. Non-empty text splits on CRLF line breaks with empty
/// segments preserved as empty paragraphs.
#[must_use]
pub fn paragraphs(text: Option<&str>) -> Vec<String> {
    match text {
        None | Some("") => vec![String::new()],
        Some(body) => body.split("\r\n").map(str::to_owned).collect(),
    }
}
