use lopdf::Document;
use std::path::Path;

/// Page-by-page text, concatenated in page order.
pub(super) fn extract(path: &Path) -> Result<String, lopdf::Error> {
    let doc = Document::load(path)?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        text.push_str(&doc.extract_text(&[*page_number])?);
    }
    Ok(text)
}
