use super::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Body paragraphs of a `.docx`, joined with newlines.
pub(super) fn extract(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    Ok(body_paragraphs(&xml)?.join("\n"))
}

/// Text of every `w:p` that is a direct child of `w:body`, in document order.
///
/// Paragraphs inside tables or text boxes are skipped. Within a paragraph
/// `w:t` contributes its text, and a `w:tab` or `w:br`/`w:cr` directly inside
/// a run contributes a tab or newline. Tab stops under `w:pPr` are ignored.
pub(crate) fn body_paragraphs(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;
    // w:p elements opened inside the current body paragraph (text boxes)
    let mut nested = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                match name.as_slice() {
                    b"w:p" if current.is_none() && parent_is_body(&stack) => {
                        current = Some(String::new());
                    }
                    b"w:p" if current.is_some() => nested += 1,
                    b"w:t" => in_text = true,
                    _ => {}
                }
                stack.push(name);
            }
            Event::End(e) => {
                stack.pop();
                match e.name().as_ref() {
                    b"w:p" if nested > 0 => nested -= 1,
                    b"w:p" => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    b"w:t" => in_text = false,
                    _ => {}
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if current.is_none() && parent_is_body(&stack) => {
                    paragraphs.push(String::new());
                }
                b"w:tab" if nested == 0 && parent_is(&stack, b"w:r") => {
                    if let Some(text) = current.as_mut() {
                        text.push('\t');
                    }
                }
                b"w:br" | b"w:cr" if nested == 0 && parent_is(&stack, b"w:r") => {
                    if let Some(text) = current.as_mut() {
                        text.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(e) if in_text && nested == 0 => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn parent_is(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().map(|n| n.as_slice() == name).unwrap_or(false)
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    parent_is(stack, b"w:body")
}
