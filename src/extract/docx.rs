// DOCX extractor: a .docx is a ZIP container whose main text lives in
// word/document.xml. Text runs sit in <w:t> elements; a </w:p> closes a
// paragraph, which maps to one line of output. No other markup is parsed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub(crate) fn extract(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| ExtractError::Failed(format!("not a docx container: {e}")))?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Failed(format!("{DOCUMENT_PART} missing: {e}")))?;

    let mut reader = Reader::from_reader(BufReader::new(part));
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_run = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| ExtractError::Failed(format!("malformed document xml: {e}")))?;
        match event {
            Event::Start(ref e) if e.name().as_ref() == b"w:t" => in_run = true,
            Event::End(ref e) if e.name().as_ref() == b"w:t" => in_run = false,
            Event::Text(ref t) if in_run => {
                let chunk = t
                    .unescape()
                    .map_err(|e| ExtractError::Failed(format!("bad text run: {e}")))?;
                text.push_str(&chunk);
            }
            // Paragraph end and explicit breaks both terminate a line
            Event::End(ref e) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Event::Empty(ref e) if e.name().as_ref() == b"w:br" => text.push('\n'),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
