// PDF extractor, pure Rust via lopdf.
//
// Before any page is read, the document's encryption dictionary is checked
// for the copy/extract permission bit; a document that withholds it is
// reported as access-denied, never silently treated as empty.

use std::path::Path;

use lopdf::{Document, Object};

use super::ExtractError;

/// Bit 5 of the /P permission flags: copy or otherwise extract text.
const EXTRACT_PERMISSION: i64 = 1 << 4;

pub(crate) fn extract(path: &Path) -> Result<String, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::Failed(e.to_string()))?;

    if !extraction_allowed(&doc) {
        return Err(ExtractError::Denied);
    }

    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_num])
            .map_err(|e| ExtractError::Failed(format!("page {page_num}: {e}")))?;
        text.push_str(&page_text);
        if !text.ends_with('\n') {
            text.push('\n');
        }
    }
    Ok(text)
}

/// An unencrypted document is always extractable. An encrypted one is only
/// extractable when its /P flags carry the extract bit.
fn extraction_allowed(doc: &Document) -> bool {
    let encrypt = match doc.trailer.get(b"Encrypt") {
        Ok(obj) => obj,
        Err(_) => return true,
    };
    let dict = match encrypt {
        Object::Dictionary(d) => d,
        Object::Reference(id) => match doc.get_object(*id).and_then(|o| o.as_dict()) {
            Ok(d) => d,
            Err(_) => return true,
        },
        _ => return true,
    };
    match dict.get(b"P").and_then(|p| p.as_i64()) {
        Ok(flags) => flags & EXTRACT_PERMISSION != 0,
        Err(_) => true,
    }
}
