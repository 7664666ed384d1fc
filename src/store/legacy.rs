//! Legacy XML sub-document handling.
//!
//! One store key (`audioSetup`) carries a serialized XML document written
//! by earlier releases. It is kept verbatim as a string value; readers get
//! a normalized form with the XML declaration stripped, and malformed
//! content reads as absent rather than erroring.

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

/// Re-emit `raw` without its XML declaration, or `None` when the content
/// is empty or not well-formed.
pub fn normalize_xml(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut reader = Reader::from_str(trimmed);
    let mut writer = Writer::new(Vec::new());
    let mut saw_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Decl(_)) => {}
            Ok(event) => {
                if matches!(event, Event::Start(_) | Event::Empty(_)) {
                    saw_element = true;
                }
                writer.write_event(event).ok()?;
            }
            Err(e) => {
                tracing::warn!("discarding malformed legacy XML value: {e}");
                return None;
            }
        }
    }

    if !saw_element {
        return None;
    }
    String::from_utf8(writer.into_inner()).ok()
}
