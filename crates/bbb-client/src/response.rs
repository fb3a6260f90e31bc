//! Response decoding.
//!
//! The server answers every call with an XML document. Decoding checks
//! well-formedness and nothing else: each operation's fields pass through
//! to the caller as a generic element tree instead of per-operation
//! structs, so new server fields never break existing callers. Accessors
//! for the standard `<response>` envelope cover the common cases.

use crate::error::ApiError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

// =============================================================================
// Element tree
// =============================================================================

/// One element of a decoded XML response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character data directly inside this element.
    ///
    /// Surrounding whitespace is trimmed per text segment; nested elements
    /// contribute nothing.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value of the named attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text of the first child element with the given name.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlElement::text)
    }
}

// =============================================================================
// Response envelope
// =============================================================================

/// A decoded API response.
///
/// Holds the document's root element, conventionally `<response>`, plus
/// accessors for the envelope fields every operation shares. Whether a
/// `FAILED` envelope is an error is the caller's decision; decoding treats
/// both outcomes identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    root: XmlElement,
}

impl ApiResponse {
    /// The document's root element.
    #[must_use]
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Text of the envelope's `<returncode>`, when present.
    #[must_use]
    pub fn return_code(&self) -> Option<&str> {
        self.root.child_text("returncode")
    }

    /// Whether the envelope reports `SUCCESS`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.return_code() == Some("SUCCESS")
    }

    /// Text of the envelope's `<messageKey>`, when present.
    ///
    /// Failure envelopes carry a stable key (e.g., `checksumError`) that
    /// is safer to branch on than the human-readable message.
    #[must_use]
    pub fn message_key(&self) -> Option<&str> {
        self.root.child_text("messageKey")
    }

    /// Text of the envelope's `<message>`, when present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.root.child_text("message")
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes a raw response body into an [`ApiResponse`].
///
/// # Errors
///
/// - [`ApiError::EmptyResponse`] when `raw` contains no bytes beyond
///   whitespace.
/// - [`ApiError::MalformedResponse`] when `raw` is not exactly one
///   well-formed XML document.
pub fn decode(raw: &str) -> Result<ApiResponse, ApiError> {
    if raw.trim().is_empty() {
        return Err(ApiError::EmptyResponse);
    }

    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    // Open elements, innermost last. Closing an element attaches it to the
    // element below it, or makes it the root when the stack empties.
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(ApiError::MalformedResponse(
                        "content after document root".to_string(),
                    ));
                }
                stack.push(element_from_start(start)?);
            }
            Ok(Event::Empty(ref start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(ApiError::MalformedResponse(
                        "content after document root".to_string(),
                    ));
                }
                let element = element_from_start(start)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => match stack.pop() {
                Some(element) => attach(&mut stack, &mut root, element),
                None => {
                    return Err(ApiError::MalformedResponse(
                        "closing tag without opening tag".to_string(),
                    ))
                }
            },
            Ok(Event::Text(ref text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.text.push_str(&text),
                    None => {
                        return Err(ApiError::MalformedResponse(
                            "text outside document root".to_string(),
                        ))
                    }
                }
            }
            Ok(Event::CData(ref data)) => {
                let text = String::from_utf8_lossy(data).into_owned();
                match stack.last_mut() {
                    Some(parent) => parent.text.push_str(&text),
                    None => {
                        return Err(ApiError::MalformedResponse(
                            "character data outside document root".to_string(),
                        ))
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ApiError::MalformedResponse(e.to_string())),
            // Declarations, comments, processing instructions and doctypes
            // carry no response data.
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ApiError::MalformedResponse(
            "unexpected end of document".to_string(),
        ));
    }
    root.map(|root| ApiResponse { root })
        .ok_or_else(|| ApiError::MalformedResponse("no root element".to_string()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, ApiError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}
