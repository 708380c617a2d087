//! Tutorial resource documents.
//!
//! A tutorial travels to the translation store as a single HTML document
//! embedding the subject in a `<title>` element and the body in a `<body>`
//! element. [`make_resource_document`] and [`parse_resource_document`] are
//! exact inverses for well-formed input; the parser additionally tolerates
//! bare content with the wrapper stripped, treating it as body-only.

/// Subject and body recovered from a resource document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentParts {
    pub subject: Option<String>,
    pub body: String,
}

/// Wrap a tutorial's subject and body into a single translatable document.
///
/// The inputs must not already look like a wrapped document; that would
/// mean something upstream double-wrapped, which is a programming error,
/// not a recoverable condition.
pub fn make_resource_document(title: &str, body: &str) -> String {
    assert!(
        !title.contains("<html>") && !title.contains("<body>"),
        "title already contains document wrapper markers"
    );
    assert!(
        !body.contains("<html>") && !body.contains("<body>"),
        "body already contains document wrapper markers"
    );

    format!(
        "<html>\n<head><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// Parse a resource document back into subject and body.
///
/// Content that does not start with the `<html>` marker is treated as a
/// bare body with no subject.
pub fn parse_resource_document(content: &str) -> DocumentParts {
    let content = content.trim();

    if !content.starts_with("<html>") {
        return DocumentParts {
            subject: None,
            body: content.to_string(),
        };
    }

    let subject = between(content, "<title>", "</title>").map(|s| s.trim().to_string());
    let body = between(content, "<body>", "</body>")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    DocumentParts { subject, body }
}

fn between<'a>(haystack: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = haystack.find(open)? + open.len();
    let end = haystack[start..].find(close)? + start;
    Some(&haystack[start..end])
}
