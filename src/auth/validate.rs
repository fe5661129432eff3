use crate::messages;

/// Validate a required text field. Whitespace-only counts as empty.
pub fn validate_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(message.to_string());
    }
    None
}

/// Validate an identifier: non-empty and ASCII letters/digits only.
/// An empty id only reports `required_message`.
pub fn validate_id(value: &str, required_message: &str) -> Option<String> {
    if value.is_empty() {
        return Some(required_message.to_string());
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some(messages::ID_PATTERN.to_string());
    }
    None
}

/// Validate an absolute URL (scheme + host or opaque path, as `url` parses it).
pub fn validate_url(value: &str) -> Option<String> {
    match url::Url::parse(value.trim()) {
        Ok(_) => None,
        Err(_) => Some(messages::INVALID_URL.to_string()),
    }
}

/// Validate a required URL: reports the required message when empty,
/// the URL message otherwise.
pub fn validate_required_url(value: &str, required_message: &str) -> Option<String> {
    validate_required(value, required_message).or_else(|| validate_url(value))
}

/// Validate that an uploaded file was sent as `application/pdf`.
pub fn validate_pdf_media_type(content_type: Option<&str>) -> Option<String> {
    match content_type {
        Some(ct) if ct.trim().eq_ignore_ascii_case("application/pdf") => None,
        _ => Some(messages::PDF_REQUIRED.to_string()),
    }
}
