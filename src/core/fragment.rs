use super::settings::Settings;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

pub const MSG_IMPORT_OK: &str = "Settings imported from URL!";
pub const MSG_IMPORT_FAILED: &str = "Failed to import settings from URL!";

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("fragment is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("fragment is not a settings record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} is not a finite value within its slider range")]
    OutOfRange(&'static str),
}

// Everything `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `input` the way `encodeURIComponent` does.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Inverse of [`percent_encode`]. Invalid escapes are kept as literal text.
pub fn percent_decode(input: &str) -> Result<String, FragmentError> {
    Ok(percent_decode_str(input).decode_utf8()?.into_owned())
}

/// Fragment text (without the leading `#`) for `settings`.
pub fn encode(settings: &Settings) -> String {
    // Serializing a struct of plain f64 fields cannot fail.
    let json = serde_json::to_string(settings).unwrap_or_default();
    percent_encode(&json)
}

/// Parse a location hash; a leading `#` is optional.
///
/// A shared link is untrusted, so every value must be finite and inside its
/// slider bounds.
pub fn decode(hash: &str) -> Result<Settings, FragmentError> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let json = percent_decode(raw)?;
    let settings: Settings = serde_json::from_str(&json)?;
    match settings.first_out_of_bounds() {
        Some(param) => Err(FragmentError::OutOfRange(param.key())),
        None => Ok(settings),
    }
}

/// Result of applying a location hash at load time.
#[derive(Debug)]
pub struct ImportOutcome {
    pub settings: Settings,
    pub message: &'static str,
    pub error: Option<FragmentError>,
}

/// Settings to use after reading `hash`, plus the notification to show.
/// A rejected fragment keeps `current`. Returns `None` when there is no
/// fragment at all.
pub fn import(hash: &str, current: Settings) -> Option<ImportOutcome> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    if raw.is_empty() {
        return None;
    }
    Some(match decode(raw) {
        Ok(settings) => ImportOutcome {
            settings,
            message: MSG_IMPORT_OK,
            error: None,
        },
        Err(e) => ImportOutcome {
            settings: current,
            message: MSG_IMPORT_FAILED,
            error: Some(e),
        },
    })
}

/// Absolute URL that restores `settings` when opened.
pub fn share_url(origin: &str, pathname: &str, settings: &Settings) -> String {
    format!("{}{}#{}", origin, pathname, encode(settings))
}
