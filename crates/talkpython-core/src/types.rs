//! Data types for the TalkPython scraper
//!
//! [`RawEpisode`] is the extractor's purely syntactic output; [`Episode`]
//! is the validated domain entity. Constructing an `Episode` either
//! coerces every field or fails; there is no partially filled record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TalkPythonError};

/// Date formats accepted for the date column: ISO first, then the textual
/// forms the listing uses.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"];

/// Raw field values pulled out of one table row
///
/// A field is `None` when the row had no cell at the corresponding
/// position. No semantic checks happen at this level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEpisode {
    /// Text of the first cell with `#` characters removed
    pub show_number: Option<String>,
    /// Trimmed text of the date cell
    pub date: Option<String>,
    /// Trimmed text of the title cell's anchor
    pub title: Option<String>,
    /// Base URL concatenated with the anchor's relative href
    pub url: Option<String>,
    /// Trimmed text of the guest cell
    pub guest: Option<String>,
}

/// A validated podcast episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode number, from the `#`-prefixed first column
    pub show_number: u32,
    /// Release date
    pub date: NaiveDate,
    /// Episode title
    pub title: String,
    /// Absolute URL of the episode page
    pub url: Url,
    /// Guest featured in the episode, may be empty
    pub guest: String,
}

impl Episode {
    /// Validate a raw record into an `Episode`.
    ///
    /// Runs one validator per field and stops at the first failure, in
    /// field order: `show_number`, `date`, `title`, `url`, `guest`. An
    /// absent field fails like an invalid one.
    ///
    /// # Errors
    /// [`TalkPythonError::Validation`] tagged with the failing field name.
    pub fn from_raw(raw: RawEpisode) -> Result<Self> {
        let show_number = parse_show_number(&required(raw.show_number, "show_number")?)?;
        let date = parse_date(&required(raw.date, "date")?)?;
        let title = required(raw.title, "title")?;
        let url = parse_url(&required(raw.url, "url")?)?;
        let guest = required(raw.guest, "guest")?;

        Ok(Self {
            show_number,
            date,
            title,
            url,
            guest,
        })
    }
}

/// Unwrap a field the extractor may not have produced.
fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value.ok_or_else(|| TalkPythonError::Validation {
        field,
        message: "field is missing".to_string(),
    })
}

/// Parse the already `#`-stripped show number text as a non-negative
/// integer.
fn parse_show_number(text: &str) -> Result<u32> {
    text.trim()
        .parse()
        .map_err(|_| TalkPythonError::Validation {
            field: "show_number",
            message: format!("`{}` is not a number", text),
        })
}

/// Parse the date column text as a calendar date.
fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| TalkPythonError::Validation {
            field: "date",
            message: format!("`{}` is not a recognized date", text),
        })
}

/// Parse the constructed URL text and require an absolute http(s) URL.
fn parse_url(text: &str) -> Result<Url> {
    // A doubled scheme still parses (the second scheme text becomes the
    // host), so repeated scheme separators are rejected up front.
    if text.matches("://").count() > 1 {
        return Err(TalkPythonError::Validation {
            field: "url",
            message: format!("`{}` contains more than one scheme separator", text),
        });
    }

    let url = Url::parse(text).map_err(|err| TalkPythonError::Validation {
        field: "url",
        message: format!("`{}`: {}", text, err),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(TalkPythonError::Validation {
            field: "url",
            message: format!("`{}` is not an absolute http(s) URL", text),
        });
    }

    Ok(url)
}
