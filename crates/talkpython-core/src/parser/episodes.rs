//! Episodes parser for the Talk Python To Me listing
//!
//! Parses HTML from the episode table page into raw records by cell
//! position, then validates each record into an [`Episode`].

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, TalkPythonError};
use crate::types::{Episode, RawEpisode};

/// Parse the episode list from the listing page HTML.
///
/// Rows are taken from `tbody > tr` in document order and every row must
/// validate; the first bad row fails the whole parse. A page without a
/// table body yields an empty list.
///
/// # Arguments
/// * `html` - Raw HTML content of the episode listing page
/// * `base_url` - Prefix prepended to the relative episode links
///
/// # Returns
/// * `Ok(Vec<Episode>)` with validated episodes in page order
/// * `Err(TalkPythonError)` if a row cannot be extracted or validated
pub fn parse_episodes(html: &str, base_url: &str) -> Result<Vec<Episode>> {
    let document = Html::parse_document(html);
    let row_selector = selector("tbody > tr")?;

    let mut episodes = Vec::new();
    for row in document.select(&row_selector) {
        let raw = extract_episode_data(&row, base_url)?;
        episodes.push(Episode::from_raw(raw)?);
    }

    Ok(episodes)
}

/// Extract raw episode fields from a single table row by cell position.
///
/// Cell 0 is the show number (with `#` removed), cell 1 the date, cell 2
/// holds the title link, cell 3 the guest. Cells past the fourth are
/// ignored; rows with fewer cells leave the corresponding fields unset.
///
/// # Arguments
/// * `row` - A `<tr>` element of the episode table
/// * `base_url` - Prefix prepended to the relative episode links
///
/// # Returns
/// * `Ok(RawEpisode)` with the fields the row provided
/// * `Err(TalkPythonError::Extraction)` if the title cell has no usable link
pub fn extract_episode_data(row: &ElementRef, base_url: &str) -> Result<RawEpisode> {
    let cell_selector = selector("td")?;
    let link_selector = selector("a")?;

    let mut raw = RawEpisode::default();
    for (i, cell) in row.select(&cell_selector).enumerate() {
        match i {
            0 => {
                let text = cell.text().collect::<String>();
                raw.show_number = Some(text.replace('#', "").trim().to_string());
            }
            1 => {
                let text = cell.text().collect::<String>();
                raw.date = Some(text.trim().to_string());
            }
            2 => {
                let link = cell.select(&link_selector).next().ok_or_else(|| {
                    TalkPythonError::Extraction("title cell has no link".to_string())
                })?;
                let href = link.value().attr("href").ok_or_else(|| {
                    TalkPythonError::Extraction("title link has no href attribute".to_string())
                })?;

                raw.url = Some(format!("{}{}", base_url, href));
                raw.title = Some(link.text().collect::<String>().trim().to_string());
            }
            3 => {
                let text = cell.text().collect::<String>();
                raw.guest = Some(text.trim().to_string());
            }
            _ => {}
        }
    }

    Ok(raw)
}

/// Compile a CSS selector, mapping syntax errors into extraction errors.
fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|err| TalkPythonError::Extraction(format!("invalid selector `{}`: {}", css, err)))
}
