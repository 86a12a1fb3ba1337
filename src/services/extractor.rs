/// Pulls the recommendation list out of free-form model output
///
/// Models wrap their answer in commentary, markdown fences or "thinking" text, so the
/// extractor locates the first `[`, follows bracket depth to its matching `]`, strips
/// trailing commas before `]`, and parses only that slice.
use regex::Regex;
use std::sync::LazyLock;

use crate::models::Recommendation;

/// A comma whose next non-whitespace character closes an array
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\]").expect("valid trailing comma regex"));

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no '[' found in model output")]
    NoArrayStart,

    #[error("no matching ']' found in model output")]
    UnmatchedBrackets,

    #[error("array is not valid recommendation JSON: {0}")]
    MalformedJson(String),
}

/// Parses the first top-level JSON array in `raw` into recommendations
pub fn extract(raw: &str) -> Result<Vec<Recommendation>, ExtractionError> {
    let candidate = first_array(raw)?;
    let repaired = TRAILING_COMMA.replace_all(candidate, "]");

    serde_json::from_str(&repaired).map_err(|e| ExtractionError::MalformedJson(e.to_string()))
}

/// Slice from the first `[` through its matching `]`
fn first_array(raw: &str) -> Result<&str, ExtractionError> {
    let start = raw.find('[').ok_or(ExtractionError::NoArrayStart)?;

    let mut depth: usize = 0;
    for (offset, ch) in raw[start..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&raw[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractionError::UnmatchedBrackets)
}
