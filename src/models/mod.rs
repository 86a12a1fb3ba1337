use serde::{Deserialize, Deserializer, Serialize};

/// A movie suggested for a vibe, before it has been matched to a poster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    /// Release year as the model wrote it; not validated as numeric
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reason: String,
}

impl Recommendation {
    pub fn new(title: &str, year: &str, reason: &str) -> Self {
        Self {
            title: title.to_string(),
            year: Some(year.to_string()),
            reason: reason.to_string(),
        }
    }

    /// Attaches a resolved poster URL
    pub fn with_poster(self, poster: String) -> RecommendedMovie {
        RecommendedMovie {
            title: self.title,
            year: self.year,
            reason: self.reason,
            poster,
        }
    }
}

/// A recommendation as returned to the client, always carrying a poster URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendedMovie {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub reason: String,
    pub poster: String,
}

/// Body of `POST /recommend`
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub vibe: Option<String>,
}

/// Response of `POST /recommend`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub movies: Vec<RecommendedMovie>,
}

/// Response of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response from TMDB `/search/movie`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// One TMDB search hit; only the poster path is used
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub poster_path: Option<String>,
}

// ============================================================================
// Lenient field decoding for model output
// ============================================================================

/// Scalar JSON value as the model may emit it (`"2010"` or `2010`)
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<LooseScalar> for String {
    fn from(value: LooseScalar) -> Self {
        match value {
            LooseScalar::Text(text) => text,
            LooseScalar::Number(number) => number.to_string(),
            LooseScalar::Bool(flag) => flag.to_string(),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseScalar>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_accepts_numeric_year() {
        let json = r#"{"title": "Inception", "year": 2010, "reason": "Dreams"}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.year, Some("2010".to_string()));
    }

    #[test]
    fn test_recommendation_missing_fields_are_empty() {
        let rec: Recommendation = serde_json::from_str(r#"{"title": "Her"}"#).unwrap();
        assert_eq!(rec.title, "Her");
        assert_eq!(rec.year, None);
        assert_eq!(rec.reason, "");
    }

    #[test]
    fn test_recommendation_null_fields_are_empty() {
        let json = r#"{"title": null, "year": null, "reason": null}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec, Recommendation::default());
    }

    #[test]
    fn test_recommended_movie_omits_missing_year() {
        let movie = Recommendation {
            title: "Moonlight".to_string(),
            year: None,
            reason: "Tender".to_string(),
        }
        .with_poster("https://example.test/p.jpg".to_string());

        let value = serde_json::to_value(&movie).unwrap();
        assert!(value.get("year").is_none());
        assert_eq!(value["poster"], "https://example.test/p.jpg");
    }

    #[test]
    fn test_request_tolerates_missing_vibe() {
        let req: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.vibe, None);
    }

    #[test]
    fn test_tmdb_search_response_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg"},
                {"id": 1, "title": "Other", "poster_path": null}
            ],
            "total_results": 2
        }"#;

        let response: TmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(
            response.results[0].poster_path,
            Some("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg".to_string())
        );
        assert_eq!(response.results[1].poster_path, None);
    }
}
