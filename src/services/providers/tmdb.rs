/// TMDB poster provider
///
/// Searches `/search/movie` by title (and year when known) and composes the first hit's
/// `poster_path` into an image URL. Every failure resolves to a placeholder image.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::TmdbSearchResponse,
    services::providers::PosterProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Returned when no TMDB key is configured
pub const NO_KEY_POSTER: &str = "https://via.placeholder.com/300x450?text=No+TMDB+Key";

/// Returned when the lookup failed or found nothing
pub const NOT_FOUND_POSTER: &str = "https://via.placeholder.com/300x450?text=Poster+Not+Found";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Clone)]
pub struct TmdbPosterProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    image_url: String,
    timeout: Duration,
}

impl TmdbPosterProvider {
    pub fn new(
        api_key: Option<String>,
        api_url: String,
        image_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            image_url,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tmdb_credential().map(str::to_string),
            config.tmdb_api_url.clone(),
            config.tmdb_image_url.clone(),
            Duration::from_secs(config.poster_timeout_secs),
        )
    }

    fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_url.trim_end_matches('/'), poster_path)
    }

    /// Poster path of the first search result, if any
    async fn search_poster_path(
        &self,
        api_key: &str,
        title: &str,
        year: Option<&str>,
    ) -> AppResult<Option<String>> {
        let url = format!("{}/search/movie", self.api_url.trim_end_matches('/'));

        let mut query = vec![("api_key", api_key), ("query", title)];
        if let Some(year) = year.filter(|y| !y.is_empty()) {
            query.push(("year", year));
        }

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&query)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let search: TmdbSearchResponse = response.json().await?;

        Ok(search
            .results
            .into_iter()
            .next()
            .and_then(|movie| movie.poster_path))
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterProvider {
    async fn resolve(&self, title: &str, year: Option<&str>) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return NO_KEY_POSTER.to_string();
        };

        match self.search_poster_path(api_key, title, year).await {
            Ok(Some(path)) => self.poster_url(&path),
            Ok(None) => {
                tracing::debug!(title = %title, provider = self.name(), "No poster found");
                NOT_FOUND_POSTER.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    title = %title,
                    provider = self.name(),
                    "Poster lookup failed"
                );
                NOT_FOUND_POSTER.to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
