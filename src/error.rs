/// Application-level errors
///
/// None of these reach an HTTP caller: the recommendation pipeline absorbs model
/// failures into fallback catalogs and poster failures into placeholder URLs.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Model invocation error: {0}")]
    ModelInvocation(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

pub type AppResult<T> = Result<T, AppError>;
