/// External collaborators of the recommendation pipeline
///
/// The language model and the poster metadata service sit behind traits so the engine
/// and the request handler can be exercised with stubs, and so another model host or
/// metadata source can be dropped in without touching the pipeline.
use crate::error::AppResult;

pub mod tmdb;
pub mod together;

pub use tmdb::TmdbPosterProvider;
pub use together::TogetherProvider;

/// A chat model that turns a system/user prompt pair into one text completion
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request a single non-streaming completion
    ///
    /// Returns the text of the first choice. Network, auth, quota and decoding failures
    /// are all reported as errors; the caller decides how to degrade.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Looks up a poster image for a movie
///
/// Implementations never fail: any lookup problem resolves to a placeholder URL.
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    async fn resolve(&self, title: &str, year: Option<&str>) -> String;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Serves `router` on an ephemeral local port and returns its base URL
#[cfg(test)]
pub(crate) async fn spawn_stub_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{}", addr)
}
