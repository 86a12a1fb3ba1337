use std::sync::Arc;

use crate::{
    models::{Recommendation, RecommendedMovie},
    services::{
        engine::RecommendationEngine,
        providers::{tmdb::NOT_FOUND_POSTER, PosterProvider},
    },
};

/// Recommends movies for a vibe and attaches a poster to each
///
/// Poster lookups run as one task per movie and are awaited in order, so the result
/// keeps the engine's ordering. A lookup task that dies resolves to the not-found
/// placeholder.
pub async fn get_recommendations(
    engine: &RecommendationEngine,
    posters: Arc<dyn PosterProvider>,
    vibe: Option<&str>,
) -> Vec<RecommendedMovie> {
    let recommendations = engine.get_recommendations(vibe).await;
    enrich_with_posters(posters, recommendations).await
}

/// Attaches a poster URL to every recommendation, preserving order
pub async fn enrich_with_posters(
    posters: Arc<dyn PosterProvider>,
    recommendations: Vec<Recommendation>,
) -> Vec<RecommendedMovie> {
    let tasks: Vec<_> = recommendations
        .iter()
        .map(|rec| {
            let provider = posters.clone();
            let title = rec.title.clone();
            let year = rec.year.clone();
            tokio::spawn(async move { provider.resolve(&title, year.as_deref()).await })
        })
        .collect();

    let mut movies = Vec::with_capacity(recommendations.len());

    for (rec, task) in recommendations.into_iter().zip(tasks) {
        let poster = match task.await {
            Ok(poster) => poster,
            Err(e) => {
                tracing::error!(error = %e, title = %rec.title, "Poster task join error");
                NOT_FOUND_POSTER.to_string()
            }
        };
        movies.push(rec.with_poster(poster));
    }

    tracing::info!(
        count = movies.len(),
        provider = posters.name(),
        "Recommendations enriched with posters"
    );

    movies
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Resolves to a URL derived from the title, slowest for the first entries
    struct DelayedPosters;

    #[async_trait::async_trait]
    impl PosterProvider for DelayedPosters {
        async fn resolve(&self, title: &str, year: Option<&str>) -> String {
            let delay = 60u64.saturating_sub(title.len() as u64 * 10);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            format!("https://posters.test/{}/{}", title, year.unwrap_or("none"))
        }

        fn name(&self) -> &'static str {
            "delayed"
        }
    }

    struct PanickingPosters;

    #[async_trait::async_trait]
    impl PosterProvider for PanickingPosters {
        async fn resolve(&self, title: &str, _year: Option<&str>) -> String {
            if title == "Bad" {
                panic!("lookup exploded");
            }
            format!("https://posters.test/{}", title)
        }

        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    #[tokio::test]
    async fn test_enrich_preserves_order() {
        let recs = vec![
            Recommendation::new("A", "2001", "first"),
            Recommendation::new("BB", "2002", "second"),
            Recommendation {
                title: "CCC".to_string(),
                year: None,
                reason: "third".to_string(),
            },
        ];

        let movies = enrich_with_posters(Arc::new(DelayedPosters), recs).await;

        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "BB", "CCC"]);
        assert_eq!(movies[0].poster, "https://posters.test/A/2001");
        assert_eq!(movies[2].poster, "https://posters.test/CCC/none");
        assert_eq!(movies[1].reason, "second");
    }

    #[tokio::test]
    async fn test_enrich_recovers_from_failed_task() {
        let recs = vec![
            Recommendation::new("Good", "2000", "ok"),
            Recommendation::new("Bad", "2000", "boom"),
        ];

        let movies = enrich_with_posters(Arc::new(PanickingPosters), recs).await;

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].poster, "https://posters.test/Good");
        assert_eq!(movies[1].poster, NOT_FOUND_POSTER);
    }

    #[tokio::test]
    async fn test_get_recommendations_offline_has_posters() {
        let engine = RecommendationEngine::new(None);
        let movies = get_recommendations(&engine, Arc::new(DelayedPosters), None).await;

        assert_eq!(movies.len(), 6);
        assert_eq!(movies[0].title, "In the Mood for Love");
        assert!(movies.iter().all(|m| m.poster.starts_with("https://")));
    }
}
