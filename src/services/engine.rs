use std::sync::Arc;

use crate::{
    config::Config,
    models::Recommendation,
    services::{
        catalog::Catalog,
        extractor, prompt,
        providers::{CompletionProvider, TogetherProvider},
    },
};

/// How a recommendation attempt ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Success(Vec<Recommendation>),
    NoCredential,
    InvocationFailed,
    ExtractionFailed,
}

impl Outcome {
    /// The catalog substituted for this outcome, if any
    pub fn fallback(&self) -> Option<Catalog> {
        match self {
            Outcome::Success(_) => None,
            Outcome::NoCredential => Some(Catalog::Offline),
            Outcome::InvocationFailed => Some(Catalog::Unreachable),
            Outcome::ExtractionFailed => Some(Catalog::Unparsable),
        }
    }

    pub fn into_recommendations(self) -> Vec<Recommendation> {
        match self {
            Outcome::Success(recommendations) => recommendations,
            failed => failed
                .fallback()
                .map(|catalog| catalog.recommendations())
                .unwrap_or_default(),
        }
    }
}

/// Turns a vibe into movie recommendations via the language model
///
/// Never fails: configuration, model and parsing problems each degrade to their own
/// fallback catalog.
#[derive(Clone)]
pub struct RecommendationEngine {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl RecommendationEngine {
    /// Engine backed by `provider`; `None` means no model credential is configured
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider = config.model_credential().map(|api_key| {
            Arc::new(TogetherProvider::new(
                api_key.to_string(),
                config.together_api_url.clone(),
                config.together_model.clone(),
            )) as Arc<dyn CompletionProvider>
        });

        Self::new(provider)
    }

    pub async fn get_recommendations(&self, vibe: Option<&str>) -> Vec<Recommendation> {
        let outcome = self.run(vibe).await;

        if let Some(catalog) = outcome.fallback() {
            tracing::info!(catalog = catalog.name(), "Serving fallback catalog");
        }

        outcome.into_recommendations()
    }

    /// Walks prompt → model → extraction, stopping at the first failure
    pub async fn run(&self, vibe: Option<&str>) -> Outcome {
        let Some(provider) = self.provider.as_ref() else {
            tracing::warn!("No model credential configured");
            return Outcome::NoCredential;
        };

        let prompt = prompt::build(vibe);
        tracing::info!(
            user_prompt = %prompt.user,
            provider = provider.name(),
            "Requesting recommendations from model"
        );

        let raw = match provider.complete(&prompt.system, &prompt.user).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(error = %e, provider = provider.name(), "Model invocation failed");
                return Outcome::InvocationFailed;
            }
        };

        tracing::debug!(output = %raw, "Raw model output");

        match extractor::extract(&raw) {
            Ok(recommendations) => {
                tracing::info!(count = recommendations.len(), "Model recommendations parsed");
                Outcome::Success(recommendations)
            }
            Err(e) => {
                tracing::error!(error = %e, "Model output extraction failed");
                Outcome::ExtractionFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockCompletionProvider;

    const VALID_OUTPUT: &str = r#"Here you go:
    [
        {"title": "Blade Runner", "year": "1982", "reason": "Rain and neon"},
        {"title": "Akira", "year": "1988", "reason": "Neo-Tokyo"},
        {"title": "Ghost in the Shell", "year": "1995", "reason": "Cyber identity"},
        {"title": "The Matrix", "year": "1999", "reason": "Simulated worlds"},
        {"title": "Tron: Legacy", "year": "2010", "reason": "Glowing grids"},
        {"title": "Dredd", "year": "2012", "reason": "Neon violence"},
    ]"#;

    fn engine_returning(result: fn() -> Result<String, AppError>) -> RecommendationEngine {
        let mut mock = MockCompletionProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete().returning(move |_, _| result());
        RecommendationEngine::new(Some(Arc::new(mock)))
    }

    #[tokio::test]
    async fn test_no_credential_serves_offline_catalog() {
        let engine = RecommendationEngine::new(None);
        assert_eq!(engine.run(Some("noir")).await, Outcome::NoCredential);

        let recs = engine.get_recommendations(Some("noir")).await;
        assert_eq!(recs, Catalog::Offline.recommendations());
        assert_eq!(recs[0].title, "In the Mood for Love");
    }

    #[tokio::test]
    async fn test_from_config_without_key_is_offline() {
        let engine = RecommendationEngine::from_config(&Config::default());
        assert_eq!(engine.run(None).await, Outcome::NoCredential);
    }

    #[tokio::test]
    async fn test_invocation_failure_serves_unreachable_catalog() {
        let engine = engine_returning(|| Err(AppError::ModelInvocation("quota".to_string())));
        let recs = engine.get_recommendations(Some("noir")).await;
        assert_eq!(recs, Catalog::Unreachable.recommendations());
        assert_eq!(recs[0].title, "Parasite");
    }

    #[tokio::test]
    async fn test_unparsable_output_serves_unparsable_catalog() {
        let engine = engine_returning(|| Ok("I'd rather not pick movies today.".to_string()));
        let recs = engine.get_recommendations(Some("noir")).await;
        assert_eq!(recs, Catalog::Unparsable.recommendations());
        assert_eq!(recs[0].title, "Everything Everywhere All At Once");
    }

    #[tokio::test]
    async fn test_valid_output_is_returned_verbatim() {
        let engine = engine_returning(|| Ok(VALID_OUTPUT.to_string()));
        let recs = engine.get_recommendations(Some("dreamy neon cyberpunk")).await;
        assert_eq!(recs.len(), 6);
        assert_eq!(recs[0].title, "Blade Runner");
        assert_eq!(recs[5].title, "Dredd");
    }

    #[tokio::test]
    async fn test_parsed_list_is_not_resized() {
        let engine = engine_returning(|| Ok(r#"[{"title": "Heat"}]"#.to_string()));
        let outcome = engine.run(None).await;
        assert_eq!(
            outcome,
            Outcome::Success(vec![Recommendation {
                title: "Heat".to_string(),
                year: None,
                reason: String::new(),
            }])
        );
    }

    #[tokio::test]
    async fn test_prompts_are_passed_to_provider() {
        let mut mock = MockCompletionProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .withf(|system, user| {
                system.contains("VibeAlchemy Engine")
                    && *user == format!("Find movies with this vibe: {}", prompt::DEFAULT_VIBE)
            })
            .times(1)
            .returning(|_, _| Ok("[]".to_string()));

        let engine = RecommendationEngine::new(Some(Arc::new(mock)));
        assert_eq!(engine.run(Some("")).await, Outcome::Success(vec![]));
    }

    #[tokio::test]
    async fn test_every_failure_yields_six_entries() {
        let engines = vec![
            RecommendationEngine::new(None),
            engine_returning(|| Err(AppError::ModelInvocation("timeout".to_string()))),
            engine_returning(|| Ok("[[".to_string())),
            engine_returning(|| Ok("[not json]".to_string())),
        ];

        for engine in engines {
            for vibe in [None, Some(""), Some("minecraft,cars")] {
                assert_eq!(engine.clone().get_recommendations(vibe).await.len(), 6);
            }
        }
    }
}
