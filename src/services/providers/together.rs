/// Together AI chat completions provider
///
/// Together exposes an OpenAI-compatible `/chat/completions` endpoint; the request
/// carries the system and user prompts and asks for a single non-streaming answer.
use crate::{
    error::{AppError, AppResult},
    services::providers::CompletionProvider,
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct TogetherProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl TogetherProvider {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }

    /// Text of the first choice; a null message body counts as empty output
    fn first_choice_text(response: ChatCompletionResponse) -> AppResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| {
                AppError::ModelInvocation("Completion response contained no choices".to_string())
            })
    }
}

#[async_trait::async_trait]
impl CompletionProvider for TogetherProvider {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            stream: false,
        };

        tracing::debug!(model = %self.model, provider = self.name(), "Sending completion request");

        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ModelInvocation(format!(
                "Together API returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        Self::first_choice_text(completion)
    }

    fn name(&self) -> &'static str {
        "together"
    }
}
