use anyhow::{Context, Result, anyhow};

use crate::client::{CompletionBackend, CompletionRequest};
use crate::config::TripSettings;

use super::prompt::build_prompt;
use super::types::TripRequest;

pub(crate) async fn request_plan_text(
    client: &dyn CompletionBackend,
    request: &TripRequest,
    settings: &TripSettings,
) -> Result<String> {
    request.validate()?;

    let completion_request = CompletionRequest {
        model: settings.model.clone(),
        prompt: build_prompt(request),
        max_tokens: settings.max_tokens,
        n: 1,
        stop: None,
        temperature: settings.temperature,
    };

    let response = client
        .complete(completion_request)
        .await
        .context("Travel plan generation call failed")?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Generator returned no choices"))?;

    let text = choice.text.trim();
    if text.is_empty() {
        return Err(anyhow!("Generated plan was empty"));
    }

    Ok(text.to_string())
}
