use crate::llm::ChatClient;
use crate::model::{GenerationRequest, SeriesBible};
use crate::prompt;
use anyhow::Result;
use log::{debug, info};

/// Turns a generation request into a series bible through exactly one
/// completion call. Stateless; no retry, no timeout beyond the transport's
/// own, no caching.
pub struct BibleProducer {
    client: Box<dyn ChatClient>,
}

impl BibleProducer {
    pub fn new(client: Box<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<SeriesBible> {
        let user = prompt::user_prompt(
            &request.game,
            &request.genre_line(),
            request.episodes,
            prompt::request_seed(),
        );
        debug!("Requesting bible: {}", user.replace('\n', " | "));

        let raw = self.client.chat_json(prompt::SYSTEM_PROMPT, &user).await?;
        let bible = crate::model::parse_bible(&raw);

        info!(
            "Generated bible \"{}\" with {} episodes for game \"{}\"",
            bible.series_title,
            bible.episodes.len(),
            request.game
        );
        Ok(bible)
    }
}
