use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// What the UI posts to `/api/generate`. `genre` arrives already comma-joined
/// by the client; no server-side validation of ranges or non-emptiness is
/// performed here.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub episodes: u32,
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub game: String,
    pub genres: Vec<String>,
    pub episodes: u32,
}

impl GenerationRequest {
    pub fn new(game: impl Into<String>, genres: Vec<String>, episodes: u32) -> Self {
        Self {
            game: game.into(),
            genres,
            episodes,
        }
    }

    /// Comma-joined genre list as it appears in the user message.
    pub fn genre_line(&self) -> String {
        self.genres.join(", ")
    }
}

impl From<GenerateBody> for GenerationRequest {
    fn from(body: GenerateBody) -> Self {
        let genres = body
            .genre
            .split(',')
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();
        Self {
            game: body.game,
            genres,
            episodes: body.episodes,
        }
    }
}

/// The structured show concept returned by the provider. Every field is
/// defaulted: the provider promises the shape but nothing enforces it, and a
/// partial object must still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeriesBible {
    #[serde(default)]
    pub series_title: String,
    #[serde(default)]
    pub series_logline: String,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    #[serde(default)]
    pub episode_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub visual_concept: String,
    #[serde(default)]
    pub story_beat: String,
}

/// A captured email plus the game it was captured against. Ephemeral: it is
/// written to the log and never read back.
#[derive(Debug, Clone)]
pub struct LeadRecord {
    pub email: String,
    pub game_of_interest: String,
    pub captured_at: DateTime<Utc>,
}

/// Parse raw provider text into a bible. Unparseable text (including text the
/// model wrapped in Markdown fences it was told not to emit) degrades to an
/// empty bible rather than an error; the caller sees a "successful" empty
/// result, so the failure is at least logged here.
pub fn parse_bible(text: &str) -> SeriesBible {
    let clean = strip_code_blocks(text);
    match serde_json::from_str(clean) {
        Ok(bible) => bible,
        Err(e) => {
            warn!("Unparseable completion response ({}), returning empty bible", e);
            SeriesBible::default()
        }
    }
}

/// Strip a surrounding ```json ... ``` fence if present.
fn strip_code_blocks(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
