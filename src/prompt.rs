//! Prompt blocks sent to the completion provider.
//!
//! The system directive is a fixed constant: the provider contract depends on
//! it being byte-identical across requests, with all per-request variation
//! confined to the user message.

use chrono::Utc;

pub const SYSTEM_PROMPT: &str = r#"
### ROLE ###
You are MrBeast's Lead Producer and a Master Storyteller.

### THE GOAL ###
Create a UNIQUE serialized YouTube gaming story arc.
You must strictly blend ALL selected genres into the narrative.
Every episode must end on a high-stakes "Cliffhanger".

### CRITICAL INSTRUCTIONS ###
1. **Genre Blending:** If the user selects "Horror" and "Comedy", the story MUST be scary but funny. If "Action" and "Documentary", it must feel like a war reporter log.
2. **Uniqueness:** Never repeat generic storylines. Create specific, weird, and novel challenges for the game provided.
3. **Structure:** The story must have a clear Beginning, Middle, and Climax.

### OUTPUT FORMAT (Strict JSON) ###
Return ONLY valid JSON. No intro text.
{
  "series_title": "A viral, clickbait title for the playlist",
  "series_logline": "A one-sentence hook explaining the unique challenge and how it fits the genres.",
  "episodes": [
    {
      "episode_number": 1,
      "title": "Viral Clickbait Title",
      "visual_concept": "Detailed description of thumbnail visual (Mention specific game elements)",
      "story_beat": "Plot summary ending on cliffhanger"
    }
  ]
}
"#;

/// Wall-clock token embedded in each user message. Its only purpose is to
/// defeat response caching on the provider side, so two otherwise identical
/// requests still yield different stories.
pub fn request_seed() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn user_prompt(game: &str, genre_line: &str, episodes: u32, seed: i64) -> String {
    format!(
        "Game: {}\n\
         Selected Genres: {} (IMPORTANT: Blend these genres together)\n\
         Episode Count: {}\n\
         Unique Request ID: {}",
        game, genre_line, episodes, seed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_system_prompt_covers_the_contract() {
        assert!(SYSTEM_PROMPT.contains("blend ALL selected genres"));
        assert!(SYSTEM_PROMPT.contains("Cliffhanger"));
        assert!(SYSTEM_PROMPT.contains("Beginning, Middle, and Climax"));
        assert!(SYSTEM_PROMPT.contains("\"series_title\""));
        assert!(SYSTEM_PROMPT.contains("\"episode_number\""));
        assert!(SYSTEM_PROMPT.contains("\"visual_concept\""));
        assert!(SYSTEM_PROMPT.contains("\"story_beat\""));
    }

    #[test]
    fn test_user_prompt_carries_literal_inputs() {
        let prompt = user_prompt("Minecraft", "Horror, Comedy", 7, 1234);
        assert!(prompt.contains("Game: Minecraft"));
        assert!(prompt.contains("Horror, Comedy"));
        assert!(prompt.contains("Episode Count: 7"));
        assert!(prompt.contains("Unique Request ID: 1234"));
    }

    #[test]
    fn test_seed_moves_with_wall_clock() {
        let first = request_seed();
        thread::sleep(Duration::from_millis(5));
        let second = request_seed();
        assert!(second > first);
    }

    #[test]
    fn test_seed_ignores_request_content() {
        // Same inputs, different seeds: variation comes from the clock only.
        let a = user_prompt("Minecraft", "Action", 5, request_seed());
        thread::sleep(Duration::from_millis(5));
        let b = user_prompt("Minecraft", "Action", 5, request_seed());
        assert_ne!(a, b);
    }
}
