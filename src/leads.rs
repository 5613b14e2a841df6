//! Lead capture. A lead is an email plus the game the visitor was generating
//! a series for; it goes to the operational log and nowhere else.

use crate::model::LeadRecord;
use chrono::Utc;
use log::info;

/// Write one structured log line for the captured lead and hand the record
/// back. No syntax validation (the client checks for "@" before posting), no
/// deduplication, no storage.
pub fn record_lead(email: &str, game: &str) -> LeadRecord {
    let record = LeadRecord {
        email: email.to_string(),
        game_of_interest: game.to_string(),
        captured_at: Utc::now(),
    };
    info!(
        "NEW LEAD CAPTURED email={} interest={} captured_at={}",
        record.email,
        record.game_of_interest,
        record.captured_at.to_rfc3339()
    );
    record
}
