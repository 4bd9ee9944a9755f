// src/models/result.rs

use serde::Serialize;

use crate::models::submission::Participant;

/// Column titles written once at the top of the results sheet.
pub const RESULT_HEADERS: [&str; 4] = ["Name", "Email", "Roll No", "Score"];

/// One persisted result. Append-only; repeated submissions are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub email: String,
    pub roll: String,
    pub score: u32,
}

impl ResultRow {
    pub fn new(participant: &Participant, score: u32) -> Self {
        Self {
            name: participant.name.clone(),
            email: participant.email.clone(),
            roll: participant.roll.clone(),
            score,
        }
    }
}
