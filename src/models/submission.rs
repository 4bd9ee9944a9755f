// src/models/submission.rs

use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

/// Participant identity echoed through the login and quiz forms.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Participant {
    #[validate(length(min = 1, max = 200, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "A valid email is required."))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Roll number is required."))]
    pub roll: String,
}

/// Login form. Fields are optional so a half-filled form still renders the quiz.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub roll: Option<String>,
}

/// One graded submission: identity plus raw answers keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRecord {
    pub participant: Participant,

    /// Key: question id as it appears in the form field name.
    /// Value: every value submitted under that name, in form order.
    pub answers: HashMap<String, Vec<String>>,
}

impl SubmissionRecord {
    /// Splits url-encoded pairs into identity fields and answers.
    /// Repeated keys accumulate; identity fields keep their first value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut name = None;
        let mut email = None;
        let mut roll = None;
        let mut answers: HashMap<String, Vec<String>> = HashMap::new();

        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "name" => {
                    name.get_or_insert(value);
                }
                "email" => {
                    email.get_or_insert(value);
                }
                "roll" => {
                    roll.get_or_insert(value);
                }
                other => answers.entry(other.to_string()).or_default().push(value),
            }
        }

        Self {
            participant: Participant {
                name: name.unwrap_or_default(),
                email: email.unwrap_or_default(),
                roll: roll.unwrap_or_default(),
            },
            answers,
        }
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(body).into_owned())
    }

    /// Answers for a question id, if any were submitted.
    pub fn answers_for(&self, question_id: u32) -> Option<&[String]> {
        self.answers
            .get(&question_id.to_string())
            .map(|v| v.as_slice())
            .filter(|v| !v.is_empty())
    }

    /// Replaces the answers recorded for a question id.
    pub fn with_answers(mut self, question_id: u32, answers: &[&str]) -> Self {
        self.answers.insert(
            question_id.to_string(),
            answers.iter().map(|a| a.to_string()).collect(),
        );
        self
    }
}
