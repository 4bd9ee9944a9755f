// src/models/question.rs

use std::collections::HashMap;

use serde::Serialize;

/// Question kind, decided by how many labels follow `ANSWER:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multiple,
}

impl QuestionKind {
    pub fn from_label_count(count: usize) -> Self {
        if count == 1 {
            QuestionKind::Single
        } else {
            QuestionKind::Multiple
        }
    }
}

/// One question parsed from an Aiken-style bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    /// Sequential id in file order, starting at 1.
    pub id: u32,

    pub prompt: String,

    /// Choice texts; position 0 is label "A", 1 is "B", and so on.
    pub choices: Vec<String>,

    /// Labels listed after `ANSWER:`, trimmed but otherwise as written.
    pub correct_answers: Vec<String>,

    pub kind: QuestionKind,
}

impl QuestionRecord {
    /// Label for the choice at `index` (0 => 'A').
    pub fn label_for(index: usize) -> Option<char> {
        u32::try_from(index)
            .ok()
            .and_then(|i| char::from_u32('A' as u32 + i))
    }

    /// Choices paired with their labels, in order.
    pub fn labelled_choices(&self) -> impl Iterator<Item = (char, &str)> {
        self.choices
            .iter()
            .enumerate()
            .filter_map(|(i, c)| Self::label_for(i).map(|l| (l, c.as_str())))
    }
}

/// Question-id to record mapping that iterates in presentation order.
///
/// Lookups by id are unaffected by the presentation order.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    records: HashMap<u32, QuestionRecord>,
    order: Vec<u32>,
}

impl QuestionBank {
    /// Builds a bank from records and a presentation order.
    /// Ids in `order` with no record are dropped.
    pub fn new(records: Vec<QuestionRecord>, order: Vec<u32>) -> Self {
        let records: HashMap<u32, QuestionRecord> =
            records.into_iter().map(|r| (r.id, r)).collect();
        let order = order
            .into_iter()
            .filter(|id| records.contains_key(id))
            .collect();
        Self { records, order }
    }

    pub fn get(&self, id: u32) -> Option<&QuestionRecord> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in presentation order.
    pub fn ids(&self) -> &[u32] {
        &self.order
    }

    /// Records in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> QuestionRecord {
        QuestionRecord {
            id,
            prompt: format!("Question {}", id),
            choices: vec!["x".to_string(), "y".to_string()],
            correct_answers: vec!["A".to_string()],
            kind: QuestionKind::Single,
        }
    }

    #[test]
    fn test_bank_iterates_in_given_order() {
        let bank = QuestionBank::new(vec![record(1), record(2), record(3)], vec![3, 1, 2]);
        let ids: Vec<u32> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(bank.get(2).map(|q| q.prompt.as_str()), Some("Question 2"));
    }

    #[test]
    fn test_bank_drops_unknown_ids_from_order() {
        let bank = QuestionBank::new(vec![record(1)], vec![7, 1]);
        assert_eq!(bank.ids(), &[1]);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(QuestionRecord::label_for(0), Some('A'));
        assert_eq!(QuestionRecord::label_for(2), Some('C'));
        let labels: Vec<char> = record(1).labelled_choices().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!['A', 'B']);
    }
}
