// src/utils/grading.rs

use crate::models::{
    question::{QuestionBank, QuestionKind, QuestionRecord},
    submission::SubmissionRecord,
};

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Maps a submitted choice text (e.g. "Paris") to its label (e.g. 'B').
/// Matching ignores case and surrounding whitespace; the first equal choice wins.
pub fn resolve_label(answer: &str, choices: &[String]) -> Option<char> {
    let answer = normalize(answer);
    choices
        .iter()
        .position(|c| normalize(c) == answer)
        .and_then(QuestionRecord::label_for)
}

/// Whether the submitted answers earn the point for this question.
///
/// Single questions resolve the first answer through the choice texts.
/// Multiple questions compare the submitted values directly against the
/// labels, as a sorted list; there is no partial credit.
pub fn grade_question(record: &QuestionRecord, answers: &[String]) -> bool {
    if answers.is_empty() {
        return false;
    }

    let mut correct: Vec<String> = record.correct_answers.iter().map(|a| normalize(a)).collect();

    match record.kind {
        QuestionKind::Single => {
            let (Some(first), Some(expected)) = (answers.first(), correct.first()) else {
                return false;
            };
            match resolve_label(first, &record.choices) {
                Some(label) => label.to_lowercase().to_string() == *expected,
                None => false,
            }
        }
        QuestionKind::Multiple => {
            let mut submitted: Vec<String> = answers.iter().map(|a| normalize(a)).collect();
            submitted.sort();
            correct.sort();
            submitted == correct
        }
    }
}

/// Counts the questions answered correctly: at most one point per question,
/// so the result is within `0..=bank.len()`.
///
/// Submitted ids the bank does not know are ignored, as are bank questions
/// with no submitted answer.
pub fn grade(bank: &QuestionBank, submission: &SubmissionRecord) -> u32 {
    let mut score = 0;

    for record in bank.iter() {
        let Some(answers) = submission.answers_for(record.id) else {
            continue;
        };

        let correct = grade_question(record, answers);
        tracing::debug!(
            "Question {}: answers {:?}, expected {:?}, correct: {}",
            record.id,
            answers,
            record.correct_answers,
            correct
        );
        if correct {
            score += 1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> QuestionRecord {
        QuestionRecord {
            id: 1,
            prompt: "Capital of France?".to_string(),
            choices: vec!["London".into(), "Paris".into(), "Berlin".into()],
            correct_answers: vec!["B".into()],
            kind: QuestionKind::Single,
        }
    }

    fn multiple() -> QuestionRecord {
        QuestionRecord {
            id: 2,
            prompt: "Primary colours?".to_string(),
            choices: vec!["Red".into(), "Green".into(), "Blue".into()],
            correct_answers: vec!["A".into(), "C".into()],
            kind: QuestionKind::Multiple,
        }
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![single(), multiple()], vec![2, 1])
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_resolve_label() {
        let choices = single().choices;
        assert_eq!(resolve_label("Paris", &choices), Some('B'));
        assert_eq!(resolve_label("  berlin ", &choices), Some('C'));
        assert_eq!(resolve_label("Madrid", &choices), None);
    }

    #[test]
    fn test_single_choice_text_resolves_to_label() {
        assert!(grade_question(&single(), &answers(&["Paris"])));
        assert!(grade_question(&single(), &answers(&["PARIS "])));
        assert!(!grade_question(&single(), &answers(&["Berlin"])));
    }

    #[test]
    fn test_single_unknown_text_gets_nothing() {
        assert!(!grade_question(&single(), &answers(&["Madrid"])));
    }

    #[test]
    fn test_single_label_is_not_choice_text() {
        // A bare label only scores if it happens to equal a choice text.
        assert!(!grade_question(&single(), &answers(&["B"])));
    }

    #[test]
    fn test_single_uses_first_answer_only() {
        assert!(grade_question(&single(), &answers(&["Paris", "London"])));
        assert!(!grade_question(&single(), &answers(&["London", "Paris"])));
    }

    #[test]
    fn test_multiple_sorted_equality() {
        assert!(grade_question(&multiple(), &answers(&["C", "A"])));
        assert!(grade_question(&multiple(), &answers(&["a", " c"])));
        assert!(!grade_question(&multiple(), &answers(&["A"])));
        assert!(!grade_question(&multiple(), &answers(&["A", "B", "C"])));
    }

    #[test]
    fn test_multiple_compares_labels_not_texts() {
        assert!(!grade_question(&multiple(), &answers(&["Red", "Blue"])));
    }

    #[test]
    fn test_grade_sums_points() {
        let sub = SubmissionRecord::default()
            .with_answers(1, &["Paris"])
            .with_answers(2, &["C", "A"]);
        assert_eq!(grade(&bank(), &sub), 2);
    }

    #[test]
    fn test_grade_skips_missing_and_unknown_ids() {
        let sub = SubmissionRecord::default()
            .with_answers(1, &["Paris"])
            .with_answers(99, &["A"]);
        assert_eq!(grade(&bank(), &sub), 1);
    }

    #[test]
    fn test_grade_empty_submission() {
        assert_eq!(grade(&bank(), &SubmissionRecord::default()), 0);
        assert_eq!(grade(&QuestionBank::default(), &SubmissionRecord::default()), 0);
    }

    #[test]
    fn test_grade_never_exceeds_question_count() {
        let sub = SubmissionRecord::default()
            .with_answers(1, &["Paris", "Paris", "Paris"])
            .with_answers(2, &["A", "C"]);
        let b = bank();
        assert!(grade(&b, &sub) as usize <= b.len());
    }
}
