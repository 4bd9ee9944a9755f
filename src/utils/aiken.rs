// src/utils/aiken.rs

//! Parser for Aiken-style question banks.
//!
//! ```text
//! What is the capital of France?
//! A) London
//! B) Paris
//! ANSWER: B
//! ```
//!
//! Blank lines are skipped everywhere. The first non-blank line while no
//! question is open becomes the prompt; `X)` lines add choices; an `ANSWER:`
//! line closes the question. Anything else inside an open question is
//! ignored, unless the strict parser is used.

use std::{fmt, path::Path, sync::LazyLock};

use rand::{Rng, seq::SliceRandom};
use regex::Regex;

use crate::models::question::{QuestionBank, QuestionKind, QuestionRecord};

static CHOICE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\)").expect("choice pattern is valid"));

const ANSWER_PREFIX: &str = "ANSWER:";

/// How strictly a bank is checked while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Permissive,
    Strict,
}

/// A problem found by the strict parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankIssueKind {
    /// Line inside an open question that is neither a choice nor `ANSWER:`.
    UnrecognizedLine(String),
    /// Question closed without any choices.
    NoChoices,
    /// `ANSWER:` with nothing after it.
    EmptyAnswer,
    /// Answer label that is not a letter naming one of the choices.
    UnknownLabel(String),
    /// Input ended while a question was still open.
    Unterminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankIssue {
    /// 1-based line number.
    pub line: usize,
    pub kind: BankIssueKind,
}

impl fmt::Display for BankIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BankIssueKind::UnrecognizedLine(text) => {
                write!(f, "line {}: unrecognized line {:?}", self.line, text)
            }
            BankIssueKind::NoChoices => write!(f, "line {}: question has no choices", self.line),
            BankIssueKind::EmptyAnswer => write!(f, "line {}: empty ANSWER", self.line),
            BankIssueKind::UnknownLabel(label) => {
                write!(f, "line {}: answer label {:?} names no choice", self.line, label)
            }
            BankIssueKind::Unterminated => {
                write!(f, "line {}: question has no ANSWER line", self.line)
            }
        }
    }
}

/// Every issue found by the strict parser, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankError {
    pub issues: Vec<BankIssue>,
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed question bank")?;
        for issue in &self.issues {
            write!(f, "; {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for BankError {}

/// Question being assembled.
struct OpenQuestion {
    prompt: String,
    choices: Vec<String>,
    line: usize,
}

/// Drops the first three characters (`X) `) of a choice line.
fn choice_text(line: &str) -> String {
    line.chars().skip(3).collect()
}

/// Labels after the first `:`, split on commas and trimmed.
fn answer_labels(line: &str) -> Vec<String> {
    let rest = line.split_once(':').map(|(_, rest)| rest).unwrap_or("");
    rest.trim().split(',').map(|l| l.trim().to_string()).collect()
}

fn check_labels(labels: &[String], choice_count: usize) -> Vec<BankIssueKind> {
    if labels.iter().all(|l| l.is_empty()) {
        return vec![BankIssueKind::EmptyAnswer];
    }

    labels
        .iter()
        .filter(|label| {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                    index >= choice_count
                }
                _ => true,
            }
        })
        .map(|label| BankIssueKind::UnknownLabel(label.clone()))
        .collect()
}

/// Walks the text once, returning records in file order plus any issues
/// a strict reader would report.
fn scan(text: &str) -> (Vec<QuestionRecord>, Vec<BankIssue>) {
    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut open: Option<OpenQuestion> = None;
    let mut next_id: u32 = 1;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(question) = open.as_mut() else {
            open = Some(OpenQuestion {
                prompt: line.to_string(),
                choices: Vec::new(),
                line: line_no,
            });
            continue;
        };

        if CHOICE_LINE.is_match(line) {
            question.choices.push(choice_text(line));
        } else if line.starts_with(ANSWER_PREFIX) {
            let labels = answer_labels(line);

            if question.choices.is_empty() {
                issues.push(BankIssue {
                    line: question.line,
                    kind: BankIssueKind::NoChoices,
                });
            }
            issues.extend(
                check_labels(&labels, question.choices.len())
                    .into_iter()
                    .map(|kind| BankIssue { line: line_no, kind }),
            );

            if let Some(question) = open.take() {
                records.push(QuestionRecord {
                    id: next_id,
                    prompt: question.prompt,
                    choices: question.choices,
                    kind: QuestionKind::from_label_count(labels.len()),
                    correct_answers: labels,
                });
                next_id += 1;
            }
        } else {
            issues.push(BankIssue {
                line: line_no,
                kind: BankIssueKind::UnrecognizedLine(line.to_string()),
            });
        }
    }

    if let Some(question) = open {
        issues.push(BankIssue {
            line: question.line,
            kind: BankIssueKind::Unterminated,
        });
    }

    (records, issues)
}

/// Returns `ids` in a uniformly random order drawn from `rng`.
pub fn shuffle_ids<R: Rng + ?Sized>(mut ids: Vec<u32>, rng: &mut R) -> Vec<u32> {
    ids.shuffle(rng);
    ids
}

fn into_bank<R: Rng + ?Sized>(records: Vec<QuestionRecord>, rng: &mut R) -> QuestionBank {
    let ids = records.iter().map(|r| r.id).collect();
    let order = shuffle_ids(ids, rng);
    QuestionBank::new(records, order)
}

/// Parses a bank permissively. Malformed lines are ignored and a question
/// without an `ANSWER:` line is dropped. Never fails.
pub fn parse<R: Rng + ?Sized>(text: &str, rng: &mut R) -> QuestionBank {
    let (records, issues) = scan(text);
    if !issues.is_empty() {
        tracing::debug!("Question bank has {} issue(s), parsed permissively", issues.len());
    }
    into_bank(records, rng)
}

/// [`parse`] with the thread-local random source.
pub fn parse_random(text: &str) -> QuestionBank {
    parse(text, &mut rand::thread_rng())
}

/// Parses a bank, rejecting it if any line is malformed.
pub fn parse_strict<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Result<QuestionBank, BankError> {
    let (records, issues) = scan(text);
    if !issues.is_empty() {
        return Err(BankError { issues });
    }
    Ok(into_bank(records, rng))
}

/// Reads and parses the bank at `path`.
///
/// An unreadable file yields an empty bank, in either mode; only the strict
/// mode can return an error, and only for malformed content.
pub async fn load(path: &Path, mode: ParseMode) -> Result<QuestionBank, BankError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Question bank {} not readable: {}", path.display(), e);
            return Ok(QuestionBank::default());
        }
    };

    let bank = match mode {
        ParseMode::Permissive => parse(&text, &mut rand::thread_rng()),
        ParseMode::Strict => parse_strict(&text, &mut rand::thread_rng())?,
    };
    tracing::debug!("Loaded {} question(s) from {}", bank.len(), path.display());
    Ok(bank)
}
