use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One stored survey answer.
///
/// Multi-select questions always carry a set, even when nothing is selected;
/// single-select questions carry exactly one option id. The untagged repr
/// keeps the JSON shape of the stored blob: arrays for multi, plain strings
/// for single.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    MultiChoice(BTreeSet<String>),
    SingleChoice(String),
}

impl Answer {
    /// Whether this answer counts toward survey completion: a non-empty
    /// selection set for multi-select, a non-empty option id for single.
    pub fn is_answered(&self) -> bool {
        match self {
            Answer::MultiChoice(selected) => !selected.is_empty(),
            Answer::SingleChoice(option) => !option.is_empty(),
        }
    }

    /// All selected option ids, regardless of question type.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::MultiChoice(selected) => selected.iter().map(String::as_str).collect(),
            Answer::SingleChoice(option) => vec![option.as_str()],
        }
    }
}

/// The user's stored questionnaire responses, keyed by question id.
pub type RawAnswers = BTreeMap<String, Answer>;

/// Count of questions with a meaningful answer.
pub fn answered_count(answers: &RawAnswers) -> usize {
    answers.values().filter(|a| a.is_answered()).count()
}

/// The union of every selected option id across all questions. Drives the
/// section-relevance intersection in the progress calculation.
pub fn flattened_values(answers: &RawAnswers) -> BTreeSet<&str> {
    answers.values().flat_map(Answer::values).collect()
}
