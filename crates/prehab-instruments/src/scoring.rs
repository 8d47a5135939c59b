use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::InstrumentError;

/// A yes/no selection, stored in the answer set as the Finnish literals
/// `"kyllä"` / `"ei"` the forms use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "kyllä")]
    Yes,
    #[serde(rename = "ei")]
    No,
}

impl YesNo {
    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Kyllä",
            YesNo::No => "Ei",
        }
    }
}

/// One recorded answer: either the point value of a selected scale option,
/// or a yes/no choice. Untagged, so the stored JSON stays a bare number or
/// the literal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestAnswer {
    Points(u8),
    Choice(YesNo),
}

/// One selectable option of a scale item. The point value doubles as the
/// stored answer value.
#[derive(Debug, Clone, Copy)]
pub struct ScaleOption {
    pub label: &'static str,
    pub points: u8,
}

/// How an item converts its answer into points. Declarative so that
/// exceptions — the two inverted yes/no items in the substance screen —
/// are visible data rather than a hidden branch.
#[derive(Debug, Clone, Copy)]
pub enum ItemRule {
    /// The selected option's value is the score.
    Scale(&'static [ScaleOption]),
    /// One point when the answer equals `scores_on`, zero otherwise.
    YesNo { scores_on: YesNo },
}

/// A single instrument item.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub id: u32,
    pub text: &'static str,
    pub rule: ItemRule,
}

impl Item {
    /// Points contributed by `answer`, or an error when the answer does not
    /// fit this item's rule.
    pub fn score(&self, answer: &TestAnswer) -> Result<u8, InstrumentError> {
        match (&self.rule, answer) {
            (ItemRule::Scale(options), TestAnswer::Points(points)) => {
                if options.iter().any(|o| o.points == *points) {
                    Ok(*points)
                } else {
                    Err(InstrumentError::InvalidAnswer {
                        item_id: self.id,
                        reason: format!("{points} is not a valid option value"),
                    })
                }
            }
            (ItemRule::YesNo { scores_on }, TestAnswer::Choice(choice)) => {
                Ok(u8::from(choice == scores_on))
            }
            _ => Err(InstrumentError::InvalidAnswer {
                item_id: self.id,
                reason: "answer type does not match the item".to_string(),
            }),
        }
    }

    /// Human-readable label of the selected option, for the answers echo on
    /// result documents. `None` when the answer does not match any option.
    pub fn selected_label(&self, answer: &TestAnswer) -> Option<&'static str> {
        match (&self.rule, answer) {
            (ItemRule::Scale(options), TestAnswer::Points(points)) => options
                .iter()
                .find(|o| o.points == *points)
                .map(|o| o.label),
            (ItemRule::YesNo { .. }, TestAnswer::Choice(choice)) => Some(choice.label()),
            _ => None,
        }
    }
}

/// A result tier: the headline and the guidance text shown with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub title: &'static str,
    pub description: &'static str,
}

/// One completed screening-test submission. Entries accumulate in an
/// append-only per-instrument history and are never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub score: u32,
    pub date: jiff::Timestamp,
    pub answers: BTreeMap<u32, TestAnswer>,
}
