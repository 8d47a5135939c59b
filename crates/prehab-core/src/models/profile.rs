use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::answer::{Answer, RawAnswers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Under65,
    Over65,
}

impl AgeGroup {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "under_65" => Some(AgeGroup::Under65),
            "over_65" => Some(AgeGroup::Over65),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            AgeGroup::Under65 => "under_65",
            AgeGroup::Over65 => "over_65",
        }
    }

    /// User-facing label (e.g. shown in the document header).
    pub fn display_label(self) -> &'static str {
        match self {
            AgeGroup::Under65 => "18-64 vuotta",
            AgeGroup::Over65 => "65+ vuotta",
        }
    }
}

/// Display text for an optional age group, with the "not set" fallback.
pub fn age_group_display(age_group: Option<AgeGroup>) -> &'static str {
    age_group.map_or("Ei määritelty", AgeGroup::display_label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleFactor {
    Smoking,
    Alcohol,
    Substance,
    LowActivity,
}

impl LifestyleFactor {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "smoking" => Some(LifestyleFactor::Smoking),
            "alcohol" => Some(LifestyleFactor::Alcohol),
            "substance" => Some(LifestyleFactor::Substance),
            "low_activity" => Some(LifestyleFactor::LowActivity),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            LifestyleFactor::Smoking => "smoking",
            LifestyleFactor::Alcohol => "alcohol",
            LifestyleFactor::Substance => "substance",
            LifestyleFactor::LowActivity => "low_activity",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            LifestyleFactor::Smoking => "Tupakointi",
            LifestyleFactor::Alcohol => "Alkoholin käyttö",
            LifestyleFactor::Substance => "Muiden päihteiden käyttö",
            LifestyleFactor::LowActivity => "Vähäinen liikunta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    Diabetes,
    SleepApnea,
    HeartDisease,
    MentalHealth,
}

impl HealthCondition {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "diabetes" => Some(HealthCondition::Diabetes),
            "sleep_apnea" => Some(HealthCondition::SleepApnea),
            "heart_disease" => Some(HealthCondition::HeartDisease),
            "mental_health" => Some(HealthCondition::MentalHealth),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "diabetes",
            HealthCondition::SleepApnea => "sleep_apnea",
            HealthCondition::HeartDisease => "heart_disease",
            HealthCondition::MentalHealth => "mental_health",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "Diabetes",
            HealthCondition::SleepApnea => "Uniapnea",
            HealthCondition::HeartDisease => "Sydänsairaus",
            HealthCondition::MentalHealth => "Mielenterveyden haasteet",
        }
    }
}

/// Normalized view of the stored survey answers.
///
/// Never persisted — re-derived from [`RawAnswers`] on every read so it can
/// never go stale relative to the stored blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub has_completed_survey: bool,
    pub age_group: Option<AgeGroup>,
    pub lifestyle: BTreeSet<LifestyleFactor>,
    pub health_conditions: BTreeSet<HealthCondition>,
    pub show_all_content: bool,
}

impl Default for UserProfile {
    /// The "no survey" profile: nothing known, everything shown.
    fn default() -> Self {
        UserProfile {
            has_completed_survey: false,
            age_group: None,
            lifestyle: BTreeSet::new(),
            health_conditions: BTreeSet::new(),
            show_all_content: true,
        }
    }
}

impl UserProfile {
    /// Derive a profile from stored answers. `None` (absent or unparseable
    /// blob) yields the fail-safe default. Unknown option ids are ignored.
    pub fn from_answers(answers: Option<&RawAnswers>) -> Self {
        let Some(answers) = answers else {
            return UserProfile::default();
        };

        let age_group = match answers.get("age") {
            Some(Answer::SingleChoice(id)) => AgeGroup::from_id(id),
            _ => None,
        };
        let lifestyle = match answers.get("lifestyle") {
            Some(answer) => answer
                .values()
                .iter()
                .filter_map(|id| LifestyleFactor::from_id(id))
                .collect(),
            None => BTreeSet::new(),
        };
        let health_conditions = match answers.get("health_conditions") {
            Some(answer) => answer
                .values()
                .iter()
                .filter_map(|id| HealthCondition::from_id(id))
                .collect(),
            None => BTreeSet::new(),
        };

        UserProfile {
            has_completed_survey: true,
            age_group,
            lifestyle,
            health_conditions,
            show_all_content: false,
        }
    }

    pub fn has_lifestyle_factor(&self, factor: LifestyleFactor) -> bool {
        self.lifestyle.contains(&factor)
    }

    pub fn has_health_condition(&self, condition: HealthCondition) -> bool {
        self.health_conditions.contains(&condition)
    }
}

/// Boolean visibility switches per content category.
///
/// When no survey has been completed every flag is true: showing everything
/// to an unprofiled user beats hiding guidance from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentFlags {
    pub show_all_content: bool,
    pub show_young_adult_content: bool,
    pub show_senior_content: bool,
    pub show_smoking_content: bool,
    pub show_alcohol_content: bool,
    pub show_substance_content: bool,
    pub show_exercise_content: bool,
    pub show_diabetes_content: bool,
    pub show_sleep_apnea_content: bool,
    pub show_heart_disease_content: bool,
    pub show_mental_health_content: bool,
}

impl ContentFlags {
    /// Every flag on.
    pub fn all_visible() -> Self {
        ContentFlags {
            show_all_content: true,
            show_young_adult_content: true,
            show_senior_content: true,
            show_smoking_content: true,
            show_alcohol_content: true,
            show_substance_content: true,
            show_exercise_content: true,
            show_diabetes_content: true,
            show_sleep_apnea_content: true,
            show_heart_disease_content: true,
            show_mental_health_content: true,
        }
    }

    pub fn from_profile(profile: &UserProfile) -> Self {
        if !profile.has_completed_survey {
            return ContentFlags::all_visible();
        }

        ContentFlags {
            show_all_content: false,
            show_young_adult_content: profile.age_group == Some(AgeGroup::Under65),
            show_senior_content: profile.age_group == Some(AgeGroup::Over65),
            show_smoking_content: profile.has_lifestyle_factor(LifestyleFactor::Smoking),
            show_alcohol_content: profile.has_lifestyle_factor(LifestyleFactor::Alcohol),
            show_substance_content: profile.has_lifestyle_factor(LifestyleFactor::Substance),
            // Movement guidance applies to everyone.
            show_exercise_content: true,
            show_diabetes_content: profile.has_health_condition(HealthCondition::Diabetes),
            show_sleep_apnea_content: profile.has_health_condition(HealthCondition::SleepApnea),
            show_heart_disease_content: profile.has_health_condition(HealthCondition::HeartDisease),
            show_mental_health_content: profile.has_health_condition(HealthCondition::MentalHealth),
        }
    }
}

/// Display emphasis of a content section for a profiled user.
/// Sort order: `High < Normal < NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relevance {
    High,
    Normal,
    NotApplicable,
}

/// Relevance of a content section for the given profile.
///
/// Returns `None` when personalization is inactive (no survey, or the user
/// toggled "show everything") — every section is then equally visible.
/// NotApplicable sections are never hidden, only sorted last; dimming them
/// is the presentation layer's call.
pub fn section_relevance(section_id: &str, profile: &UserProfile) -> Option<Relevance> {
    if !profile.has_completed_survey || profile.show_all_content {
        return None;
    }

    let relevance = match section_id {
        "movement" => {
            if profile.has_lifestyle_factor(LifestyleFactor::LowActivity) {
                Relevance::High
            } else {
                Relevance::Normal
            }
        }
        "nutrition" => {
            if profile.has_health_condition(HealthCondition::Diabetes)
                || profile.has_health_condition(HealthCondition::HeartDisease)
            {
                Relevance::High
            } else {
                Relevance::Normal
            }
        }
        "mental_wellbeing" => {
            if profile.has_health_condition(HealthCondition::MentalHealth) {
                Relevance::High
            } else {
                Relevance::Normal
            }
        }
        "substance_use" => {
            if !profile.has_lifestyle_factor(LifestyleFactor::Smoking)
                && !profile.has_lifestyle_factor(LifestyleFactor::Alcohol)
            {
                Relevance::NotApplicable
            } else {
                Relevance::High
            }
        }
        "other_diseases" => {
            if profile.health_conditions.is_empty() {
                Relevance::NotApplicable
            } else {
                Relevance::High
            }
        }
        _ => Relevance::Normal,
    };
    Some(relevance)
}
