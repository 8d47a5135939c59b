//! Derived guidance: categorized recommendations, risk factors, and the
//! engagement summary.

use serde::Serialize;

use prehab_core::models::profile::{AgeGroup, HealthCondition, LifestyleFactor, UserProfile};
use prehab_core::models::records::{ProgressRecord, SurveyRecord, VisitedSectionsRecord};
use prehab_storage::store::KeyValueStore;
use prehab_storage::{keys, state};

use crate::progress::{completion_percentage, visited_sections};

/// Personalized recommendations, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub priority: Vec<&'static str>,
    pub exercise: Vec<&'static str>,
    pub nutrition: Vec<&'static str>,
    pub lifestyle: Vec<&'static str>,
    pub medical: Vec<&'static str>,
}

pub fn recommendations(profile: &UserProfile) -> Recommendations {
    let mut recs = Recommendations::default();

    match profile.age_group {
        Some(AgeGroup::Over65) => {
            recs.exercise.push("Tasapaino- ja voimaharjoittelu");
            recs.nutrition.push("Riittävä proteiinin saanti");
            recs.priority.push("Kaatumisen ehkäisy");
        }
        Some(AgeGroup::Under65) => {
            recs.exercise.push("Kestävyys- ja lihaskuntoharjoittelu");
            recs.nutrition.push("Monipuolinen ruokavalio");
        }
        None => {}
    }

    if profile.has_lifestyle_factor(LifestyleFactor::Smoking) {
        recs.lifestyle.push("Tupakoinnin lopettaminen");
        recs.priority.push("Nikotiinikorvaushoito");
    }
    if profile.has_lifestyle_factor(LifestyleFactor::Alcohol) {
        recs.lifestyle.push("Alkoholin käytön vähentäminen");
    }
    if profile.has_lifestyle_factor(LifestyleFactor::LowActivity) {
        recs.priority.push("Liikunnan lisääminen asteittain");
        recs.exercise.push("Aloita kevyellä liikunnalla");
    }

    if profile.has_health_condition(HealthCondition::Diabetes) {
        recs.medical.push("Verensokerin seuranta");
        recs.nutrition.push("Hiilihydraattien hallinta");
    }
    if profile.has_health_condition(HealthCondition::SleepApnea) {
        recs.medical.push("CPAP-laitteen käyttö");
        recs.lifestyle.push("Painonhallinta");
    }
    if profile.has_health_condition(HealthCondition::HeartDisease) {
        recs.medical.push("Verenpaineen seuranta");
        recs.nutrition.push("Vähäsuolainen ruokavalio");
    }
    if profile.has_health_condition(HealthCondition::MentalHealth) {
        recs.lifestyle.push("Stressinhallinta");
        recs.priority.push("Mielenterveyden tuki");
    }

    recs
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub factor: &'static str,
    pub level: RiskLevel,
}

/// Risk factors identified from the profile, with severity.
pub fn risk_factors(profile: &UserProfile) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    match profile.age_group {
        Some(AgeGroup::Under65) => {
            factors.push(RiskFactor { factor: "Ikä alle 65 vuotta", level: RiskLevel::Medium });
        }
        Some(AgeGroup::Over65) => {
            factors.push(RiskFactor { factor: "Ikä yli 65 vuotta", level: RiskLevel::Medium });
        }
        None => {}
    }

    if profile.has_lifestyle_factor(LifestyleFactor::Smoking) {
        factors.push(RiskFactor { factor: "Tupakointi", level: RiskLevel::High });
    }
    if profile.has_lifestyle_factor(LifestyleFactor::Alcohol) {
        factors.push(RiskFactor { factor: "Alkoholin käyttö", level: RiskLevel::Medium });
    }
    if profile.has_lifestyle_factor(LifestyleFactor::LowActivity) {
        factors.push(RiskFactor { factor: "Vähäinen liikunta", level: RiskLevel::Medium });
    }

    for condition in &profile.health_conditions {
        let (factor, level) = match condition {
            HealthCondition::Diabetes => ("Diabetes", RiskLevel::High),
            HealthCondition::SleepApnea => ("Uniapnea", RiskLevel::Medium),
            HealthCondition::HeartDisease => ("Sydänsairaus", RiskLevel::High),
            HealthCondition::MentalHealth => ("Mielenterveyden haasteet", RiskLevel::Medium),
        };
        factors.push(RiskFactor { factor, level });
    }

    factors
}

/// High-level engagement summary across all stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserJourney {
    pub start_date: Option<jiff::Timestamp>,
    pub last_activity: Option<jiff::Timestamp>,
    pub completion_percentage: u8,
    pub sections_visited: usize,
    pub survey_completed: bool,
}

pub fn user_journey(store: &dyn KeyValueStore) -> UserJourney {
    let survey: Option<SurveyRecord> = state::load_state(store, keys::SURVEY_ANSWERS);
    let progress: Option<ProgressRecord> = state::load_state(store, keys::PROGRESS);
    let visited: Option<VisitedSectionsRecord> = state::load_state(store, keys::VISITED_SECTIONS);

    let mut timestamps: Vec<jiff::Timestamp> = Vec::new();
    if let Some(record) = &survey {
        timestamps.push(record.timestamp);
    }
    if let Some(record) = &progress {
        timestamps.push(record.last_updated);
    }
    if let Some(record) = &visited {
        timestamps.push(record.last_updated);
    }

    UserJourney {
        start_date: timestamps.iter().min().copied(),
        last_activity: timestamps.iter().max().copied(),
        completion_percentage: completion_percentage(store),
        sections_visited: visited_sections(store).len(),
        survey_completed: survey.is_some(),
    }
}
