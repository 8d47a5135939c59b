//! The initial survey and the content-section catalogue.
//!
//! Pure static data — question ids and option ids here are the vocabulary
//! that [`crate::models::profile`] derives from.

pub struct SurveyOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct SurveyQuestion {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub multiple: bool,
    pub options: &'static [SurveyOption],
}

pub const SURVEY_QUESTIONS: &[SurveyQuestion] = &[
    SurveyQuestion {
        id: "age",
        title: "Ikäryhmä",
        description: "Valitse ikäryhmäsi",
        multiple: false,
        options: &[
            SurveyOption { id: "under_65", label: "Alle 65 vuotta" },
            SurveyOption { id: "over_65", label: "65 vuotta tai yli" },
        ],
    },
    SurveyQuestion {
        id: "lifestyle",
        title: "Elämäntavat",
        description: "Valitse kaikki sinuun sopivat vaihtoehdot",
        multiple: true,
        options: &[
            SurveyOption { id: "smoking", label: "Tupakoin" },
            SurveyOption { id: "alcohol", label: "Käytän alkoholia säännöllisesti" },
            SurveyOption { id: "substance", label: "Käytän muita päihteitä" },
            SurveyOption { id: "low_activity", label: "Liikun vähän" },
        ],
    },
    SurveyQuestion {
        id: "health_conditions",
        title: "Terveydentila",
        description: "Valitse kaikki sinuun sopivat vaihtoehdot",
        multiple: true,
        options: &[
            SurveyOption { id: "diabetes", label: "Diabetes" },
            SurveyOption { id: "sleep_apnea", label: "Uniapnea" },
            SurveyOption { id: "heart_disease", label: "Sydänsairaus" },
            SurveyOption { id: "mental_health", label: "Mielenterveyden haasteet" },
        ],
    },
];

/// A content section and the answer values that make it relevant.
/// The sentinel `"all"` marks a section relevant to everyone.
pub struct ContentSection {
    pub id: &'static str,
    pub title: &'static str,
    pub relevant_for: &'static [&'static str],
}

pub const CONTENT_SECTIONS: &[ContentSection] = &[
    ContentSection {
        id: "movement",
        title: "Liikkuminen",
        relevant_for: &["all"],
    },
    ContentSection {
        id: "nutrition",
        title: "Ravitsemus",
        relevant_for: &["all"],
    },
    ContentSection {
        id: "mental_wellbeing",
        title: "Henkinen jaksaminen",
        relevant_for: &["all", "mental_health"],
    },
    ContentSection {
        id: "substance_use",
        title: "Päihteiden käyttö",
        relevant_for: &["smoking", "alcohol", "substance"],
    },
    ContentSection {
        id: "other_diseases",
        title: "Muiden sairauksien huomiointi",
        relevant_for: &["diabetes", "sleep_apnea", "heart_disease"],
    },
];

pub const TOTAL_SECTIONS: usize = CONTENT_SECTIONS.len();

pub fn content_section(id: &str) -> Option<&'static ContentSection> {
    CONTENT_SECTIONS.iter().find(|s| s.id == id)
}
