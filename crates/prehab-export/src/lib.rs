//! prehab-export
//!
//! Personalized document generation: assembles the printable guides and
//! screening-result reports into paginated A4 PDFs. Content selection,
//! layout, and rendering are separate stages — content and layout are pure
//! and fully testable without touching the PDF backend.

pub mod content;
pub mod error;
pub mod layout;
mod pdf;

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use content::PersonalizedContent;
use error::ExportError;
use layout::{LayoutOptions, PaginatedDocument};

/// The printable documents the app offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    ExercisePlan,
    NutritionPlan,
    MentalWellbeing,
    SubstancePlan,
    DiseaseManagement,
    AlcoholTest,
    SmokingTest,
    SubstanceTest,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 8] = [
        DocumentKind::ExercisePlan,
        DocumentKind::NutritionPlan,
        DocumentKind::MentalWellbeing,
        DocumentKind::SubstancePlan,
        DocumentKind::DiseaseManagement,
        DocumentKind::AlcoholTest,
        DocumentKind::SmokingTest,
        DocumentKind::SubstanceTest,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        DocumentKind::ALL.iter().copied().find(|k| k.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            DocumentKind::ExercisePlan => "exercise-plan",
            DocumentKind::NutritionPlan => "nutrition-plan",
            DocumentKind::MentalWellbeing => "mental-wellbeing",
            DocumentKind::SubstancePlan => "substance-plan",
            DocumentKind::DiseaseManagement => "disease-management",
            DocumentKind::AlcoholTest => "alcohol-test",
            DocumentKind::SmokingTest => "smoking-test",
            DocumentKind::SubstanceTest => "substance-test",
        }
    }

    /// Document title, also the first heading on the page.
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::ExercisePlan => "Liikuntasuunnitelma",
            DocumentKind::NutritionPlan => "Ravitsemussuunnitelma",
            DocumentKind::MentalWellbeing => "Henkisen jaksamisen opas",
            DocumentKind::SubstancePlan => "Päihteiden käytön vähentämissuunnitelma",
            DocumentKind::DiseaseManagement => "Sairauksien hallintasuunnitelma",
            DocumentKind::AlcoholTest => "AUDIT-testin tulokset",
            DocumentKind::SmokingTest => "Tupakkariippuvuustestin tulokset",
            DocumentKind::SubstanceTest => "Huumausainetestin tulokset",
        }
    }
}

/// Lay out one document with the given creation-stamp date (d.m.yyyy).
pub fn assemble(
    kind: DocumentKind,
    personalized: &PersonalizedContent,
    creation_date: &str,
) -> PaginatedDocument {
    let blocks = content::document_blocks(kind, personalized, creation_date);
    layout::paginate(kind.title(), &blocks, &LayoutOptions::default())
}

/// A rendered document ready to hand to the user.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

fn filename(kind: DocumentKind) -> String {
    format!(
        "{}_{}.pdf",
        kind.id().replace('-', "_"),
        jiff::Timestamp::now().as_millisecond()
    )
}

fn creation_date() -> String {
    let date = jiff::Zoned::now().date();
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// Assemble and render one document.
pub fn export_document(
    kind: DocumentKind,
    personalized: &PersonalizedContent,
) -> Result<ExportedDocument, ExportError> {
    let document = assemble(kind, personalized, &creation_date());
    let bytes = pdf::render(&document)?;
    debug!(
        kind = kind.id(),
        pages = document.pages.len(),
        bytes = bytes.len(),
        "document rendered"
    );
    Ok(ExportedDocument {
        filename: filename(kind),
        bytes,
        page_count: document.pages.len(),
    })
}

/// Outcome of a save attempt. Failures are reported, not raised — the
/// caller shows the result either way.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub success: bool,
    pub path: Option<PathBuf>,
    pub error: Option<String>,
}

/// Export `kind` and write it into `dir`.
pub fn save_document(
    kind: DocumentKind,
    personalized: &PersonalizedContent,
    dir: &Path,
) -> ExportReport {
    let attempt = export_document(kind, personalized).and_then(|doc| {
        let path = dir.join(&doc.filename);
        std::fs::write(&path, &doc.bytes)?;
        Ok(path)
    });
    match attempt {
        Ok(path) => ExportReport { success: true, path: Some(path), error: None },
        Err(e) => {
            error!(kind = kind.id(), error = %e, "document export failed");
            ExportReport { success: false, path: None, error: Some(e.to_string()) }
        }
    }
}
