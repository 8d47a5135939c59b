//! Per-document content: builds the block list for each document kind from
//! the personalization inputs. All narrative text lives here, verbatim, so
//! the layout engine stays content-free.

use std::collections::BTreeMap;

use prehab_core::models::profile::{
    AgeGroup, HealthCondition, LifestyleFactor, UserProfile, age_group_display,
};
use prehab_instruments::ScreeningInstrument;
use prehab_instruments::instruments::{audit::Audit, fagerstrom::Fagerstrom, substance::SubstanceScreen};
use prehab_instruments::scoring::TestAnswer;

use crate::DocumentKind;
use crate::layout::Block;

/// Everything a document draws on: the profile-derived flags plus, for
/// result documents, the submission being reported.
#[derive(Debug, Clone, Default)]
pub struct PersonalizedContent {
    /// Survey completed — the header carries the personalization note.
    pub personalized: bool,
    pub age_group: Option<AgeGroup>,
    pub has_low_activity: bool,
    pub has_diabetes: bool,
    pub has_sleep_apnea: bool,
    pub has_heart_disease: bool,
    pub has_mental_health: bool,
    pub includes_smoking: bool,
    pub includes_alcohol: bool,
    pub includes_substance: bool,
    pub score: Option<u32>,
    pub answers: BTreeMap<u32, TestAnswer>,
}

impl PersonalizedContent {
    pub fn from_profile(profile: &UserProfile) -> Self {
        PersonalizedContent {
            personalized: profile.has_completed_survey,
            age_group: profile.age_group,
            has_low_activity: profile.has_lifestyle_factor(LifestyleFactor::LowActivity),
            has_diabetes: profile.has_health_condition(HealthCondition::Diabetes),
            has_sleep_apnea: profile.has_health_condition(HealthCondition::SleepApnea),
            has_heart_disease: profile.has_health_condition(HealthCondition::HeartDisease),
            has_mental_health: profile.has_health_condition(HealthCondition::MentalHealth),
            includes_smoking: profile.has_lifestyle_factor(LifestyleFactor::Smoking),
            includes_alcohol: profile.has_lifestyle_factor(LifestyleFactor::Alcohol),
            includes_substance: profile.has_lifestyle_factor(LifestyleFactor::Substance),
            score: None,
            answers: BTreeMap::new(),
        }
    }

    /// Attach the submission a result document reports on.
    pub fn with_test_result(mut self, score: u32, answers: BTreeMap<u32, TestAnswer>) -> Self {
        self.score = Some(score);
        self.answers = answers;
        self
    }
}

fn bullets(items: &[&str]) -> Block {
    Block::Bullets(items.iter().map(|s| s.to_string()).collect())
}

fn table(title: &str, headers: &[&str]) -> Block {
    Block::Table {
        title: title.to_string(),
        headers: headers.iter().map(|s| s.to_string()).collect(),
    }
}

fn header_blocks(title: &str, content: &PersonalizedContent, creation_date: &str) -> Vec<Block> {
    let mut blocks = vec![Block::Title(title.to_string())];
    if content.personalized {
        blocks.push(Block::MetaLine("Personoitu sinulle".to_string()));
        blocks.push(Block::MetaLine(format!(
            "Ikäryhmä: {}",
            age_group_display(content.age_group)
        )));
    }
    blocks.push(Block::Stamp(format!("Luotu: {creation_date}")));
    blocks.push(Block::Rule);
    blocks
}

fn exercise_plan(content: &PersonalizedContent) -> Vec<Block> {
    let mut blocks = vec![Block::Section(
        "Henkilökohtainen liikuntasuunnitelma".to_string(),
    )];
    if content.age_group == Some(AgeGroup::Over65) {
        blocks.push(Block::Topic("Ikääntyneille (65+ vuotta)".to_string()));
        blocks.push(Block::Label("Suositukset:".to_string()));
        blocks.push(bullets(&[
            "Kestävyysliikunta: 2,5 tuntia reipasta TAI 1 tunti 15 minuuttia rasittavaa liikuntaa viikossa",
            "Lihaskuntoharjoittelu: Vähintään 2 kertaa viikossa",
            "Tasapaino ja notkeus: Vähintään 2 kertaa viikossa - erityisen tärkeää kaatumisten ehkäisyssä",
        ]));
        blocks.push(Block::Label("Erityishuomiot:".to_string()));
        blocks.push(bullets(&[
            "Aloita maltillisesti ja lisää kuormitusta asteittain",
            "Tasapainoharjoitukset ovat erityisen tärkeitä",
            "Muista riittävä palautuminen harjoitusten välillä",
        ]));
    } else {
        blocks.push(Block::Topic("Työikäisille (18-64 vuotta)".to_string()));
        blocks.push(Block::Label("Suositukset:".to_string()));
        blocks.push(bullets(&[
            "Kestävyysliikunta: 2,5 tuntia reipasta TAI 1 tunti 15 minuuttia rasittavaa liikuntaa viikossa",
            "Lihaskuntoharjoittelu: Vähintään 2 kertaa viikossa, kaikki suuret lihasryhmät",
            "Tauot istumiseen: Vältä pitkiä istumisjaksoja",
        ]));
    }
    blocks.push(table(
        "Päivittäinen liikuntapäiväkirja (14 päivää)",
        &["Päivä", "Liikunnan tyyppi", "Kesto (min)", "Huomiot/Fiilis"],
    ));
    blocks
}

fn nutrition_plan() -> Vec<Block> {
    vec![
        Block::Section("Henkilökohtainen ravitsemussuunnitelma".to_string()),
        Block::Paragraph(
            "Hyvä ravitsemustila vähentää toimenpiteeseen liittyvää komplikaatioriskiä sekä \
             edistää toipumista ja kuntoutumista. Mikäli on todettu, että ravitsemustilasi ei \
             ole hyvä, aloita muutosten tekeminen heti. Ravitsemustilan kohentamiseen ei riitä \
             muutama päivä."
                .to_string(),
        ),
        Block::Label("Ruokailu".to_string()),
        bullets(&[
            "Syö säännöllisesti aamupala, lounas, päivällinen ja iltapala.",
            "Ota tarvittaessa välipaloja estääksesi tahaton laihtuminen.",
            "Koosta ateriat ja välipalat monipuolisesti lautasmallin mukaan.",
        ]),
        Block::Label("Ravintolisät".to_string()),
        Block::Paragraph(
            "Keskustele ravintolisien (esim. vitamiinit, hivenaineet) turvallisuudesta ja \
             tarpeellisuudesta hoitavan lääkärisi tai sairaanhoitajan kanssa."
                .to_string(),
        ),
        table(
            "Päivittäinen ravitsemuspäiväkirja (14 päivää)",
            &["Päivä", "Aamiainen", "Lounas", "Päivällinen", "Välipalat"],
        ),
    ]
}

fn mental_wellbeing() -> Vec<Block> {
    vec![
        Block::Section("Henkisen jaksamisen opas".to_string()),
        Block::Paragraph(
            "Sairastuminen ja tuleva toimenpide vaikuttavat arjessa selviytymiseen. Tämä \
             kaikki saattaa heikentää toiminta- ja keskittymiskykyä hetkellisesti. Mieli \
             sopeutuu muuttuneeseen elämäntilanteeseen vähitellen."
                .to_string(),
        ),
        Block::Label("Mikä auttaa sinua jaksamaan?".to_string()),
        bullets(&[
            "Puhu läheistesi kanssa.",
            "Kirjoita ajatuksiasi paperille.",
            "Riittävä uni on tärkeää.",
            "Ulkoile ja liiku kun vointisi sen sallii.",
            "Opettele rentoutumaan.",
            "Huumori on myös tärkeä voimavara.",
        ]),
    ]
}

fn substance_plan(content: &PersonalizedContent) -> Vec<Block> {
    let mut blocks = vec![Block::Section(
        "Päihteiden käytön vähentämis- ja lopettamissuunnitelma".to_string(),
    )];
    if content.includes_smoking {
        blocks.push(Block::Label("Tupakoinnin lopettaminen".to_string()));
        blocks.push(Block::Paragraph(
            "Tupakointi heikentää merkittävästi hoitotuloksia. Lopettamalla tupakoinnin \
             mahdollisimman varhain ennen hoitoasi parannat toipumisennustettasi. \
             Lyhyestäkin savuttomuudesta on hyötyä."
                .to_string(),
        ));
        blocks.push(Block::Label("Lopettamisen keinoja:".to_string()));
        blocks.push(bullets(&[
            "Nikotiinikorvaushoito (laastari, purukumi, imeskelytabletti)",
            "Reseptilääkkeet (varenikliini, bupropioni)",
            "Käyttäytymisterapia ja vertaistuki",
            "Stumppi-ohjelma: stumppi.fi",
        ]));
    }
    if content.includes_alcohol {
        blocks.push(Block::Label("Alkoholin käyttö".to_string()));
        blocks.push(Block::Paragraph(
            "Toimenpidettä odottaessa on turvallisinta pidättäytyä alkoholin käytöstä. \
             Toimenpidettä edeltävänä päivänä ja toimenpidepäivänä alkoholin käyttö on \
             kielletty."
                .to_string(),
        ));
        blocks.push(Block::Label("Alkoholin vaikutukset:".to_string()));
        blocks.push(bullets(&[
            "Heikentää immuunijärjestelmää",
            "Lisää verenvuodon riskiä",
            "Vaikuttaa anestesia-aineiden toimintaan",
            "Hidastaa haavan paranemista",
        ]));
    }
    if content.includes_substance {
        blocks.push(Block::Label("Muiden päihteiden käyttö".to_string()));
        blocks.push(Block::Paragraph(
            "Minkä tahansa päihteen säännöllinen käyttö voi vaikuttaa negatiivisesti \
             toipumiseesi. On tärkeää keskustella lääkärin kanssa kaikesta päihteiden \
             käytöstä."
                .to_string(),
        ));
    }

    blocks.push(Block::Label("Tärkeää".to_string()));
    blocks.push(Block::Paragraph(
        "Jos käytät päihteitä säännöllisesti tai runsaasti, älä lopeta äkillisesti. \
         Keskustele lääkärin kanssa turvallisesta lopettamisesta."
            .to_string(),
    ));
    blocks.push(Block::Paragraph(
        "Rehellisyys päihteiden käytöstä on tärkeää turvallisuutesi vuoksi. \
         Hoitohenkilökunta ei tuomitse vaan auttaa."
            .to_string(),
    ));

    blocks.push(Block::Label("Tukea ja apua".to_string()));
    if content.includes_smoking {
        blocks.push(Block::Label("Tupakoinnin lopettaminen:".to_string()));
        blocks.push(bullets(&[
            "Stumppi.fi - Online-tuki",
            "Terveyskeskus - Nikotiinikorvaushoito",
            "Apteekit - Neuvonta ja tuotteet",
        ]));
    }
    if content.includes_alcohol {
        blocks.push(Block::Label("Alkoholiongelmat:".to_string()));
        blocks.push(bullets(&[
            "A-klinikka - Päihdepalvelut",
            "AA-ryhmät - Vertaistuki",
            "Päihdelinkki.fi - Online-palvelut",
        ]));
    }
    if content.includes_substance {
        blocks.push(Block::Label("Huumausaineongelmat:".to_string()));
        blocks.push(bullets(&[
            "Irti Huumeista ry - Vertaistuki ja neuvonta",
            "A-klinikka - Päihdepalvelut",
            "Tukikohta ry - Kuntoutuspalvelut",
        ]));
    }

    blocks.push(table(
        "Päivittäinen päihteiden käytön päiväkirja (14 päivää)",
        &["Päivä", "Määrä", "Tilanne/Tunne", "Huomiot"],
    ));
    blocks
}

fn disease_management() -> Vec<Block> {
    vec![
        Block::Section("Sairauksien hallintasuunnitelma".to_string()),
        Block::Label("Diabetes".to_string()),
        Block::Paragraph(
            "Huono verensokeritasapaino altistaa tulehduksille, tukoksille ja muille \
             komplikaatioille. Verensokereissa tavoitellaan tasoa 3,9-10 mmol/l."
                .to_string(),
        ),
        Block::Label("Uniapnea".to_string()),
        Block::Paragraph(
            "Jos epäilet itse tai puolisosi epäilee sinun sairastavan uniapneaa, hakeudu \
             lääkärin vastaanotolle. Jos Sinulla on todettu uniapnea ja sen hoidossa on \
             haasteita, ota yhteyttä hoitavaan yksikköön."
                .to_string(),
        ),
        Block::Label("Suun terveys".to_string()),
        Block::Paragraph(
            "Hoitamattomat hampaat ja iensairaudet altistavat tulehduksille mm. leikkauksen \
             jälkeen tai syöpälääkehoitojen aikana. Hammaslääkärillä ja suuhygienistillä \
             onkin syytä käydä hyvissä ajoin ennen leikkaukseen tai syöpälääkehoitoon tuloa."
                .to_string(),
        ),
    ]
}

/// The echoed question/answer list on result documents.
fn answer_blocks(instrument: &dyn ScreeningInstrument, answers: &BTreeMap<u32, TestAnswer>) -> Vec<Block> {
    let mut blocks = vec![Block::EchoHeading("Vastauksesi:".to_string())];
    for item in instrument.items() {
        let answer = match answers.get(&item.id) {
            Some(answer) => item.selected_label(answer).unwrap_or("Tuntematon vastaus"),
            None => "Ei vastausta",
        };
        blocks.push(Block::QaPair {
            question: format!("{}. {}", item.id, item.text),
            answer: format!("Vastaus: {answer}"),
        });
    }
    blocks
}

/// Score headline and result tier, common to every result document.
fn result_blocks(title: &str, instrument: &dyn ScreeningInstrument, score: u32) -> Vec<Block> {
    let outcome = instrument.classify(score);
    vec![
        Block::Section(title.to_string()),
        Block::ScoreLine(format!("Pistemäärä: {score}/{}", instrument.max_score())),
        Block::ResultLine(outcome.title.to_string()),
        Block::Paragraph(outcome.description.to_string()),
    ]
}

fn alcohol_test(title: &str, content: &PersonalizedContent) -> Vec<Block> {
    let instrument = Audit;
    let mut blocks = result_blocks(title, &instrument, content.score.unwrap_or(0));
    blocks.extend(answer_blocks(&instrument, &content.answers));
    blocks
}

fn smoking_test(title: &str, content: &PersonalizedContent) -> Vec<Block> {
    let instrument = Fagerstrom;
    let mut blocks = result_blocks(title, &instrument, content.score.unwrap_or(0));
    blocks.push(Block::Spacer(5.0));
    blocks.push(Block::Label("Tupakoinnin lopettamisen hyödyt:".to_string()));
    blocks.push(bullets(&[
        "Haavan paraneminen nopeutuu",
        "Haavojen tulehtuminen vähenee",
        "Hengitys helpottuu ja keuhkokuumeen vaara vähenee",
        "Sydän- ja aivoinfarktin sekä keuhkoveritulpan vaara vähenee",
        "Hoitoaika sairaalassa lyhenee",
    ]));
    blocks.extend(answer_blocks(&instrument, &content.answers));
    blocks
}

fn substance_test(title: &str, content: &PersonalizedContent) -> Vec<Block> {
    let instrument = SubstanceScreen;
    let mut blocks = result_blocks(title, &instrument, content.score.unwrap_or(0));
    blocks.push(Block::Spacer(5.0));
    blocks.push(Block::Label("Tärkeää tietoa:".to_string()));
    blocks.push(Block::Paragraph(
        "Jos sinulla on huolta päihteiden käytöstäsi, älä epäröi hakea apua. \
         Terveydenhuollon ammattilaiset voivat tarjota tukea ja ohjausta tilanteesi \
         parantamiseksi."
            .to_string(),
    ));
    blocks.extend(answer_blocks(&instrument, &content.answers));
    blocks
}

/// Full block list for one document: shared header, then the kind's body.
pub fn document_blocks(
    kind: DocumentKind,
    content: &PersonalizedContent,
    creation_date: &str,
) -> Vec<Block> {
    let title = kind.title();
    let mut blocks = header_blocks(title, content, creation_date);
    blocks.extend(match kind {
        DocumentKind::ExercisePlan => exercise_plan(content),
        DocumentKind::NutritionPlan => nutrition_plan(),
        DocumentKind::MentalWellbeing => mental_wellbeing(),
        DocumentKind::SubstancePlan => substance_plan(content),
        DocumentKind::DiseaseManagement => disease_management(),
        DocumentKind::AlcoholTest => alcohol_test(title, content),
        DocumentKind::SmokingTest => smoking_test(title, content),
        DocumentKind::SubstanceTest => substance_test(title, content),
    });
    blocks
}
