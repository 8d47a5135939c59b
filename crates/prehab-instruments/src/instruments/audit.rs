use crate::ScreeningInstrument;
use crate::scoring::{Item, ItemRule, Outcome, ScaleOption};

/// AUDIT: alcohol-use screening, 10 items. Items 1–8 score 0–4; items 9 and
/// 10 have only three options (4/2/0). Total 0–40.
pub struct Audit;

const FREQUENCY_OPTIONS: &[ScaleOption] = &[
    ScaleOption { label: "Päivittäin tai lähes päivittäin", points: 4 },
    ScaleOption { label: "Kerran viikossa", points: 3 },
    ScaleOption { label: "Kerran kuussa", points: 2 },
    ScaleOption { label: "Harvemmin kuin kerran kuussa", points: 1 },
    ScaleOption { label: "En koskaan", points: 0 },
];

// Items 4 and 5 phrase the zero option impersonally.
const FREQUENCY_OPTIONS_EI: &[ScaleOption] = &[
    ScaleOption { label: "Päivittäin tai lähes päivittäin", points: 4 },
    ScaleOption { label: "Kerran viikossa", points: 3 },
    ScaleOption { label: "Kerran kuussa", points: 2 },
    ScaleOption { label: "Harvemmin kuin kerran kuussa", points: 1 },
    ScaleOption { label: "Ei koskaan", points: 0 },
];

static ITEMS: &[Item] = &[
    Item {
        id: 1,
        text: "Kuinka usein juot olutta, viiniä tai muita alkoholijuomia? Ota mukaan myös ne kerrat, jolloin nautit vain pieniä määriä, esimerkiksi pullon keskiolutta tai tilkan viiniä.",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "4 kertaa viikossa tai useammin", points: 4 },
            ScaleOption { label: "2-3 kertaa viikossa", points: 3 },
            ScaleOption { label: "2-4 kertaa kuussa", points: 2 },
            ScaleOption { label: "Noin kerran kuussa tai harvemmin", points: 1 },
            ScaleOption { label: "En koskaan", points: 0 },
        ]),
    },
    Item {
        id: 2,
        text: "Kuinka monta annosta alkoholia yleensä olet ottanut niinä päivinä, jolloin käytit alkoholia?",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "10 tai enemmän", points: 4 },
            ScaleOption { label: "7-9 annosta", points: 3 },
            ScaleOption { label: "5-6 annosta", points: 2 },
            ScaleOption { label: "3-4 annosta", points: 1 },
            ScaleOption { label: "1-2 annosta", points: 0 },
        ]),
    },
    Item {
        id: 3,
        text: "Kuinka usein olet juonut kerralla kuusi tai useampia annoksia?",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "Päivittäin tai lähes päivittäin", points: 4 },
            ScaleOption { label: "Kerran viikossa", points: 3 },
            ScaleOption { label: "Kerran kuussa", points: 2 },
            ScaleOption { label: "Harvemmin kuin kerran kuussa", points: 1 },
            ScaleOption { label: "En koskaan", points: 0 },
        ]),
    },
    Item {
        id: 4,
        text: "Kuinka usein viimeisen vuoden aikana sinulle kävi niin, että et pystynyt lopettamaan alkoholinkäyttöä sen aloittamisen jälkeen?",
        rule: ItemRule::Scale(FREQUENCY_OPTIONS_EI),
    },
    Item {
        id: 5,
        text: "Kuinka usein viimeisen vuoden aikana et ole juomisesi vuoksi saanut tehtyä jotain, mikä tavallisesti kuuluu tehtäviisi?",
        rule: ItemRule::Scale(FREQUENCY_OPTIONS_EI),
    },
    Item {
        id: 6,
        text: "Kuinka usein viimeisen vuoden aikana runsaan juomisen jälkeen tarvitsit aamulla olutta tai muuta alkoholia päästäksesi paremmin liikkeelle?",
        rule: ItemRule::Scale(FREQUENCY_OPTIONS),
    },
    Item {
        id: 7,
        text: "Kuinka usein viimeisen vuoden aikana tunsit syyllisyyttä tai katumusta juomisen jälkeen?",
        rule: ItemRule::Scale(FREQUENCY_OPTIONS),
    },
    Item {
        id: 8,
        text: "Kuinka usein viime vuoden aikana sinulle kävi niin, että et juomisen vuoksi pystynyt muistamaan edellisen illan tapahtumia?",
        rule: ItemRule::Scale(FREQUENCY_OPTIONS),
    },
    Item {
        id: 9,
        text: "Oletko itse tai onko joku muu satuttanut tai loukannut itseään sinun alkoholinkäyttösi seurauksena?",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "Kyllä, viimeisen vuoden aikana", points: 4 },
            ScaleOption { label: "On, mutta ei viimeisen vuoden aikana", points: 2 },
            ScaleOption { label: "Ei", points: 0 },
        ]),
    },
    Item {
        id: 10,
        text: "Onko joku läheisesi tai ystäväsi, lääkäri tai joku muu ollut huolissaan alkoholinkäytöstäsi tai ehdottanut että vähentäisit juomista?",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "On, viimeksi kuluneen vuoden aikana", points: 4 },
            ScaleOption { label: "On, mutta ei viimeisen vuoden aikana", points: 2 },
            ScaleOption { label: "Ei koskaan", points: 0 },
        ]),
    },
];

impl ScreeningInstrument for Audit {
    fn id(&self) -> &str {
        "audit"
    }

    fn name(&self) -> &str {
        "AUDIT-testi"
    }

    fn max_score(&self) -> u32 {
        40
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn classify(&self, score: u32) -> Outcome {
        if score <= 7 {
            Outcome {
                title: "Alkoholinkäyttö on hallinnassa.",
                description: "",
            }
        } else if score <= 13 {
            Outcome {
                title: "Alkoholinkäyttö on niin runsasta, että siihen liittyy riskejä.",
                description: "",
            }
        } else {
            Outcome {
                title: "Päihderiippuvuus on todennäköinen. Alkoholinkäyttöä on vähennettävä.",
                description: "",
            }
        }
    }
}
