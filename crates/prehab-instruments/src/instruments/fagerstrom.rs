use crate::ScreeningInstrument;
use crate::scoring::{Item, ItemRule, Outcome, ScaleOption};

/// Fagerström test for nicotine dependence: 6 items, two on a 0–3 scale and
/// four binary. Total 0–10.
pub struct Fagerstrom;

// The binary items store their answers as 1/0 like the scale items do.
const BINARY_OPTIONS: &[ScaleOption] = &[
    ScaleOption { label: "Kyllä", points: 1 },
    ScaleOption { label: "Ei", points: 0 },
];

static ITEMS: &[Item] = &[
    Item {
        id: 1,
        text: "Kuinka pian heräämisen jälkeen tupakoit ensimmäisen kerran?",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "alle 5 minuuttia", points: 3 },
            ScaleOption { label: "6-30 minuuttia", points: 2 },
            ScaleOption { label: "31-60 minuuttia", points: 1 },
            ScaleOption { label: "yli 60 minuuttia", points: 0 },
        ]),
    },
    Item {
        id: 2,
        text: "Onko sinusta vaikeaa olla tupakoimatta tiloissa, joissa se on kiellettyä?",
        rule: ItemRule::Scale(BINARY_OPTIONS),
    },
    Item {
        id: 3,
        text: "Mistä tupakointikerrasta sinun olisi vaikeinta luopua?",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "aamun ensimmäisestä", points: 1 },
            ScaleOption { label: "jostain muusta", points: 0 },
        ]),
    },
    Item {
        id: 4,
        text: "Kuinka monta savuketta poltat vuorokaudessa?",
        rule: ItemRule::Scale(&[
            ScaleOption { label: "1-10 savuketta", points: 0 },
            ScaleOption { label: "11-20 savuketta", points: 1 },
            ScaleOption { label: "21-30 savuketta", points: 2 },
            ScaleOption { label: "yli 30 savuketta", points: 3 },
        ]),
    },
    Item {
        id: 5,
        text: "Tupakoitko useammin aamupäivällä kuin muina aikoina?",
        rule: ItemRule::Scale(BINARY_OPTIONS),
    },
    Item {
        id: 6,
        text: "Tupakoitko silloinkin, kun olet niin sairas, että joudut olemaan vuoteessa suurimman osan päivästä?",
        rule: ItemRule::Scale(BINARY_OPTIONS),
    },
];

impl ScreeningInstrument for Fagerstrom {
    fn id(&self) -> &str {
        "fagerstrom"
    }

    fn name(&self) -> &str {
        "Tupakkariippuvuustesti"
    }

    fn max_score(&self) -> u32 {
        10
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn classify(&self, score: u32) -> Outcome {
        if score <= 3 {
            Outcome {
                title: "Vähäinen tai ei lainkaan riippuvuutta",
                description: "Nikotiiniriippuvuutesi on vähäinen. Tupakoinnin lopettaminen on sinulle helpompaa kuin voimakkaasti riippuvaisille.",
            }
        } else if score <= 6 {
            Outcome {
                title: "Kohtalainen riippuvuus",
                description: "Sinulla on kohtalainen nikotiiniriippuvuus. Tupakoinnin lopettaminen voi vaatia tukea ja vieroitushoitoa.",
            }
        } else {
            Outcome {
                title: "Voimakas riippuvuus",
                description: "Sinulla on voimakas nikotiiniriippuvuus. Suosittelemme vahvasti hakeutumaan vieroitushoitoon ja käyttämään nikotiinikorvaushoitoa.",
            }
        }
    }
}
