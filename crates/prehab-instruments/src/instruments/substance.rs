use crate::ScreeningInstrument;
use crate::scoring::{Item, ItemRule, Outcome, YesNo};

/// Substance-use screen: 20 yes/no items. A "kyllä" answer scores a point on
/// every item except 4 and 5, which are phrased so that "ei" is the
/// risk-indicating answer — the inversion is encoded in each item's rule.
pub struct SubstanceScreen;

const YES_SCORES: ItemRule = ItemRule::YesNo { scores_on: YesNo::Yes };
const NO_SCORES: ItemRule = ItemRule::YesNo { scores_on: YesNo::No };

static ITEMS: &[Item] = &[
    Item { id: 1, text: "Oletko koskaan käyttänyt huumeita tai lääkkeitä väärin?", rule: YES_SCORES },
    Item { id: 2, text: "Onko sinulla ollut ongelmia huumeiden tai lääkkeiden käytön vuoksi?", rule: YES_SCORES },
    Item { id: 3, text: "Oletko käyttänyt useampia huumeita tai lääkkeitä samanaikaisesti?", rule: YES_SCORES },
    Item { id: 4, text: "Selviätkö viikkoa ilman päihdyttävien lääkkeiden tai huumeiden käyttöä?", rule: NO_SCORES },
    Item { id: 5, text: "Oletko yrittänyt lopettaa tai vähentää huumeiden tai lääkkeiden käyttöä siinä onnistumatta?", rule: NO_SCORES },
    Item { id: 6, text: "Onko sinulla ollut \"mustia aukkoja\" tai muistikatkoksia huumeiden tai lääkkeiden käytön jälkeen?", rule: YES_SCORES },
    Item { id: 7, text: "Tunnetko syyllisyyttä tai häpeää huumeiden tai lääkkeiden käytöstäsi?", rule: YES_SCORES },
    Item { id: 8, text: "Ovatko ystäväsi tai perheesi koskaan valittaneet huumeiden tai lääkkeiden käytöstäsi?", rule: YES_SCORES },
    Item { id: 9, text: "Oletko laiminlyönyt velvollisuuksiasi huumeiden tai lääkkeiden käytön vuoksi?", rule: YES_SCORES },
    Item { id: 10, text: "Oletko menettänyt ystäviä huumeiden tai lääkkeiden väärinkäytön vuoksi?", rule: YES_SCORES },
    Item { id: 11, text: "Oletko joutunut vaikeuksiin töissä huumeiden tai lääkkeiden käytön vuoksi?", rule: YES_SCORES },
    Item { id: 12, text: "Oletko joutunut pidätetyksi tai syytteeseen huumeiden tai lääkkeiden hallussapidosta tai käytöstä?", rule: YES_SCORES },
    Item { id: 13, text: "Oletko kokenut vieroitusoireita, kun olet lopettanut huumeiden tai lääkkeiden käytön?", rule: YES_SCORES },
    Item { id: 14, text: "Onko sinulla ollut lääketieteellisiä ongelmia huumeiden tai lääkkeiden käytön seurauksena (esim. muistinmenetys, hepatiitti, kouristukset, verenvuoto)?", rule: YES_SCORES },
    Item { id: 15, text: "Oletko pyytänyt apua huumeiden tai lääkkeiden käyttöön liittyviin ongelmiin?", rule: YES_SCORES },
    Item { id: 16, text: "Oletko ollut vieroitushoidossa huumeiden tai lääkkeiden käytön vuoksi?", rule: YES_SCORES },
    Item { id: 17, text: "Onko sinulla ollut hallusinaatioita huumeiden tai lääkkeiden käytön seurauksena?", rule: YES_SCORES },
    Item { id: 18, text: "Oletko tuntenut, että elämäsi on hallitsematonta huumeiden tai lääkkeiden käytön takia?", rule: YES_SCORES },
    Item { id: 19, text: "Oletko koskaan yliannostanut huumeita tai lääkkeitä?", rule: YES_SCORES },
    Item { id: 20, text: "Oletko koskaan käyttänyt huumeita tai lääkkeitä väärin estääksesi vieroitusoireita?", rule: YES_SCORES },
];

impl ScreeningInstrument for SubstanceScreen {
    fn id(&self) -> &str {
        "substance"
    }

    fn name(&self) -> &str {
        "Huumausaineet"
    }

    fn max_score(&self) -> u32 {
        20
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn classify(&self, score: u32) -> Outcome {
        match score {
            0 => Outcome {
                title: "Ei merkittäviä ongelmia",
                description: "Vastauksesi eivät viittaa merkittäviin ongelmiin päihteiden käytössä.",
            },
            1..=5 => Outcome {
                title: "Ota yhteyttä terveysasemallesi neuvontaa varten",
                description: "Vastauksesi viittaavat mahdolliseen ongelmaan päihteiden käytössä. Suosittelemme ottamaan yhteyttä terveysasemallesi saadaksesi neuvontaa ja tukea.",
            },
            6..=10 => Outcome {
                title: "Kuulut riskiryhmään ja hyödyt vieroitusohjelmasta",
                description: "Vastauksesi osoittavat, että kuulut riskiryhmään. Hyötyisit vieroitusohjelmasta. Ota yhteyttä terveydenhuollon ammattilaiseen mahdollisimman pian.",
            },
            _ => Outcome {
                title: "Huumeiden käyttösi on merkittävää ja tarvitset intensiivistä vieroitushoitoa",
                description: "Vastauksesi osoittavat merkittävää päihteiden käyttöä. Tarvitset intensiivistä vieroitushoitoa. Ole yhteydessä terveydenhuollon ammattilaiseen välittömästi.",
            },
        }
    }
}
