//! The pure layout engine: wrapping, page breaks, and table continuation.

use prehab_export::layout::{
    Block, Element, LayoutOptions, Page, paginate, wrap,
};

fn texts(page: &Page) -> Vec<&str> {
    page.elements
        .iter()
        .filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn paragraphs(count: usize) -> Vec<Block> {
    (0..count).map(|i| Block::Paragraph(format!("Kappale {i}"))).collect()
}

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap("Liikunta", 180.0, 12.0), vec!["Liikunta"]);
}

#[test]
fn empty_text_still_takes_a_line() {
    assert_eq!(wrap("", 180.0, 12.0), vec![""]);
}

#[test]
fn long_text_wraps_within_the_width() {
    let text = "Hyvä ravitsemustila vähentää toimenpiteeseen liittyvää komplikaatioriskiä \
                sekä edistää toipumista ja kuntoutumista ennen leikkausta ja sen jälkeen";
    let lines = wrap(text, 180.0, 12.0);
    assert!(lines.len() > 1);
    // 180 mm at 12 pt fits 85 characters with the half-em approximation.
    assert!(lines.iter().all(|l| l.chars().count() <= 85));
    assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
}

#[test]
fn single_block_fits_one_page() {
    let document = paginate(
        "Testi",
        &[Block::Title("Testi".to_string())],
        &LayoutOptions::default(),
    );
    assert_eq!(document.pages.len(), 1);
}

#[test]
fn body_overflow_starts_a_new_page() {
    let document = paginate("Testi", &paragraphs(40), &LayoutOptions::default());
    assert!(document.pages.len() >= 2);
    // Every page starts again from the top margin.
    for page in &document.pages {
        let first_text_y = page.elements.iter().find_map(|e| match e {
            Element::Text { y, .. } => Some(*y),
            _ => None,
        });
        assert_eq!(first_text_y, Some(20.0));
    }
}

#[test]
fn no_element_lands_past_the_table_limit() {
    let mut blocks = paragraphs(30);
    blocks.push(Block::Table {
        title: "Päiväkirja".to_string(),
        headers: vec!["Päivä".to_string(), "Huomiot".to_string()],
    });
    let opts = LayoutOptions::default();
    let document = paginate("Testi", &blocks, &opts);

    for page in &document.pages {
        for element in &page.elements {
            match element {
                Element::Text { y, .. } => assert!(*y <= opts.table_limit),
                Element::CellBox { y, height, .. } => assert!(y + height <= opts.table_limit + 2.0),
                Element::Rule { y, .. } => assert!(*y <= opts.table_limit),
            }
        }
    }
}

#[test]
fn table_repeats_its_header_after_a_page_break() {
    // Push the table far enough down that its rows spill onto a new page.
    let mut blocks = paragraphs(24);
    blocks.push(Block::Table {
        title: "Päivittäinen liikuntapäiväkirja (14 päivää)".to_string(),
        headers: vec!["Päivä".to_string(), "Kesto (min)".to_string()],
    });
    let document = paginate("Testi", &blocks, &LayoutOptions::default());
    assert_eq!(document.pages.len(), 2);

    let header_count: usize = document
        .pages
        .iter()
        .map(|page| texts(page).iter().filter(|t| **t == "Päivä").count())
        .sum();
    assert_eq!(header_count, 2);

    // All 14 numbered day rows exist exactly once.
    let day_count: usize = document
        .pages
        .iter()
        .map(|page| texts(page).iter().filter(|t| **t == "7").count())
        .sum();
    assert_eq!(day_count, 1);
}

#[test]
fn table_alone_fits_one_page() {
    let document = paginate(
        "Testi",
        &[Block::Table {
            title: "Päiväkirja".to_string(),
            headers: vec!["Päivä".to_string(), "Määrä".to_string(), "Huomiot".to_string()],
        }],
        &LayoutOptions::default(),
    );
    assert_eq!(document.pages.len(), 1);

    // Header plus 14 day rows, three boxes per row.
    let boxes = document.pages[0]
        .elements
        .iter()
        .filter(|e| matches!(e, Element::CellBox { .. }))
        .count();
    assert_eq!(boxes, 3 + 14 * 3);
}

#[test]
fn stamp_is_pinned_to_the_top_right() {
    let document = paginate(
        "Testi",
        &[Block::Title("Testi".to_string()), Block::Stamp("Luotu: 1.1.2026".to_string())],
        &LayoutOptions::default(),
    );
    let stamp = document.pages[0]
        .elements
        .iter()
        .find_map(|e| match e {
            Element::Text { x, y, text, .. } if text.starts_with("Luotu:") => Some((*x, *y)),
            _ => None,
        })
        .unwrap();
    assert_eq!(stamp.1, 20.0);
    assert!(stamp.0 > 150.0 && stamp.0 < 195.0);
}

#[test]
fn bullets_are_indented() {
    let document = paginate(
        "Testi",
        &[Block::Bullets(vec!["Puhu läheistesi kanssa.".to_string()])],
        &LayoutOptions::default(),
    );
    match &document.pages[0].elements[0] {
        Element::Text { x, text, .. } => {
            assert_eq!(*x, 20.0);
            assert!(text.starts_with('\u{2022}'));
        }
        other => panic!("expected text, got {other:?}"),
    }
}
