//! Rendering backend: draws a [`PaginatedDocument`] with printpdf's builtin
//! Helvetica fonts. All positioning decisions were already made by the
//! layout engine; this module only converts coordinates and emits shapes.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::error::ExportError;
use crate::layout::{Element, FontStyle, PaginatedDocument};

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

/// Layout coordinates measure down from the page top; PDF user space
/// measures up from the bottom. The layout engine works in `f64`, printpdf
/// in `f32`, so this boundary also narrows.
fn flip(y: f64) -> Mm {
    Mm((PAGE_HEIGHT_MM - y) as f32)
}

fn stroke(layer: &PdfLayerReference, points: Vec<(f64, f64)>, closed: bool, thickness: f64) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.784, 0.784, 0.784, None)));
    layer.set_outline_thickness(thickness as f32);
    layer.add_line(Line {
        points: points
            .into_iter()
            .map(|(x, y)| (Point::new(Mm(x as f32), flip(y)), false))
            .collect(),
        is_closed: closed,
    });
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, element: &Element) {
    match element {
        Element::Text { x, y, text, size, style } => {
            layer.use_text(text.clone(), *size as f32, Mm(*x as f32), flip(*y), fonts.get(*style));
        }
        Element::Rule { x1, x2, y } => {
            stroke(layer, vec![(*x1, *y), (*x2, *y)], false, 0.2);
        }
        Element::CellBox { x, y, width, height } => {
            stroke(
                layer,
                vec![
                    (*x, *y),
                    (*x + *width, *y),
                    (*x + *width, *y + *height),
                    (*x, *y + *height),
                ],
                true,
                0.5,
            );
        }
    }
}

/// Render `document` into PDF bytes.
pub fn render(document: &PaginatedDocument) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        &document.title,
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(e.to_string()))?,
        italic: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| ExportError::Pdf(e.to_string()))?,
    };

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };
        for element in &page.elements {
            draw(&layer, &fonts, element);
        }
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}
