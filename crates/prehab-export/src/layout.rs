//! Page layout: turns a flat list of content blocks into positioned pages.
//!
//! The engine is a pure function of its input — it never talks to the PDF
//! backend. Coordinates are millimetres from the top-left of an A4 page,
//! text positions are baselines, boxes are anchored at their top edge. The
//! renderer flips the y axis.

/// Layout tuning values. The defaults reproduce the established print
/// layout of the guide documents, so changing them changes every document.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub page_width: f64,
    pub page_height: f64,
    pub top_margin: f64,
    pub left_margin: f64,
    pub right_edge: f64,
    pub max_width: f64,
    /// Body text starts a new page once the cursor passes this line.
    pub body_limit: f64,
    /// Table rows may run closer to the page edge than body text.
    pub table_limit: f64,
    pub row_height: f64,
    pub header_row_height: f64,
    pub day_column_width: f64,
    /// Tracking tables cover two weeks.
    pub table_rows: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            page_width: 210.0,
            page_height: 297.0,
            top_margin: 20.0,
            left_margin: 15.0,
            right_edge: 195.0,
            max_width: 180.0,
            body_limit: 270.0,
            table_limit: 280.0,
            row_height: 10.0,
            header_row_height: 12.0,
            day_column_width: 20.0,
            table_rows: 14,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// One positioned drawing primitive on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f64,
        /// Baseline, measured from the page top.
        y: f64,
        text: String,
        size: f64,
        style: FontStyle,
    },
    /// Horizontal hairline.
    Rule { x1: f64, x2: f64, y: f64 },
    /// Unfilled rectangle, anchored at its top-left corner.
    CellBox { x: f64, y: f64, width: f64, height: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDocument {
    pub title: String,
    pub pages: Vec<Page>,
}

/// Document content in reading order, not yet positioned.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Document title, 20 pt.
    Title(String),
    /// Italic annotation under the title (personalization note).
    MetaLine(String),
    /// Right-aligned creation stamp pinned to the top corner.
    Stamp(String),
    /// Hairline across the text width.
    Rule,
    /// Section heading, 14 pt.
    Section(String),
    /// Sub-heading, 12 pt, with room below for a following topic.
    Topic(String),
    /// Tight sub-heading, 12 pt, directly above its list.
    Label(String),
    /// Body text, word-wrapped at 12 pt.
    Paragraph(String),
    /// Bulleted list, indented body text.
    Bullets(Vec<String>),
    /// Score headline on result documents, 16 pt.
    ScoreLine(String),
    /// Result-tier headline, 14 pt.
    ResultLine(String),
    /// Heading above the echoed answers, preceded by extra space.
    EchoHeading(String),
    /// One echoed question with the recorded answer under it, 10 pt.
    QaPair { question: String, answer: String },
    /// Fill-in tracking table: a title, a header row, and empty numbered
    /// day rows.
    Table { title: String, headers: Vec<String> },
    /// Explicit vertical gap.
    Spacer(f64),
}

/// Approximate glyph advance for Helvetica at `size_pt`, in millimetres.
/// Half an em per character is close enough for wrapping and for
/// right-aligning the stamp.
pub(crate) fn char_width_mm(size_pt: f64) -> f64 {
    size_pt * 0.3528 * 0.5
}

/// Greedy word wrap into lines no wider than `width_mm`. Empty input still
/// produces one (empty) line so that spacing stays uniform.
pub fn wrap(text: &str, width_mm: f64, size_pt: f64) -> Vec<String> {
    let max_chars = (width_mm / char_width_mm(size_pt)).floor().max(1.0) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct Cursor<'a> {
    opts: &'a LayoutOptions,
    done: Vec<Page>,
    current: Page,
    y: f64,
}

impl<'a> Cursor<'a> {
    fn new(opts: &'a LayoutOptions) -> Self {
        Cursor { opts, done: Vec::new(), current: Page::default(), y: opts.top_margin }
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }

    fn new_page(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
        self.y = self.opts.top_margin;
    }

    fn break_if_past_limit(&mut self) {
        if self.y > self.opts.body_limit {
            self.new_page();
        }
    }

    fn push(&mut self, element: Element) {
        self.current.elements.push(element);
    }

    /// Single-line heading at `size`, then advance by `after`.
    fn heading(&mut self, text: &str, size: f64, style: FontStyle, after: f64) {
        self.break_if_past_limit();
        self.push(Element::Text {
            x: self.opts.left_margin,
            y: self.y,
            text: text.to_string(),
            size,
            style,
        });
        self.y += after;
    }

    /// Wrapped body text at `x`, one page-break check per line.
    fn text_lines(&mut self, text: &str, x: f64, width: f64, size: f64, style: FontStyle, line_height: f64) {
        for line in wrap(text, width, size) {
            self.break_if_past_limit();
            self.push(Element::Text { x, y: self.y, text: line, size, style });
            self.y += line_height;
        }
    }

    fn table_header(&mut self, headers: &[String], widths: &[f64]) {
        let mut x = self.opts.left_margin;
        for (header, width) in headers.iter().zip(widths) {
            self.push(Element::CellBox {
                x,
                y: self.y,
                width: *width,
                height: self.opts.header_row_height,
            });
            self.push(Element::Text {
                x: x + 2.0,
                y: self.y + 7.0,
                text: header.clone(),
                size: 10.0,
                style: FontStyle::Bold,
            });
            x += width;
        }
        self.y += self.opts.header_row_height;
    }

    fn table(&mut self, title: &str, headers: &[String]) {
        self.y += 10.0;
        self.break_if_past_limit();
        self.heading(title, 12.0, FontStyle::Bold, 8.0);

        let columns = headers.len().max(2);
        let data_width =
            (self.opts.max_width - self.opts.day_column_width) / (columns - 1) as f64;
        let mut widths = vec![self.opts.day_column_width];
        widths.extend(std::iter::repeat(data_width).take(columns - 1));

        self.table_header(headers, &widths);
        for day in 1..=self.opts.table_rows {
            // Rows never straddle a page edge; the header travels with them.
            if self.y + self.opts.row_height > self.opts.table_limit {
                self.new_page();
                self.table_header(headers, &widths);
            }
            let mut x = self.opts.left_margin;
            self.push(Element::CellBox {
                x,
                y: self.y,
                width: widths[0],
                height: self.opts.row_height,
            });
            self.push(Element::Text {
                x: x + 8.0,
                y: self.y + 7.0,
                text: day.to_string(),
                size: 10.0,
                style: FontStyle::Regular,
            });
            x += widths[0];
            for width in &widths[1..] {
                self.push(Element::CellBox {
                    x,
                    y: self.y,
                    width: *width,
                    height: self.opts.row_height,
                });
                x += width;
            }
            self.y += self.opts.row_height;
        }
        self.y += 5.0;
    }

    fn block(&mut self, block: &Block) {
        let margin = self.opts.left_margin;
        match block {
            Block::Title(text) => self.heading(text, 20.0, FontStyle::Bold, 10.0),
            Block::MetaLine(text) => self.heading(text, 10.0, FontStyle::Italic, 5.0),
            Block::Stamp(text) => {
                // Pinned to the top corner of the current page; still takes
                // a slot in the flow.
                let width = text.chars().count() as f64 * char_width_mm(10.0);
                self.push(Element::Text {
                    x: self.opts.right_edge - width,
                    y: self.opts.top_margin,
                    text: text.clone(),
                    size: 10.0,
                    style: FontStyle::Regular,
                });
                self.y += 5.0;
            }
            Block::Rule => {
                self.push(Element::Rule {
                    x1: margin,
                    x2: self.opts.right_edge,
                    y: self.y,
                });
                self.y += 10.0;
            }
            Block::Section(text) => self.heading(text, 14.0, FontStyle::Bold, 8.0),
            Block::Topic(text) => self.heading(text, 12.0, FontStyle::Bold, 8.0),
            Block::Label(text) => self.heading(text, 12.0, FontStyle::Bold, 6.0),
            Block::Paragraph(text) => {
                self.text_lines(text, margin, self.opts.max_width, 12.0, FontStyle::Regular, 5.0);
                self.y += 5.0;
            }
            Block::Bullets(items) => {
                for item in items {
                    self.text_lines(
                        &format!("\u{2022} {item}"),
                        margin + 5.0,
                        self.opts.max_width - 5.0,
                        12.0,
                        FontStyle::Regular,
                        5.0,
                    );
                }
                self.y += 5.0;
            }
            Block::ScoreLine(text) => self.heading(text, 16.0, FontStyle::Bold, 10.0),
            Block::ResultLine(text) => self.heading(text, 14.0, FontStyle::Bold, 8.0),
            Block::EchoHeading(text) => {
                self.y += 10.0;
                self.heading(text, 12.0, FontStyle::Bold, 8.0);
            }
            Block::QaPair { question, answer } => {
                self.text_lines(question, margin, self.opts.max_width, 10.0, FontStyle::Bold, 4.0);
                self.text_lines(answer, margin + 5.0, self.opts.max_width, 10.0, FontStyle::Regular, 4.0);
                self.y += 5.0;
            }
            Block::Table { title, headers } => self.table(title, headers),
            Block::Spacer(height) => self.y += height,
        }
    }
}

/// Lay `blocks` out onto pages.
pub fn paginate(title: &str, blocks: &[Block], opts: &LayoutOptions) -> PaginatedDocument {
    let mut cursor = Cursor::new(opts);
    for block in blocks {
        cursor.block(block);
    }
    PaginatedDocument { title: title.to_string(), pages: cursor.finish() }
}
