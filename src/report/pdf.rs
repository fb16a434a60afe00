//! PDF rendering of the wages report.

use std::io::BufWriter;

use printpdf::*;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::document::{SCHEDULE_COLUMNS, WagesReport};

// A4 dimensions (mm)
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_TOP: f32 = 14.0;
const MARGIN_BOTTOM: f32 = 20.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_RIGHT: f32 = 14.0;
const RIGHT_COLUMN: f32 = 113.0;
const ROW_H: f32 = 5.3;
const FONT_SIZE: f32 = 12.0;
const TABLE_FONT_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 24.0;
const SECTION_SIZE: f32 = 16.0;
const FOOTER_SIZE: f32 = 10.0;

// Left edge of each schedule column (mm)
const TABLE_COLUMNS: [f32; 6] = [16.0, 42.0, 67.0, 92.0, 127.0, 152.0];

fn approx_text_width(text: &str, size: f32) -> f32 {
    text.len() as f32 * size * 0.18
}

/// Splits text into lines that fit within `width` millimetres.
fn wrap(text: &str, size: f32, width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if !current.is_empty() && approx_text_width(&candidate, size) > width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[derive(Clone, Copy)]
enum Tone {
    Body,
    Heading,
    Strong,
    Muted,
}

impl Tone {
    fn color(self) -> Color {
        let (r, g, b) = match self {
            Tone::Body => (0.0, 0.0, 0.0),
            Tone::Heading => (0.0, 0.48, 1.0),
            Tone::Strong => (0.6, 0.0, 0.0),
            Tone::Muted => (0.4, 0.4, 0.4),
        };
        Color::Rgb(Rgb::new(r, g, b, None))
    }
}

struct PdfWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    y: f32,
}

fn render_error(e: impl std::fmt::Debug) -> EngineError {
    EngineError::ReportRender {
        message: format!("{e:?}"),
    }
}

impl PdfWriter {
    fn new(title: &str) -> EngineResult<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;
        Ok(Self {
            doc,
            font,
            font_bold,
            pages: vec![(page, layer)],
            y: MARGIN_TOP,
        })
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.pages.len() - 1];
        self.doc.get_page(page).get_layer(layer)
    }

    fn pdf_y(&self) -> f32 {
        PAGE_H - self.y
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer");
        self.pages.push((page, layer));
        self.y = MARGIN_TOP;
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > PAGE_H - MARGIN_BOTTOM {
            self.new_page();
        }
    }

    fn text_at(&self, s: &str, x: f32, size: f32, bold: bool, tone: Tone) {
        let font = if bold { &self.font_bold } else { &self.font };
        let layer = self.layer();
        layer.set_fill_color(tone.color());
        layer.use_text(s, size, Mm(x), Mm(self.pdf_y()), font);
    }

    fn line(&mut self, s: &str, x: f32, size: f32, bold: bool, tone: Tone) {
        self.ensure_space(ROW_H);
        self.text_at(s, x, size, bold, tone);
        self.y += ROW_H;
    }

    fn hline(&self, x1: f32, x2: f32, thickness: f32) {
        let layer = self.layer();
        layer.set_outline_color(Tone::Heading.color());
        layer.set_outline_thickness(thickness);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(self.pdf_y())), false),
                (Point::new(Mm(x2), Mm(self.pdf_y())), false),
            ],
            is_closed: false,
        });
    }

    fn page_title(&mut self, title: &str) {
        self.y += 6.0;
        self.text_at(title, MARGIN_LEFT, TITLE_SIZE, true, Tone::Heading);
        self.y += 6.0;
        self.hline(MARGIN_LEFT, PAGE_W - MARGIN_RIGHT, 2.0);
        self.y += 9.0;
    }

    fn section(&mut self, label: &str, x: f32) {
        self.ensure_space(ROW_H * 3.0);
        self.text_at(label, x, SECTION_SIZE, true, Tone::Heading);
        self.y += 7.0;
    }

    fn paragraph(&mut self, text: &str) {
        for line in wrap(text, FONT_SIZE, PAGE_W - MARGIN_LEFT - MARGIN_RIGHT) {
            self.line(&line, MARGIN_LEFT, FONT_SIZE, false, Tone::Body);
        }
    }

    fn table_row(&mut self, cells: &[&str], bold: bool) {
        self.ensure_space(ROW_H);
        for (cell, x) in cells.iter().zip(TABLE_COLUMNS) {
            self.text_at(cell, x, TABLE_FONT_SIZE, bold, Tone::Body);
        }
        self.y += ROW_H;
    }

    fn blank(&mut self, height: f32) {
        self.y += height;
    }

    /// Writes the footer on every page once the page count is known.
    fn footers(&mut self, footer: &str) {
        let total = self.pages.len();
        self.y = PAGE_H - MARGIN_BOTTOM / 2.0;
        for (number, &(page, layer)) in self.pages.iter().enumerate() {
            let layer = self.doc.get_page(page).get_layer(layer);
            let text = format!("{footer} | Page {} of {total}", number + 1);
            layer.set_fill_color(Tone::Muted.color());
            layer.use_text(text, FOOTER_SIZE, Mm(MARGIN_LEFT), Mm(self.pdf_y()), &self.font);
        }
    }

    fn to_bytes(self) -> EngineResult<Vec<u8>> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc.save(&mut buf).map_err(render_error)?;
        buf.into_inner().map_err(|e| EngineError::ReportRender {
            message: e.to_string(),
        })
    }
}

/// Renders the report as a PDF: the schedule and totals, then a notes page
/// with the expense explanation and closing cash details.
pub fn render_pdf(report: &WagesReport) -> EngineResult<Vec<u8>> {
    let pdf = lay_out(report)?;
    let pages = pdf.pages.len();
    let bytes = pdf.to_bytes()?;

    info!(
        file_name = %report.file_name(),
        pages,
        size_bytes = bytes.len(),
        "Rendered wages report PDF"
    );
    Ok(bytes)
}

fn lay_out(report: &WagesReport) -> EngineResult<PdfWriter> {
    let mut pdf = PdfWriter::new(&report.header.title)?;

    pdf.page_title(&report.header.title);
    let top = pdf.y;

    pdf.section("Employee Information", MARGIN_LEFT);
    pdf.line(&format!("Date: {}", report.header.date), MARGIN_LEFT, FONT_SIZE, false, Tone::Body);
    pdf.line(
        &format!("Employee Name: {}", report.header.employee_name),
        MARGIN_LEFT,
        FONT_SIZE,
        false,
        Tone::Body,
    );
    pdf.line(
        &format!("Address: {}", report.header.employee_address),
        MARGIN_LEFT,
        FONT_SIZE,
        false,
        Tone::Body,
    );
    let left_bottom = pdf.y;

    pdf.y = top;
    pdf.section("Hourly Rates", RIGHT_COLUMN);
    for line in report.rate_lines() {
        pdf.line(&line, RIGHT_COLUMN, FONT_SIZE, false, Tone::Body);
    }
    pdf.y = pdf.y.max(left_bottom);
    pdf.blank(ROW_H);

    pdf.section("Work Schedule", MARGIN_LEFT);
    pdf.table_row(&SCHEDULE_COLUMNS, true);
    for row in &report.shifts {
        let cells = report.row_cells(row);
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        pdf.table_row(&cells, false);
    }
    pdf.blank(ROW_H);

    pdf.section("Summary", MARGIN_LEFT);
    for line in report.summary_lines() {
        pdf.line(&line, MARGIN_LEFT, FONT_SIZE, false, Tone::Body);
    }
    pdf.blank(ROW_H);

    pdf.section("Financial Summary", RIGHT_COLUMN);
    let [before, transferred, after, closing, left] = report.financial_lines();
    pdf.line(&before, RIGHT_COLUMN, FONT_SIZE, true, Tone::Strong);
    pdf.line(&transferred, RIGHT_COLUMN, FONT_SIZE, true, Tone::Body);
    pdf.line(&after, RIGHT_COLUMN, FONT_SIZE, true, Tone::Strong);
    pdf.line(&closing, RIGHT_COLUMN, FONT_SIZE, false, Tone::Body);
    pdf.line(&left, RIGHT_COLUMN, FONT_SIZE, true, Tone::Body);

    pdf.new_page();
    pdf.page_title(&report.notes_title);

    pdf.section("Expense Explanation", MARGIN_LEFT);
    pdf.paragraph(&report.expense_explanation);
    pdf.blank(ROW_H);

    pdf.section("Closing Amount Details", MARGIN_LEFT);
    let [when, amounts, equation, note] = report.closing_lines();
    pdf.paragraph(&when);
    pdf.paragraph(&amounts);
    for line in wrap(&equation, FONT_SIZE, PAGE_W - MARGIN_LEFT - MARGIN_RIGHT) {
        pdf.line(&line, MARGIN_LEFT, FONT_SIZE, true, Tone::Body);
    }
    pdf.paragraph(&note);

    pdf.footers(&report.footer);
    Ok(pdf)
}
