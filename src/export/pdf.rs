// src/export/pdf.rs

use crate::export::model::ExportTable;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const REASON_WRAP: usize = 90;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        // WinAnsi so that accented Portuguese text renders with the base fonts.
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            line_h: 14.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 9.5,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a new page and its content stream.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: &str,
    ) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        bold: bool,
    ) {
        let mut x = self.margin;
        let size = if bold { self.header_font_size } else { self.font_size };

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            self.draw_text(content, x + 4.0, y + 6.0, size, bold, text);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 5.6 + 8.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count() as f32 * 5.2 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            true,
            title,
        );

        let pg = format!("Página {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            false,
            &pg,
        );
    }

    /// Label/value block under the title; long values are wrapped.
    fn draw_preamble(
        &self,
        content: &mut Content,
        mut y: f32,
        preamble: &[(String, String)],
    ) -> f32 {
        for (label, value) in preamble {
            let lines = textwrap::wrap(value, REASON_WRAP);
            let label = format!("{label}:");
            self.draw_text(content, self.margin, y, self.font_size, true, &label);

            if lines.is_empty() {
                y -= self.line_h;
            }
            for line in lines {
                self.draw_text(content, self.margin + 80.0, y, self.font_size, false, &line);
                y -= self.line_h;
            }
        }
        y - self.line_h
    }

    /// Multipage table; title and page number on every page, preamble on
    /// the first page only.
    pub fn write_table(&mut self, table: &ExportTable) {
        let col_widths = self.compute_col_widths(&table.headers, &table.rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = table.headers.iter().map(|s| s.to_string()).collect();

        let mut next = 0;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, &table.title, page_idx);

            let mut y = self.page_h - self.margin - 20.0;
            if page_idx == 1 && !table.preamble.is_empty() {
                y = self.draw_preamble(&mut content, y, &table.preamble);
            }
            y -= self.row_h;

            self.fill_band(&mut content, y, table_w, 0.85);
            self.draw_row(&mut content, y, &col_widths, &header_row, true);
            y -= self.row_h;

            while next < table.rows.len() && y >= self.margin {
                let emphasized = table.emphasis.contains(&next);
                if emphasized {
                    self.fill_band(&mut content, y, table_w, 0.90);
                } else if next % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, 0.96);
                }

                self.draw_row(&mut content, y, &col_widths, &table.rows[next], emphasized);
                y -= self.row_h;
                next += 1;
            }

            self.finalize_page(content);
            page_idx += 1;

            if next >= table.rows.len() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Latin-1 subset of WinAnsi; anything outside becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
