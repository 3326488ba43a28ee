// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::ExportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MONEY_FORMAT: &str = "#,##0";

/// Export XLSX with a styled header, banded rows and auto column widths.
pub(crate) fn export_xlsx(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(&table.title)).map_err(to_app_error)?;

    // ---------------------------
    // Title + preamble
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet
        .write_with_format(0, 0, table.title.as_str(), &title_format)
        .map_err(to_app_error)?;

    let label_format = Format::new().set_bold();
    let mut row: u32 = 1;
    for (label, value) in &table.preamble {
        worksheet
            .write_with_format(row, 0, label.as_str(), &label_format)
            .map_err(to_app_error)?;
        worksheet.write(row, 1, value.as_str()).map_err(to_app_error)?;
        row += 1;
    }
    row += 1;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let header_row = row;
    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(header_row + 1, 0).ok();

    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let total_bg = Color::RGB(0xD9D9D9);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, values) in table.rows.iter().enumerate() {
        let row = header_row + 1 + row_index as u32;
        let emphasized = table.emphasis.contains(&row_index);
        let bg = if emphasized {
            total_bg
        } else if row_index % 2 == 0 {
            band1
        } else {
            band2
        };

        for (col, value) in values.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, bg, emphasized)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell: dd/mm/yyyy as an Excel date, integers as money, the rest as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    bold: bool,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if bold {
        fmt = fmt.set_bold();
    }

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = fmt.set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<i64>() {
        let fmt = fmt.set_num_format(MONEY_FORMAT).set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num as f64, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;
    Ok(())
}

/// Excel sheet names: max 31 chars, no `[]:*?/\`.
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    if cleaned.trim().is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
