// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ExportTable;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF via PdfManager.
pub(crate) fn export_pdf(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(table);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
