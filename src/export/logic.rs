// src/export/logic.rs

use crate::config::Config;
use crate::core::receipt::build_receipt;
use crate::core::summary::{SummaryFilter, build_summary};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{Money, receipt_table, summary_table};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::{ExtraRequest, RequestStatus};
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use crate::utils::path::absolute_output_path;
use chrono::NaiveDate;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the receipt (recibo) of a single request.
    pub fn export_receipt(
        request: &ExtraRequest,
        format: ExportFormat,
        file: &str,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        let path = absolute_output_path(file)?;
        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        let receipt = build_receipt(request);

        match format {
            ExportFormat::Json => export_json(&receipt, &path)?,
            ExportFormat::Csv => export_csv(&receipt_table(&receipt, Money::Plain, ""), &path)?,
            ExportFormat::Xlsx => export_xlsx(
                &receipt_table(&receipt, Money::Plain, &cfg.company_name),
                &path,
            )?,
            ExportFormat::Pdf => export_pdf(
                &receipt_table(
                    &receipt,
                    Money::Currency(&cfg.currency_symbol),
                    &cfg.company_name,
                ),
                &path,
            )?,
        }

        Ok(())
    }

    /// Export the sector-grouped summary of the requests matching the filters.
    ///
    /// - `range`: `None`, `"all"` or one of the expressions accepted by
    ///   [`parse_range`].
    pub fn export_summary(
        requests: &[ExtraRequest],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        status: Option<RequestStatus>,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        let path = absolute_output_path(file)?;
        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let filter = SummaryFilter {
            status,
            sector: None,
            range: bounds,
        };
        let summary = build_summary(requests, &filter);

        if summary.is_empty() {
            warning("No requests found for the selected filters.");
        }

        let title = build_summary_title(range, &cfg.company_name);

        match format {
            ExportFormat::Json => export_json(&summary, &path)?,
            ExportFormat::Csv => export_csv(&summary_table(&summary, Money::Plain, &title), &path)?,
            ExportFormat::Xlsx => {
                export_xlsx(&summary_table(&summary, Money::Plain, &title), &path)?
            }
            ExportFormat::Pdf => export_pdf(
                &summary_table(&summary, Money::Currency(&cfg.currency_symbol), &title),
                &path,
            )?,
        }

        Ok(())
    }
}

/// Summary title built from the selected period.
fn build_summary_title(period: &Option<String>, company: &str) -> String {
    let base = match period.as_deref().map(str::trim) {
        None => "Extras".to_string(),
        Some(p) if p.eq_ignore_ascii_case("all") => "Extras".to_string(),
        Some(p) => match p.len() {
            4 => format!("Extras {}", p),
            7 => match p.split_once('-') {
                Some((year, month)) => format!("Extras {} {}", month_name(month), year),
                None => "Extras".to_string(),
            },
            10 => format!("Extras {}", br_date(p)),
            _ => match p.split_once(':') {
                Some((a, b)) if a.len() == 10 => {
                    format!("Extras {} a {}", br_date(a), br_date(b))
                }
                Some((a, b)) => format!("Extras {} a {}", a, b),
                None => "Extras".to_string(),
            },
        },
    };

    if company.trim().is_empty() {
        base
    } else {
        format!("{} - {}", company.trim(), base)
    }
}

fn br_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
