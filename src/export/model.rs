// src/export/model.rs

use crate::core::receipt::{Receipt, ReceiptRow};
use crate::core::summary::Summary;
use crate::utils::formatting::format_optional_currency;

/// Format-independent table handed to the CSV / XLSX / PDF writers.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExportTable {
    pub title: String,
    /// Label/value lines printed above the table (PDF, XLSX).
    pub preamble: Vec<(String, String)>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Indexes of subtotal/total rows, drawn highlighted.
    pub emphasis: Vec<usize>,
}

/// How money cells are written: bare numbers for spreadsheets and CSV,
/// currency strings for printed documents.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Money<'a> {
    Plain,
    Currency(&'a str),
}

impl Money<'_> {
    fn cell(&self, amount: Option<i64>) -> String {
        match self {
            Money::Plain => amount.map(|a| a.to_string()).unwrap_or_default(),
            Money::Currency(symbol) => format_optional_currency(symbol, amount),
        }
    }
}

pub(crate) fn receipt_headers() -> Vec<&'static str> {
    vec![
        "Data", "Entrada", "Início intervalo", "Fim intervalo", "Saída", "Horas", "Valor",
    ]
}

pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec!["Código", "Extra", "Período", "Setor", "Tipo", "Horas", "Valor"]
}

fn receipt_row_cells(row: &ReceiptRow, money: Money) -> Vec<String> {
    vec![
        row.date.clone(),
        row.arrival.clone(),
        row.break_start.clone(),
        row.break_end.clone(),
        row.departure.clone(),
        row.hours.clone(),
        money.cell(row.value),
    ]
}

pub(crate) fn receipt_table(receipt: &Receipt, money: Money, company: &str) -> ExportTable {
    let mut rows: Vec<Vec<String>> = receipt
        .rows
        .iter()
        .map(|r| receipt_row_cells(r, money))
        .collect();
    rows.push(receipt_row_cells(&receipt.total, money));

    let title = if company.trim().is_empty() {
        format!("Recibo {}", receipt.code)
    } else {
        format!("{} - Recibo {}", company.trim(), receipt.code)
    };

    ExportTable {
        title,
        preamble: vec![
            ("Extra".into(), receipt.worker_name.clone()),
            ("Setor".into(), receipt.sector.clone()),
            ("Função".into(), receipt.role.clone()),
            ("Solicitante".into(), receipt.requester.clone()),
            ("Líder".into(), receipt.leader.clone()),
            ("Tipo".into(), receipt.value_label.clone()),
            ("Motivo".into(), receipt.reason.clone()),
        ],
        headers: receipt_headers(),
        emphasis: vec![rows.len() - 1],
        rows,
    }
}

pub(crate) fn summary_table(summary: &Summary, money: Money, title: &str) -> ExportTable {
    let mut rows = Vec::new();
    let mut emphasis = Vec::new();

    for group in &summary.groups {
        for r in &group.rows {
            rows.push(vec![
                r.code.clone(),
                r.worker.clone(),
                r.period.clone(),
                r.sector.clone(),
                r.value_type.clone(),
                r.hours.clone(),
                money.cell(Some(r.value)),
            ]);
        }

        emphasis.push(rows.len());
        rows.push(vec![
            String::new(),
            format!("Subtotal {}", group.sector),
            String::new(),
            String::new(),
            String::new(),
            group.subtotal_hours.clone(),
            money.cell(Some(group.subtotal_value)),
        ]);
    }

    emphasis.push(rows.len());
    rows.push(vec![
        String::new(),
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        summary.total_hours.clone(),
        money.cell(Some(summary.total_value)),
    ]);

    ExportTable {
        title: title.to_string(),
        preamble: Vec::new(),
        headers: summary_headers(),
        rows,
        emphasis,
    }
}
