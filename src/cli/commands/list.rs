use crate::cli::commands::resolve_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::receipt::build_receipt;
use crate::core::summary::{SummaryFilter, build_summary};
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::ExtraRequest;
use crate::store::RequestStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{
    bold, format_currency, format_hours_decimal, format_optional_currency,
};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        status,
        sector,
        details,
    } = cmd
    {
        let store = RequestStore::open(&cfg.data_file)?;

        let range = match period.as_deref() {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        let filter = SummaryFilter {
            status: resolve_status(status, cfg)?,
            sector: sector.clone(),
            range,
        };

        let summary = build_summary(&store.requests, &filter);
        if summary.is_empty() {
            info("No requests found for the selected filters.");
            return Ok(());
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let symbol = cfg.currency_symbol.as_str();

        for group in &summary.groups {
            let title = if group.sector.is_empty() {
                "(no sector)"
            } else {
                group.sector.as_str()
            };
            header(title);

            let mut table = Table::new(
                vec![
                    Column::left("Code"),
                    Column::left("Worker"),
                    Column::left("Period"),
                    Column::left("Type"),
                    Column::left("Status"),
                    Column::right("Days"),
                    Column::right("Hours"),
                    Column::right("Value"),
                ],
                sep,
            );

            for row in &group.rows {
                let req = store.find(&row.code)?;
                let totals = Core::request_totals(req);
                table.add_row(vec![
                    row.code.clone(),
                    row.worker.clone(),
                    row.period.clone(),
                    row.value_type.clone(),
                    req.status.to_string(),
                    format!("{}/{}", totals.complete_days, req.work_days.len()),
                    row.hours.clone(),
                    format_currency(symbol, row.value),
                ]);
            }

            print!("{}", table.render());
            println!(
                "{}",
                bold(&format!(
                    "Subtotal: {} | {}",
                    empty_as_zero(&group.subtotal_hours),
                    format_currency(symbol, group.subtotal_value)
                ))
            );

            if *details {
                for row in &group.rows {
                    print_details(store.find(&row.code)?, cfg);
                }
            }
        }

        println!(
            "\n{}",
            bold(&format!(
                "TOTAL: {} | {}",
                empty_as_zero(&summary.total_hours),
                format_currency(symbol, summary.total_value)
            ))
        );
    }
    Ok(())
}

fn print_details(request: &ExtraRequest, cfg: &Config) {
    let receipt = build_receipt(request);
    let totals = Core::request_totals(request);
    let symbol = cfg.currency_symbol.as_str();

    println!(
        "\n{} {} - {} [{}{}{}] ({}, ~{}h)",
        bold(&receipt.code),
        receipt.worker_name,
        receipt.role,
        color_for_status(request.status),
        request.status,
        RESET,
        format_hours_decimal(totals.hours_decimal),
        totals.hours_whole,
    );

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(
        vec![
            Column::left("Date"),
            Column::left("In"),
            Column::left("Break"),
            Column::left("Back"),
            Column::left("Out"),
            Column::right("Hours"),
            Column::right("Value"),
        ],
        sep,
    );

    for row in receipt.rows.iter().chain(std::iter::once(&receipt.total)) {
        table.add_row(vec![
            row.date.clone(),
            row.arrival.clone(),
            row.break_start.clone(),
            row.break_end.clone(),
            row.departure.clone(),
            row.hours.clone(),
            format_optional_currency(symbol, row.value),
        ]);
    }

    print!("{}", table.render());
}

fn empty_as_zero(hours: &str) -> &str {
    if hours.is_empty() { "00:00" } else { hours }
}
