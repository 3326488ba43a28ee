use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RequestStore;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = RequestStore::open(&cfg.data_file)?;

        if store.log.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec![
                Column::left("Date"),
                Column::left("Operation"),
                Column::left("Target"),
                Column::left("Message"),
            ],
            sep,
        );

        for entry in &store.log {
            // date is RFC 3339: keep "YYYY-MM-DDTHH:MM:SS"
            let date: String = entry.date.chars().take(19).collect();
            table.add_row(vec![
                date.replace('T', " "),
                entry.operation.clone(),
                entry.target.clone(),
                entry.message.clone(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
