use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for extrapay
#[derive(Parser)]
#[command(
    name = "extrapay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage extra-worker requests, gate clock-in/out and payroll receipts",
    long_about = None
)]
pub struct Cli {
    /// Override the requests data file (useful for tests or custom files)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Create a new extra request (status SOLICITADO)
    New {
        #[arg(long, help = "Worker (extra) name")]
        worker: String,

        #[arg(long, default_value = "")]
        sector: String,

        #[arg(long, default_value = "")]
        role: String,

        #[arg(long, default_value = "")]
        requester: String,

        #[arg(long, default_value = "")]
        leader: String,

        #[arg(long, default_value = "")]
        reason: String,

        /// Pay per day (combinado) or per standard 7h20 shift (hourly)
        #[arg(long)]
        value: f64,

        #[arg(long, help = "Fixed value per work day instead of hourly pay")]
        combinado: bool,

        #[arg(
            long = "consolidated",
            help = "Consolidated total overriding any per-day computation"
        )]
        consolidated: Option<f64>,

        /// Work day, repeatable: YYYY-MM-DD or YYYY-MM-DD=SHIFT
        #[arg(long = "day", required = true)]
        days: Vec<String>,
    },

    /// Approve a request
    Approve {
        /// Request code (EXT-00001) or numeric id
        id: String,
    },

    /// Reject a request
    Reject {
        /// Request code (EXT-00001) or numeric id
        id: String,
    },

    /// Cancel a request
    Cancel {
        /// Request code (EXT-00001) or numeric id
        id: String,
    },

    /// Register gate (portaria) clock events on a work day
    Clock {
        /// Request code (EXT-00001) or numeric id
        id: String,

        /// Work day (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Arrival time (HH:MM)")]
        arrival: Option<String>,

        #[arg(long = "break-start", help = "Break start (HH:MM)")]
        break_start: Option<String>,

        #[arg(long = "break-end", help = "Break end (HH:MM)")]
        break_end: Option<String>,

        #[arg(long = "out", help = "Departure time (HH:MM)")]
        departure: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite events already registered")]
        force: bool,
    },

    /// List requests with worked hours and values
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Status filter (SOLICITADO, APROVADO, ... or all)")]
        status: Option<String>,

        #[arg(long)]
        sector: Option<String>,

        #[arg(long = "details", help = "Show per-day receipt rows")]
        details: bool,
    },

    /// Export the receipt (recibo) of one request
    Receipt {
        /// Request code (EXT-00001) or numeric id
        id: String,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the summary of requests grouped by sector
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Status filter (SOLICITADO, APROVADO, ... or all)")]
        status: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },
}
