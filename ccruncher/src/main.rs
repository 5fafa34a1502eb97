use ccruncher_core::cli::{self, ReportOverrides};
use ccruncher_core::logging::init_logging;
use ccruncher_core::report::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ccruncher",
    version,
    about = "ccruncher: group Cloud Controller logs by app and request"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a per-app, per-request timeline report
    Report {
        /// Log file, one JSON object per line
        file: PathBuf,

        /// Path to a ccruncher.toml config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with_all = ["yaml", "pretty"])]
        json: bool,

        /// Output as YAML
        #[arg(long, conflicts_with = "pretty")]
        yaml: bool,

        /// Output as a plain-text timeline
        #[arg(long)]
        pretty: bool,

        /// Keep lines that could not be tied to an app
        #[arg(long)]
        include_unspecified: bool,
    },

    /// List the app guids found in a log
    Apps {
        file: PathBuf,

        #[arg(long)]
        include_unspecified: bool,
    },

    /// List the request ids issued against one app
    Requests {
        file: PathBuf,

        #[arg(long)]
        app: String,
    },

    /// Print the entries of one request
    Entries {
        file: PathBuf,

        #[arg(long)]
        request: String,

        /// Output format: yaml, json or pretty
        #[arg(long, default_value = "pretty")]
        format: ReportFormat,
    },
}

fn format_flag(json: bool, yaml: bool, pretty: bool) -> Option<ReportFormat> {
    if json {
        Some(ReportFormat::Json)
    } else if yaml {
        Some(ReportFormat::Yaml)
    } else if pretty {
        Some(ReportFormat::Pretty)
    } else {
        None
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Report {
            file,
            config,
            output,
            json,
            yaml,
            pretty,
            include_unspecified,
        } => cli::run_report(
            &file,
            ReportOverrides {
                config,
                output,
                format: format_flag(json, yaml, pretty),
                include_unspecified,
            },
        ),

        Command::Apps {
            file,
            include_unspecified,
        } => cli::run_apps(&file, include_unspecified),

        Command::Requests { file, app } => cli::run_requests(&file, &app),

        Command::Entries {
            file,
            request,
            format,
        } => cli::run_entries(&file, &request, format),
    };

    if let Err(e) = result {
        eprintln!("ccruncher error: {e:#}");
        std::process::exit(1);
    }
}
