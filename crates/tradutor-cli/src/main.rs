mod display;
mod input;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tradutor_core::ContractType;

#[derive(Parser)]
#[command(name = "tradutor", version, about = "Plain-language risk reports for contract text")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse a document and print its risk report.
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short, long, value_enum, default_value_t = Format::Card, env = "TRADUTOR_FORMAT")]
        format: Format,
    },
    /// Analyse a document and print its audit token records as JSON lines.
    Tokens {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, env = "TRADUTOR_USER_ID")]
        user_id: String,

        #[arg(long)]
        document_id: String,
    },
    /// Print the keyword guess of a document's contract type.
    Classify {
        /// Page text files, in order. Reads stdin when omitted.
        files: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Page text files, in order. Reads stdin when omitted.
    files: Vec<PathBuf>,

    /// Contract type tag. Unrecognised tags use the generic analysis.
    #[arg(short = 't', long = "type", env = "TRADUTOR_CONTRACT_TYPE")]
    contract_type: Option<String>,

    /// Guess the contract type from keywords when no tag is given.
    #[arg(long)]
    guess: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Card,
    Chat,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::info!("tradutor v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Analyze { source, format } => {
            let text = input::read_document(&source.files)?;
            let contract_type = resolve_contract_type(&source, &text);
            let analysis = tradutor_engine::analyze(&text, contract_type);

            match format {
                Format::Card => display::write_card(
                    &mut std::io::stdout().lock(),
                    contract_type,
                    &analysis.report,
                )
                .context("writing report card")?,
                Format::Chat => println!("{}", display::chat_message(contract_type, &analysis.report)),
                Format::Json => {
                    let json = serde_json::to_string_pretty(&analysis)
                        .context("serialising analysis")?;
                    println!("{json}");
                }
            }
        }
        Command::Tokens {
            source,
            user_id,
            document_id,
        } => {
            let text = input::read_document(&source.files)?;
            let contract_type = resolve_contract_type(&source, &text);
            let analysis = tradutor_engine::analyze(&text, contract_type);
            let recorded_at = chrono::Utc::now().to_rfc3339();

            for token in analysis.tokens {
                let record =
                    token.into_record(&user_id, &document_id, contract_type, &recorded_at);
                let line = serde_json::to_string(&record).context("serialising token record")?;
                println!("{line}");
            }
        }
        Command::Classify { files } => {
            let text = input::read_document(&files)?;
            println!("{}", tradutor_engine::guess_contract_type(&text));
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// An explicit tag wins; otherwise guess when asked, else generic.
fn resolve_contract_type(source: &SourceArgs, text: &str) -> ContractType {
    match source.contract_type.as_deref() {
        Some(tag) => tag.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to generic analysis");
            ContractType::Other
        }),
        None if source.guess => tradutor_engine::guess_contract_type(text),
        None => ContractType::Other,
    }
}
