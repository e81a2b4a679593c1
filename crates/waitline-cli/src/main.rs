//! waitline command line: run signups through the submission pipeline,
//! inspect the local waitlist, export it as CSV.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use waitline_page::{SignupForm, SubmitOutcome};
use waitline_page::view::{DUPLICATE_EMAIL_MESSAGE, INVALID_EMAIL_MESSAGE};
use waitline_store::WaitlistStore;
use waitline_sync::{ENDPOINT_PLACEHOLDER, SheetClient};

mod display;
mod export;

#[derive(Parser)]
#[command(name = "waitline")]
#[command(about = "Waitlist signups from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the local waitlist blobs.
    #[arg(long, env = "WAITLINE_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one signup through the submission pipeline.
    Submit {
        email: String,

        /// Sheet endpoint URL; leaving the placeholder disables delivery.
        #[arg(long, env = "WAITLINE_ENDPOINT", default_value = ENDPOINT_PLACEHOLDER)]
        endpoint: String,

        /// Give up on delivery after this many seconds instead of waiting
        /// indefinitely.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Write the local waitlist to a dated CSV file.
    Export {
        /// Output directory for the CSV file.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Dump the local waitlist count and contents.
    Admin,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt::init();
    tracing::info!("waitline v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let store = WaitlistStore::open(&data_dir)?;

    match cli.command {
        Command::Submit {
            email,
            endpoint,
            timeout_secs,
        } => {
            let client = SheetClient::configured(&endpoint).map(|client| match timeout_secs {
                Some(secs) => client.with_timeout(Duration::from_secs(secs)),
                None => client,
            });
            let mut form = SignupForm::new(store, client, "Join the waitlist");
            match form.submit(&email).await? {
                SubmitOutcome::Accepted { delivered } => {
                    display::print_submit_result(email.trim(), delivered);
                }
                SubmitOutcome::Invalid => anyhow::bail!("{INVALID_EMAIL_MESSAGE}"),
                SubmitOutcome::Duplicate => anyhow::bail!("{DUPLICATE_EMAIL_MESSAGE}"),
            }
        }

        Command::Export { out_dir } => {
            let outcome = export::export_waitlist(&store, &out_dir)?;
            display::print_export_outcome(&outcome);
        }

        Command::Admin => {
            let signups = store.signups()?;
            display::print_waitlist_dump(&signups);
        }
    }

    Ok(())
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("no data directory available on this platform")?;
    Ok(base.join("waitline"))
}
