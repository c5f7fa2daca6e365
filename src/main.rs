// Entrypoint for the bulk loader.
// - Keeps `main` small: load the batch, build the client, hand both to
//   the report loop.
// - A batch that cannot be loaded aborts with a non-zero exit before any
//   request is sent. Per-record failures never change the exit code.

use anyhow::Context;
use clap::Parser;
use employee_bulk_loader::{api::ApiClient, batch, ui};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "employee-bulk-loader", about = "Create employees in bulk from a JSON file")]
struct Cli {
    /// JSON array of employee objects [default: employees.json next to the binary]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => batch::default_batch_path()?,
    };

    let employees = batch::load_batch(&path).with_context(|| format!("Unable to read {}", path.display()))?;

    let api = ApiClient::new()?;
    let stdout = std::io::stdout();
    ui::run(&api, &employees, &mut stdout.lock())?;
    Ok(())
}
