use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};

use ynab_template::cli::{handle_check, handle_compute, handle_create, handle_show, ConnectOptions};
use ynab_template::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "ynab-template",
    version,
    about = "Compute monthly YNAB category allocations from a template",
    long_about = "ynab-template reads an allocation template of fixed amounts and \
                  percentages, resolves it against this month's To Be Budgeted \
                  amount (or a total you supply), and can push the results to YNAB.",
    group(ArgGroup::new("mode").args(["create", "show", "check"]))
)]
struct Cli {
    /// Template file (YAML)
    #[arg(required_unless_present = "show")]
    template: Option<PathBuf>,

    /// Create an empty template from the budget's visible categories
    #[arg(short, long)]
    create: bool,

    /// Show budgeted, activity and balance for each category
    #[arg(short, long)]
    show: bool,

    /// Check the template against a total (e.g. "2000" or "2000.50") without updating
    #[arg(long, value_name = "AMOUNT")]
    check: Option<String>,

    /// Push the computed amounts to YNAB
    #[arg(short, long, conflicts_with = "mode")]
    update: bool,

    /// Trace each category as it is resolved
    #[arg(short, long)]
    verbose: bool,

    /// Credentials file (defaults to credentials.json in the config directory)
    #[arg(long, env = "YNAB_TEMPLATE_CREDENTIALS", value_name = "PATH")]
    credentials: Option<PathBuf>,

    /// Budget name (defaults to the configured name, "My Budget")
    #[arg(short, long, value_name = "NAME")]
    budget: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ConnectOptions {
        credentials: cli.credentials,
        budget: cli.budget,
    };

    if cli.show {
        handle_show(&options)?;
        return Ok(());
    }

    // clap guarantees a template path unless --show was given
    let Some(template) = cli.template else {
        anyhow::bail!("a template path is required");
    };

    if cli.create {
        handle_create(&template, &options)?;
    } else if let Some(amount) = cli.check {
        handle_check(&template, &amount)?;
    } else {
        handle_compute(&template, cli.update, &options)?;
    }

    Ok(())
}
