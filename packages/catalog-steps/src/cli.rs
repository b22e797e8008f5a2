//! Command-line interface for checking the catalog endpoint.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{Environment, PRODUCTS_GROUPED_PATH, PRODUCT_TYPE_PARAM};
use crate::context::ScenarioContext;
use crate::error::Result;
use crate::suite::{run_catalog_checks, verdict, SuiteOptions};
use crate::summary::CatalogSummary;
use crate::table::parse_key_value;

/// Bando catalog checker - run the /products/grouped/ checks from the shell.
#[derive(Parser)]
#[command(name = "bando-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request the grouped catalog and run the standard checks.
    Check(CheckArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct CheckArgs {
    /// API deployment to target
    #[arg(long, value_enum, default_value_t)]
    pub env: Environment,

    /// Explicit API base URL (overrides --env)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Country code filter; also checks every product supports it
    #[arg(long)]
    pub country: Option<String>,

    /// Comma-separated product type filter (e.g. esim,gift_card)
    #[arg(long)]
    pub product_type: Option<String>,

    /// Brand filter
    #[arg(long)]
    pub brand: Option<String>,

    /// Page size
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Page number
    #[arg(long)]
    pub page_number: Option<u32>,

    /// Extra query parameter as KEY=VALUE (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Extra request header as KEY=VALUE (repeatable)
    #[arg(long = "header", value_name = "KEY=VALUE")]
    pub headers: Vec<String>,

    /// Expected HTTP status
    #[arg(long, default_value_t = 200)]
    pub expect_status: u16,

    /// Print a summary of product groups and brands
    #[arg(long)]
    pub summary: bool,
}

impl CheckArgs {
    /// Query parameters implied by the filter flags, followed by `--param`s.
    pub fn query_rows(&self) -> Result<Vec<(String, String)>> {
        let mut rows = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                rows.push((key.to_string(), value));
            }
        };
        push("country", self.country.clone());
        push(PRODUCT_TYPE_PARAM, self.product_type.clone());
        push("brand", self.brand.clone());
        push("pageSize", self.page_size.map(|n| n.to_string()));
        push("pageNumber", self.page_number.map(|n| n.to_string()));

        for raw in &self.params {
            rows.push(parse_key_value(raw)?);
        }
        Ok(rows)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(self.env.base_url())
    }
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => check_command(&args).await,
    }
}

/// Execute the check command.
pub async fn check_command(args: &CheckArgs) -> Result<()> {
    let rows = args.query_rows()?;
    let headers = args
        .headers
        .iter()
        .map(|raw| parse_key_value(raw))
        .collect::<Result<Vec<_>>>()?;

    let mut ctx = ScenarioContext::new();
    ctx.set_base_url(args.base_url())?;
    for (name, value) in &headers {
        ctx.add_header(name, value);
    }
    let authenticated = ctx.add_optional_auth_header();
    let with_params = !rows.is_empty();
    ctx.set_query(rows);

    println!(
        "{} {}{} {}",
        style("Checking").bold(),
        style(ctx.base_url().unwrap_or_default()).cyan(),
        PRODUCTS_GROUPED_PATH,
        if authenticated {
            style("(authenticated)").green()
        } else {
            style("(anonymous)").dim()
        }
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Requesting catalog...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let sent = if with_params {
        ctx.get_with_params(PRODUCTS_GROUPED_PATH).await
    } else {
        ctx.get(PRODUCTS_GROUPED_PATH).await
    };
    pb.finish_and_clear();
    sent?;

    let options = SuiteOptions {
        expected_status: args.expect_status,
        country: args.country.clone(),
    };
    let outcomes = run_catalog_checks(&ctx, &options);

    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("  {} {}", style("PASS").green().bold(), outcome.name),
            Err(e) => {
                println!("  {} {}", style("FAIL").red().bold(), outcome.name);
                println!("       {}", style(e).dim());
            }
        }
    }

    if args.summary {
        println!();
        match ctx.json_body().and_then(|body| CatalogSummary::from_body(&body)) {
            Ok(summary) => {
                println!(
                    "{} {} groups, {} variants",
                    style("Catalog:").bold(),
                    summary.groups.len(),
                    summary.variant_count()
                );
                print!("{summary}");
            }
            Err(e) => {
                println!("{} summary unavailable", style("Catalog:").bold());
                println!("       {}", style(e).dim());
            }
        }
    }

    println!();
    verdict(&outcomes)
}
