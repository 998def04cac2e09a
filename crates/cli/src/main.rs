//! Sales Dashboard terminal entry point

mod commands;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::mpsc::{self, UnboundedSender};

use sales_dashboard_core::models::fetch::FetchOutcome;
use sales_dashboard_core::models::settings::Settings;
use sales_dashboard_core::models::slot::SlotUpdate;
use sales_dashboard_core::providers::http::HttpDashboardApi;
use sales_dashboard_core::providers::traits::DashboardApi;
use sales_dashboard_core::services::fetch_service::DashboardFetcher;
use sales_dashboard_core::Dashboard;

use sales_dashboard_core::render::month::render_month_selector;

use crate::commands::{next_command_line, parse_command, Command, HELP};

#[derive(Parser, Debug)]
#[command(name = "sales-dashboard")]
#[command(version, about = "Transactions, statistics and price ranges from the products API", long_about = None)]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the products API, overrides the settings file
    #[arg(long)]
    base_url: Option<String>,

    /// Fetch once, print the dashboard and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(url) = args.base_url {
        settings.api_base_url = url;
        settings.validate().context("Invalid --base-url")?;
    }
    let http = HttpDashboardApi::from_settings(&settings);
    info!("Using products API at {}", http.base_url());

    let api: Arc<dyn DashboardApi> = Arc::new(http);
    let fetcher = Arc::new(DashboardFetcher::new(api));
    let mut dashboard = Dashboard::from_settings(&settings)?;

    if args.once {
        let plan = dashboard.begin_cycle();
        for outcome in fetcher.fetch_cycle(plan).await {
            dashboard.apply_outcome(outcome);
        }
        println!("{}", dashboard.render());
        return Ok(());
    }

    run_interactive(dashboard, fetcher).await
}

/// Event loop: user commands in, fetch outcomes in, dashboard out.
async fn run_interactive(
    mut dashboard: Dashboard,
    fetcher: Arc<DashboardFetcher>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut pending = Vec::new();

    println!("{}", dashboard.render());
    println!("{HELP}");
    spawn_cycle(&mut dashboard, &fetcher, &tx);

    loop {
        tokio::select! {
            line = next_command_line(&mut stdin, &mut pending) => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        eprintln!("Failed to read input: {e}");
                        break;
                    }
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Empty) => {}
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Show) => println!("{}", dashboard.render()),
                    Ok(Command::ListMonths(section)) => {
                        println!("{}", render_month_selector(section, dashboard.filters()))
                    }
                    Ok(Command::Refresh) => spawn_cycle(&mut dashboard, &fetcher, &tx),
                    Ok(Command::Filter(action)) => {
                        if dashboard.dispatch(action) {
                            spawn_cycle(&mut dashboard, &fetcher, &tx);
                        }
                    }
                    Err(e) => eprintln!("{e} (type 'help' for commands)"),
                }
            }
            Some(outcome) = rx.recv() => {
                if dashboard.apply_outcome(outcome) == SlotUpdate::Applied {
                    println!("{}", dashboard.render());
                }
            }
        }
    }

    Ok(())
}

/// Start a fetch cycle for the current filters without waiting for it.
fn spawn_cycle(
    dashboard: &mut Dashboard,
    fetcher: &Arc<DashboardFetcher>,
    tx: &UnboundedSender<FetchOutcome>,
) {
    let plan = dashboard.begin_cycle();
    let fetcher = Arc::clone(fetcher);
    let tx = tx.clone();
    tokio::spawn(async move {
        fetcher.run_cycle(plan, &tx).await;
    });
}
