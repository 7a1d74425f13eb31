//! `ticketdash`: terminal views over the ticket metrics API.
//!
//! ```bash
//! ticketdash dashboard --start 2024-01-01 --end 2024-01-31
//! ticketdash technicians --level senior --search ana
//! ticketdash tickets --priority Alta
//! ticketdash status
//! ```

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use ticketdash_core::app_state::{build_app_state, AppState};
use ticketdash_core::core::config::AppConfig;
use ticketdash_core::core::logging::init_tracing;
use ticketdash_core::core::state::page::page_state::PageState;
use ticketdash_core::core::util::format_util::FormatUtil;
use ticketdash_core::domain::dashboard::dto::filter_set::FilterSet;
use ticketdash_core::ui::components::date_range_picker::parse_date_input;
use ticketdash_core::ui::pages::dashboard_page::{self, DashboardPage};
use ticketdash_core::ui::pages::technical_groups_page::{self, TechnicalGroupsPage};
use ticketdash_core::ui::pages::technicians_page::{self, TechniciansPage};
use ticketdash_core::ui::pages::tickets_page::{self, TicketsPage};

#[derive(Parser)]
#[command(name = "ticketdash")]
#[command(version)]
#[command(about = "Ticket metrics dashboard for GLPI", long_about = None)]
struct Cli {
    /// API base URL; overrides TICKETDASH_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct DateRange {
    /// First day, YYYY-MM-DD
    #[arg(long, value_parser = parse_day)]
    start: Option<NaiveDate>,
    /// Last day, YYYY-MM-DD
    #[arg(long, value_parser = parse_day)]
    end: Option<NaiveDate>,
}

impl DateRange {
    /// The page's default window, with any bound given on the command line replaced.
    fn filters(&self, default_days: i64) -> FilterSet {
        let mut filters = FilterSet::last_days(AppState::today(), default_days);
        if let Some(start) = self.start {
            filters.start_date = Some(FormatUtil::iso_date(start));
        }
        if let Some(end) = self.end {
            filters.end_date = Some(FormatUtil::iso_date(end));
        }
        filters
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    parse_date_input(raw)?.ok_or_else(|| "empty date".to_string())
}

#[derive(Subcommand)]
enum Commands {
    /// Headline metrics, charts and the technical group breakdown
    Dashboard {
        #[command(flatten)]
        range: DateRange,
    },
    /// Technician ranking
    Technicians {
        #[command(flatten)]
        range: DateRange,
        /// senior, pleno or junior
        #[arg(long)]
        level: Option<String>,
        /// Match on name or email
        #[arg(long)]
        search: Option<String>,
    },
    /// Recent tickets
    Tickets {
        #[command(flatten)]
        range: DateRange,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        technician: Option<String>,
        /// Match on title, content or requester
        #[arg(long)]
        search: Option<String>,
    },
    /// Test the backend connection
    Status,
    /// Technical group breakdown only
    Groups {
        #[command(flatten)]
        range: DateRange,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_base_url(url)?;
    }
    let _guard = init_tracing(&config);
    config.log_sources();

    let state = build_app_state(config)?;
    info!(command = command_name(&cli.command), "Starting");

    let any_failed = match cli.command {
        Commands::Dashboard { range } => {
            let dashboard = DashboardPage::with_filters(
                state.api.clone(),
                range.filters(dashboard_page::DEFAULT_RANGE_DAYS),
            );
            let groups = TechnicalGroupsPage::with_filters(
                state.api.clone(),
                range.filters(technical_groups_page::DEFAULT_RANGE_DAYS),
            );
            let (metrics, breakdown) = futures::join!(dashboard.load(), groups.load());
            println!("{}\n\n{}", dashboard.render().await, groups.render().await);
            failed(&metrics) || failed(&breakdown)
        }
        Commands::Technicians {
            range,
            level,
            search,
        } => {
            let mut filters = range.filters(technicians_page::DEFAULT_RANGE_DAYS);
            filters.level = level.filter(|l| !l.is_empty());
            let page = TechniciansPage::with_filters(state.api.clone(), filters);
            if let Some(term) = search {
                page.set_search(term).await;
            }
            let result = page.load().await;
            println!("{}", page.render().await);
            failed(&result)
        }
        Commands::Tickets {
            range,
            status,
            priority,
            technician,
            search,
        } => {
            let mut filters = range.filters(tickets_page::DEFAULT_RANGE_DAYS);
            filters.status = status.filter(|s| !s.is_empty());
            filters.priority = priority.filter(|p| !p.is_empty());
            filters.technician = technician.filter(|t| !t.is_empty());
            let page = TicketsPage::with_filters(state.api.clone(), filters);
            if let Some(term) = search {
                page.set_search(term).await;
            }
            let result = page.load().await;
            println!("{}", page.render().await);
            failed(&result)
        }
        Commands::Status => {
            let page = state.settings_page();
            let result = page.test_connection().await;
            println!("{}", page.render().await);
            failed(&result)
        }
        Commands::Groups { range } => {
            let page = TechnicalGroupsPage::with_filters(
                state.api.clone(),
                range.filters(technical_groups_page::DEFAULT_RANGE_DAYS),
            );
            let result = page.load().await;
            println!("{}", page.render().await);
            failed(&result)
        }
    };

    if any_failed {
        error!("Request failed");
        bail!("could not load data from {}", state.config.api_base_url);
    }
    Ok(())
}

fn failed<T>(state: &PageState<T>) -> bool {
    state.error().is_some()
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Dashboard { .. } => "dashboard",
        Commands::Technicians { .. } => "technicians",
        Commands::Tickets { .. } => "tickets",
        Commands::Status => "status",
        Commands::Groups { .. } => "groups",
    }
}
