use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use log::error;

use parcel_dash::analyzer::RangeKey;
use parcel_dash::commands::{api_logs, customers, dashboard, parcels};
use parcel_dash::filters::{ApiLogFilters, ParcelFilters};
use parcel_dash::model::parse_timestamp;
use parcel_dash::source::{Criteria, EntityKind, SortSpec};
use parcel_dash::{AppError, AppState};

#[derive(Parser)]
#[command(name = "parcel-dash")]
#[command(about = "Dashboard analytics over a parcel-logistics snapshot")]
struct Cli {
    #[arg(short, long, help = "Snapshot directory (parcels, customers, api_logs, tracking_events)")]
    data: PathBuf,

    #[arg(short, long, help = "Path to a JSON configuration file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Reference time for date ranges (defaults to now, UTC)")]
    now: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summary cards, breakdowns, growth and recent parcels
    Dashboard {
        #[arg(short, long, help = "today, week, month, quarter or year")]
        range: Option<String>,
    },
    /// One page of the parcel table
    Parcels {
        #[arg(long)]
        tracking_number: Option<String>,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        carrier: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// A parcel with its tracking events and API logs
    Parcel { id: String },
    /// Customer table with parcel totals
    Customers {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// API log table, stats and sources
    Logs {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "all")]
        direction: String,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long)]
        source: Option<String>,
    },
    /// Raw records of one entity
    List {
        entity: String,
        #[arg(long, help = "Field to sort on, prefixed with '-' for descending")]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Records of one entity whose fields equal the given values
    Filter {
        entity: String,
        #[arg(long = "where", value_name = "FIELD=VALUE")]
        terms: Vec<String>,
        #[arg(long, help = "Field to sort on, prefixed with '-' for descending")]
        sort: Option<String>,
    },
}

fn reference_time(now: Option<&str>) -> Result<NaiveDateTime, AppError> {
    match now {
        Some(raw) => parse_timestamp(raw).ok_or_else(|| AppError::InvalidTimestamp(raw.to_string())),
        None => Ok(chrono::Utc::now().naive_utc()),
    }
}

fn run(cli: Cli) -> Result<String, AppError> {
    let now = reference_time(cli.now.as_deref())?;
    let state = AppState::load(&cli.data, cli.config.as_deref())?;

    let output = match cli.command {
        Command::Dashboard { range } => {
            let range = match range {
                Some(r) => r.parse::<RangeKey>()?,
                None => state.config.default_range,
            };
            serde_json::to_string_pretty(&dashboard::build_dashboard(&state, range, now))?
        }
        Command::Parcels {
            tracking_number,
            customer,
            carrier,
            status,
            country,
            page,
        } => {
            let filters = ParcelFilters {
                tracking_number,
                customer,
                carrier,
                status,
                country,
            };
            serde_json::to_string_pretty(&parcels::list_parcels(&state, &filters, page))?
        }
        Command::Parcel { id } => serde_json::to_string_pretty(&parcels::parcel_detail(&state, &id)?)?,
        Command::Customers { search } => {
            serde_json::to_string_pretty(&customers::list_customers(&state, &search))?
        }
        Command::Logs {
            search,
            direction,
            status,
            source,
        } => {
            let filters = ApiLogFilters {
                search,
                direction: direction.parse()?,
                status: status.parse()?,
                source,
            };
            serde_json::to_string_pretty(&api_logs::list_api_logs(&state, &filters))?
        }
        Command::List {
            entity,
            sort,
            limit,
        } => {
            let kind: EntityKind = entity.parse()?;
            let sort = sort.map(|s| s.parse::<SortSpec>()).transpose()?;
            serde_json::to_string_pretty(&state.source.list_json(kind, sort.as_ref(), limit)?)?
        }
        Command::Filter { entity, terms, sort } => {
            let kind: EntityKind = entity.parse()?;
            let criteria = Criteria::from_terms(terms.iter().map(String::as_str))?;
            let sort = sort.map(|s| s.parse::<SortSpec>()).transpose()?;
            serde_json::to_string_pretty(&state.source.filter_json(kind, &criteria, sort.as_ref())?)?
        }
    };
    Ok(output)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}
