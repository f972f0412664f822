//! Command-line entry point: runs the HTTP API or a one-off assessment.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use pension_bridge::api::{
    AppState, AssessmentRequest, IncentiveRequest, ProfileRequest, create_router,
};
use pension_bridge::calculation::assess;
use pension_bridge::config::ConfigLoader;
use pension_bridge::error::EngineError;
use pension_bridge::models::{ContributionScheme, EmploymentSituation, Gender, Region};
use pension_bridge::report::render_text_report;
use pension_bridge::telemetry::{self, TelemetryError};

const DEFAULT_CONFIG_DIR: &str = "./config/italy_2025";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "pension-bridge",
    about = "Estimate retirement dates, bridge income and severance incentives",
    version
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a single assessment and print the report
    Assess(AssessArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 3000)]
    port: u16,
    /// Rule-set directory
    #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
    config: PathBuf,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            config: PathBuf::from(DEFAULT_CONFIG_DIR),
        }
    }
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Age in years
    #[arg(long)]
    age: u32,
    /// Gender category (male or female)
    #[arg(long)]
    gender: Gender,
    /// Region of residence
    #[arg(long)]
    region: Region,
    /// Contribution scheme
    #[arg(long, default_value = "private_employee")]
    scheme: ContributionScheme,
    /// Years of contributions
    #[arg(long)]
    contribution_years: u32,
    /// Gross annual salary in euro
    #[arg(long)]
    salary: Decimal,
    /// Early-career worker
    #[arg(long)]
    early_career: bool,
    /// Hazardous occupation
    #[arg(long)]
    hazardous: bool,
    /// Unemployed or at risk of unemployment
    #[arg(long)]
    unemployed: bool,
    /// Caring for a disabled family member
    #[arg(long)]
    caregiver: bool,
    /// Civil invalidity of at least 74%
    #[arg(long)]
    disabled: bool,
    /// Months of contributions in the last four years
    #[arg(long, default_value_t = 48)]
    trailing_months: u32,
    /// Complementary pension fund capital
    #[arg(long, default_value = "0")]
    capital: Decimal,
    /// Negotiated incentive; computed when omitted
    #[arg(long)]
    incentive: Option<Decimal>,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Print the assessment as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Rule-set directory
    #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
    config: PathBuf,
}

impl AssessArgs {
    fn to_request(&self) -> AssessmentRequest {
        AssessmentRequest {
            profile: ProfileRequest {
                age: self.age,
                gender: self.gender,
                region: self.region,
                contribution_scheme: self.scheme,
                contribution_years: self.contribution_years,
                early_career: self.early_career,
                hazardous_occupation: self.hazardous,
                gross_annual_salary: self.salary,
            },
            situation: EmploymentSituation {
                unemployed: self.unemployed,
                caregiver: self.caregiver,
                disabled: self.disabled,
                trailing_contribution_months: self.trailing_months,
            },
            complementary_pension_capital: self.capital,
            incentive: IncentiveRequest {
                auto_calculate: self.incentive.is_none(),
                proposed_amount: self.incentive,
            },
            evaluation_date: self.date,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assessment(&args),
    }
}

async fn run_server(args: ServeArgs) -> Result<(), CliError> {
    let config = ConfigLoader::load(&args.config)?;
    info!(
        regime = %config.regime().code,
        regions = config.regional_costs().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Pension bridge API listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assessment(args: &AssessArgs) -> Result<(), CliError> {
    let config = ConfigLoader::load(&args.config)?;
    let (input, warnings) = args.to_request().into_input(Local::now().date_naive())?;
    let assessment = assess(&input, config.regional_costs(), warnings);

    info!(
        assessment_id = %assessment.assessment_id,
        earliest_date = %assessment.retirement.earliest_date,
        "Assessment completed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render_text_report(&assessment));
    }
    Ok(())
}
