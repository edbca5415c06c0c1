use crate::infra::{build_service, parse_decimal};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mortgage_check::config::AppConfig;
use mortgage_check::error::AppError;
use mortgage_check::mortgage::MortgageRequest;
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(
    name = "Mortgage Check",
    about = "Check mortgage affordability and serve the mortgage API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single mortgage request and print the outcome
    Check(CheckArgs),
    /// Print the configured interest rate table
    Rates,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Gross yearly income of the borrower
    #[arg(long, value_parser = parse_decimal)]
    income: Decimal,
    /// Loan term in years
    #[arg(long, allow_negative_numbers = true)]
    term: i32,
    /// Requested loan amount
    #[arg(long, value_parser = parse_decimal)]
    loan: Decimal,
    /// Value of the home being bought
    #[arg(long, value_parser = parse_decimal)]
    home: Decimal,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Rates => run_rates(),
    }
}

fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config.rates)?;

    let request = MortgageRequest {
        income: args.income,
        term_years: args.term,
        loan_value: args.loan,
        home_value: args.home,
    };
    let outcome = service.check(&request);

    println!("Mortgage check");
    println!(
        "Income {}, loan {}, home value {}, term {} years",
        request.income, request.loan_value, request.home_value, request.term_years
    );
    if outcome.feasible {
        println!("Feasible: monthly payment {}", outcome.monthly_payment);
    } else {
        println!("Not feasible: {}", outcome.reason);
    }

    Ok(())
}

fn run_rates() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config.rates)?;

    println!("Interest rates ({})", config.rates.source().describe());
    for rate in service.interest_rates() {
        println!("- {} years: {}%", rate.term_years, rate.annual_rate_percent);
    }

    Ok(())
}
