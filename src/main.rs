use clap::{Parser, Subcommand};
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};

use paisapop::api::{
    self, BasketPayload, FunFundPayload, GoalPayload, InflationPayload, LoanPayload,
    RequestError, RunwayPayload, SavingsPayload, TaxPayload,
};

#[derive(Parser, Debug)]
#[command(name = "paisapop", about = "Personal finance calculators for Indian households")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the calculators over HTTP.
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Compare income tax under both regimes.
    Tax(TaxPayload),
    /// Project one price forward under inflation.
    Inflation(InflationPayload),
    /// Project the household basket forward under inflation.
    Basket(BasketPayload),
    /// Size the monthly SIP for an inflated goal.
    Goal(GoalPayload),
    /// Plain monthly savings for an inflated purchase.
    Savings(SavingsPayload),
    /// Pick which loan to prepay with a surplus.
    Loan(LoanPayload),
    /// Estimate the cost and runway of a career break.
    Runway(RunwayPayload),
    /// Guilt-free spending left after fixed costs and investments.
    FunFund(FunFundPayload),
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port } => {
            if let Err(e) = api::run_http_server(SocketAddr::new(host, port)).await {
                log::error!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Tax(payload) => print_json(api::tax_response(payload)),
        Command::Inflation(payload) => print_json(api::inflation_response(payload)),
        Command::Basket(payload) => print_json(api::basket_response(payload)),
        Command::Goal(payload) => print_json(api::goal_response(payload)),
        Command::Savings(payload) => print_json(api::savings_response(payload)),
        Command::Loan(payload) => print_json(api::loan_response(payload)),
        Command::Runway(payload) => print_json(api::runway_response(payload)),
        Command::FunFund(payload) => print_json(api::fun_fund_response(payload)),
    }
}

fn print_json<T: Serialize>(result: Result<T, RequestError>) {
    let body = match result {
        Ok(body) => body,
        Err(e) => {
            eprintln!("Invalid input: {e}");
            std::process::exit(2);
        }
    };
    match serde_json::to_string_pretty(&body) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to encode result: {e}");
            std::process::exit(1);
        }
    }
}
