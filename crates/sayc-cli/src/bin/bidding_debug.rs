//! Debug driver for the bidding engine: deal (or supply) a board, run
//! the auction to completion, and show every decision with its
//! rationale. `--trace N` dumps the full JSON trace for call N.

use clap::Parser;
use sayc_cli::{
    format_deal_table, format_row, format_table_header, parse_seat, parse_vulnerability,
    random_deal,
};
use sayc_core::{Auction, Deal, Hand, Seat, Vulnerability};
use sayc_engine::{Engine, EngineConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a random deal.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// One hand as a dotted holding, spades first (e.g. "AKQ2.T98.543.J76").
    /// With a hand given, only that seat's next call is shown.
    #[arg(long)]
    hand: Option<String>,

    /// Calls already made, space separated (e.g. "1C P 1S P").
    #[arg(short, long, default_value = "")]
    auction: String,

    /// Dealer seat: N, E, S, or W.
    #[arg(short, long, default_value = "N", value_parser = parse_seat)]
    dealer: Seat,

    /// Vulnerability: none, ns, ew, or both.
    #[arg(short, long, default_value = "none", value_parser = parse_vulnerability)]
    vulnerability: Vulnerability,

    /// Engine configuration as a YAML file.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Call number to dump the full JSON trace for.
    #[arg(short, long)]
    trace: Option<usize>,
}

fn load_config(args: &Args) -> Result<EngineConfig, String> {
    match &args.config {
        None => Ok(EngineConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            serde_yaml::from_str(&text).map_err(|e| format!("bad config: {}", e))
        }
    }
}

fn build_auction(args: &Args) -> Result<Auction, String> {
    let mut auction = Auction::new(args.dealer);
    for token in args.auction.split_whitespace() {
        let call = token
            .parse()
            .map_err(|_| format!("cannot parse call: {}", token))?;
        auction
            .try_call(call)
            .map_err(|e| format!("{}", e))?;
    }
    Ok(auction)
}

/// Show the single next call for a supplied hand.
fn run_single(engine: &Engine, auction: &Auction, hand: &Hand, args: &Args) -> Result<(), String> {
    let decision = engine
        .next_call(auction, hand, args.vulnerability)
        .map_err(|e| format!("{}", e))?;
    println!(
        "{} bids {}: {}",
        auction.current_seat(),
        decision.call.render(),
        decision.reason
    );
    if args.trace.is_some() {
        let json = serde_json::to_string_pretty(&decision.trace)
            .map_err(|e| format!("trace serialization failed: {}", e))?;
        println!("{}", json);
    }
    Ok(())
}

/// Run all four seats to the end of the auction.
fn run_board(engine: &Engine, deal: &Deal, mut auction: Auction, args: &Args) -> Result<(), String> {
    println!("Dealer: {}", deal.dealer);
    println!("Vulnerability: {:?}", deal.vulnerability);
    println!();
    print!("{}", format_deal_table(deal));
    println!();
    println!("{}", format_table_header());

    let mut index = 0;
    while !auction.is_finished() {
        index += 1;
        let seat = auction.current_seat();
        let decision = engine
            .next_call(&auction, deal.hand(seat), deal.vulnerability)
            .map_err(|e| format!("{}", e))?;
        println!(
            "{}",
            format_row(index, seat, &decision.call.render(), &decision.reason)
        );
        if args.trace == Some(index) {
            let json = serde_json::to_string_pretty(&decision.trace)
                .map_err(|e| format!("trace serialization failed: {}", e))?;
            println!("{}", json);
        }
        auction
            .try_call(decision.call)
            .map_err(|e| format!("engine produced an illegal call: {}", e))?;
    }

    println!();
    match auction.final_contract() {
        Some(contract) => println!("Contract: {}", contract),
        None => println!("Passed out"),
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let result = (|| -> Result<(), String> {
        let config = load_config(&args)?;
        let engine = Engine::new(config);
        let auction = build_auction(&args)?;
        if let Some(holding) = &args.hand {
            let hand = Hand::from_holding(holding)
                .ok_or_else(|| format!("cannot parse holding: {}", holding))?;
            run_single(&engine, &auction, &hand, &args)
        } else {
            let deal = random_deal(args.seed, args.dealer, args.vulnerability)?;
            run_board(&engine, &deal, auction, &args)
        }
    })();

    if let Err(message) = result {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}
