#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Result;
use clap::{Arg, ArgMatches, Command, value_parser};
use lotto::config::{ConfigOverrides, LottoConfig};
use lotto::prompt::{Prompt, QuickPickAll};
use lotto::report::DrawReport;
use lotto::session;
use rand::SeedableRng as _;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    let matches = Command::new("lotto")
        .version("0.1.0")
        .about("Fill a lottery ticket and check it against a random draw")
        .arg(
            Arg::new("panels")
                .long("panels")
                .short('p')
                .value_parser(value_parser!(usize))
                .help("Number of panels on the ticket (2-8)"),
        )
        .arg(
            Arg::new("manual")
                .long("manual")
                .short('m')
                .action(clap::ArgAction::SetTrue)
                .help("Enter the numbers of each panel by hand"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed the random generator for a reproducible draw"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Set verbose output level"),
        )
        .get_matches();

    let log_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(log_level).init();

    let config = load_config(&matches)?;
    log::debug!("Running with {config:?}");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = if config.manual {
        let mut prompt = Prompt::new(std::io::stdin().lock(), std::io::stdout());
        session::play(&config, &mut rng, &mut prompt)?
    } else {
        session::play(&config, &mut rng, &mut QuickPickAll)?
    };

    print_report(&report, config.json)
}

/// Command line flags win over `LOTTO_*` variables
fn load_config(matches: &ArgMatches) -> Result<LottoConfig> {
    let overrides = ConfigOverrides {
        panels: matches.get_one::<usize>("panels").copied(),
        manual: matches.get_flag("manual").then_some(true),
        seed: matches.get_one::<u64>("seed").copied(),
        json: matches.get_flag("json").then_some(true),
    };
    let config = LottoConfig::from_env(&overrides)?;
    config.check()?;
    Ok(config)
}

fn print_report(report: &DrawReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("Welcome to the Lottery");
        println!("{report}");
    }
    Ok(())
}
