use cyclic_peptides::{
    necklace::{self, DEFAULT_ENUMERATION_LIMIT},
    prelude::*,
    presets::{Preset, ALPHABET_PRESETS, ALPHABET_RANGE, LENGTH_PRESETS, LENGTH_RANGE},
};

use itertools::Itertools;
use owo_colors::OwoColorize;
use tracing::{debug, trace, warn};
use tracing_subscriber::{filter, prelude::*};

use clap::{builder::PossibleValuesParser, value_parser, Arg, ArgAction, ArgMatches, Command};

/// Counts above this value are additionally shown in scientific notation.
const SCIENTIFIC_THRESHOLD: u64 = 1_000_000;

fn cli() -> clap::Command {
    Command::new("cpc")
    .about("Counts cyclic peptides that are distinct up to rotation")
    .subcommand_required(true)
    .arg(
        Arg::new("verbosity")
        .short('v')
        .long("verbosity")
        .num_args(0..=1)
        .require_equals(true)
        .value_parser(["info", "debug", "trace"])
        .default_missing_value("info")
    )
    .subcommand(
        Command::new("count")
        .about("counts the cyclic peptides of the given length over the given number of amino acids")
        .arg(
            Arg::new("length")
            .short('l')
            .long("length")
            .help("number of amino acid positions in the cycle")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .default_value("6")
        )
        .arg(
            Arg::new("alphabet")
            .short('u')
            .long("alphabet")
            .help("number of unique amino acids")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .default_value("4")
        )
        .arg(
            Arg::new("length-preset")
            .long("length-preset")
            .help("use the ring size of a well known cyclic peptide")
            .value_parser(PossibleValuesParser::new(LENGTH_PRESETS.iter().map(|p| p.name)))
        )
        .arg(
            Arg::new("alphabet-preset")
            .long("alphabet-preset")
            .help("use a common amino acid alphabet")
            .value_parser(PossibleValuesParser::new(ALPHABET_PRESETS.iter().map(|p| p.name)))
        )
        .arg(
            Arg::new("clamp")
            .long("clamp")
            .help("print 0 for non-positive inputs instead of failing")
            .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("breakdown")
            .short('b')
            .long("breakdown")
            .help("show the individual terms of the Burnside sum")
            .action(ArgAction::SetTrue)
        )
    )
    .subcommand(
        Command::new("table")
        .about("prints the counts for several lengths and alphabet sizes")
        .arg(
            Arg::new("lengths")
            .long("lengths")
            .value_delimiter(',')
            .value_parser(value_parser!(u64))
            .default_value("5,6,9,10,11,13")
        )
        .arg(
            Arg::new("alphabets")
            .long("alphabets")
            .value_delimiter(',')
            .value_parser(value_parser!(u64))
            .default_value("4,8,20,21")
        )
    )
    .subcommand(
        Command::new("enumerate")
        .about("lists every cyclic peptide explicitly, in one letter code")
        .arg(Arg::new("length").required(true).value_parser(value_parser!(u64)))
        .arg(Arg::new("alphabet").required(true).value_parser(value_parser!(u64)))
        .arg(
            Arg::new("limit")
            .long("limit")
            .help("maximal number of linear sequences that are inspected, defaults to 2^20")
            .value_parser(value_parser!(u64))
        )
    )
    .subcommand(
        Command::new("presets")
        .about("lists the available length and alphabet presets")
    )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

/// Renders `n` as `d.dde+x` with the mantissa rounded to two decimals.
fn scientific(n: &BigUint) -> String {
    let digits = n.to_string();
    let mut exponent = digits.len() - 1;
    let leading: u64 = digits[..digits.len().min(3)].parse().unwrap_or(0);
    let mut mantissa = leading * 10u64.pow(3 - digits.len().min(3) as u32);
    if digits.as_bytes().get(3).is_some_and(|d| *d >= b'5') {
        mantissa += 1;
    }
    if mantissa == 1000 {
        mantissa = 100;
        exponent += 1;
    }
    format!("{}.{:02}e+{exponent}", mantissa / 100, mantissa % 100)
}

fn resolve(matches: &ArgMatches, presets: &[Preset], preset: &str, value: &str) -> i64 {
    match matches
        .get_one::<String>(preset)
        .and_then(|name| cyclic_peptides::presets::find(presets, name))
    {
        Some(p) => {
            debug!("using preset {} ({}) for {value}", p.name, p.description);
            p.value as i64
        }
        None => matches.get_one::<i64>(value).copied().unwrap_or(0),
    }
}

fn count(matches: &ArgMatches) -> Result<(), Error> {
    let length = resolve(matches, LENGTH_PRESETS, "length-preset", "length");
    let alphabet_size = resolve(matches, ALPHABET_PRESETS, "alphabet-preset", "alphabet");
    let policy = if matches.get_flag("clamp") {
        ClampPolicy::Zero
    } else {
        ClampPolicy::Strict
    };

    if !u64::try_from(length).is_ok_and(|l| LENGTH_RANGE.contains(&l)) {
        warn!("length {length} is outside of the usual range {LENGTH_RANGE:?}");
    }
    if !u64::try_from(alphabet_size).is_ok_and(|u| ALPHABET_RANGE.contains(&u)) {
        warn!("alphabet size {alphabet_size} is outside of the usual range {ALPHABET_RANGE:?}");
    }

    let start = std::time::Instant::now();
    // clamped inputs have no meaningful breakdown
    let sum = match (u64::try_from(length), u64::try_from(alphabet_size)) {
        (Ok(l), Ok(u)) if l > 0 && u > 0 => Some(BurnsideSum::new(l, u)?),
        _ => None,
    };
    let result = match &sum {
        Some(sum) => sum.orbit_count(),
        None => policy.count(length, alphabet_size)?,
    };
    debug!("counting took {}µs", start.elapsed().as_micros());

    println!("{} unique cyclic peptides", result.green().bold());
    if result > BigUint::from(SCIENTIFIC_THRESHOLD) {
        println!("({})", scientific(&result));
    }

    if let Some(sum) = sum {
        if matches.get_flag("breakdown") {
            println!("{}", sum.show());
        }
        println!();
        println!("{}", Formula::from(&sum));
        println!();
        println!("{}", cyclic_peptides::formula::EXPLANATION.dimmed());
    }
    Ok(())
}

fn table(matches: &ArgMatches) -> Result<(), Error> {
    let lengths: Vec<u64> = matches
        .get_many::<u64>("lengths")
        .into_iter()
        .flatten()
        .copied()
        .collect();
    let alphabets: Vec<u64> = matches
        .get_many::<u64>("alphabets")
        .into_iter()
        .flatten()
        .copied()
        .collect();
    debug!("tabulating lengths {lengths:?} against alphabet sizes {alphabets:?}");

    let mut b = tabled::builder::Builder::default();
    b.push_record(
        std::iter::once("L \\ U".to_string()).chain(alphabets.iter().map(|u| u.bold().to_string())),
    );
    for length in &lengths {
        let mut row = vec![length.bold().to_string()];
        for alphabet_size in &alphabets {
            row.push(count_cyclic_sequences(*length, *alphabet_size)?.to_string());
        }
        b.push_record(row);
    }

    println!("{}", b.build().with(tabled::settings::Style::rounded()));
    Ok(())
}

fn enumerate(matches: &ArgMatches) -> Result<(), Error> {
    let length = matches.get_one::<u64>("length").copied().unwrap_or(0);
    let alphabet_size = matches.get_one::<u64>("alphabet").copied().unwrap_or(0);
    let limit = matches
        .get_one::<u64>("limit")
        .copied()
        .unwrap_or(DEFAULT_ENUMERATION_LIMIT);

    let necklaces = necklace::enumerate(length, alphabet_size, limit)?;
    for necklace in &necklaces {
        println!("{}", necklace.show());
    }
    println!(
        "{} unique cyclic peptides",
        necklaces.len().green().bold()
    );
    Ok(())
}

fn presets() {
    for (title, presets) in [("lengths", LENGTH_PRESETS), ("alphabets", ALPHABET_PRESETS)] {
        println!("{}", title.bold());
        println!(
            "{}",
            presets
                .iter()
                .map(|p| format!("  {:<16}{:>4}  {}", p.name, p.value, p.description.dimmed()))
                .join("\n")
        );
    }
}

pub fn main() -> std::process::ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let outcome = match matches.subcommand() {
        Some(("count", sub_matches)) => count(sub_matches),
        Some(("table", sub_matches)) => table(sub_matches),
        Some(("enumerate", sub_matches)) => enumerate(sub_matches),
        Some(("presets", _)) => {
            presets();
            Ok(())
        }
        _ => unreachable!(),
    };

    match outcome {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            std::process::ExitCode::FAILURE
        }
    }
}
