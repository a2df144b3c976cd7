use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use tracing::debug;

use deckle::broaden::BroadenDeck;
use deckle::problem;
use deckle::reading;

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt::init();

    let matches = Command::new("deckle")
        .version(VERSION)
        .propagate_version(true)
        .about("A reader and validator for card-oriented scientific input decks.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Validate the given input deck")
                .arg(
                    Arg::new("concise")
                        .long("concise")
                        .action(ArgAction::SetTrue)
                        .help("Report problems one per line, without quoting the deck source."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the input deck you want to validate."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let concise = submatches.get_flag("concise");
            match submatches.get_one::<String>("filename") {
                Some(filename) => check(Path::new(filename), concise),
                None => ExitCode::FAILURE,
            }
        }
        _ => {
            println!("usage: deckle [COMMAND] ...");
            println!("Try '--help' for more information.");
            ExitCode::SUCCESS
        }
    }
}

fn check(filename: &Path, concise: bool) -> ExitCode {
    let content = match reading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            return ExitCode::FAILURE;
        }
    };

    match BroadenDeck::parse(&content) {
        Ok(deck) => {
            debug!("deck validated");
            let temperatures = deck
                .temperatures
                .values
                .len();
            let continuations = deck
                .continuations
                .len();
            println!(
                "{}: material {}, {} temperature{}, {} further material{}",
                filename.display(),
                deck.material
                    .material
                    .value,
                temperatures,
                if temperatures == 1 { "" } else { "s" },
                continuations,
                if continuations == 1 { "" } else { "s" }
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            if concise {
                eprintln!("{}", problem::concise_deck_error(&error, filename));
            } else {
                eprintln!("{}", problem::full_deck_error(&error, filename, &content));
            }
            ExitCode::FAILURE
        }
    }
}
