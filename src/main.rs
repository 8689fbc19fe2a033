#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use wordle_remix::{
    cli::{Cli, Command, PlayArgs},
    framework::{logging, Config},
    games::wordle::{board::MAX_GUESSES, core::AsEmoji, GuessRequest, RequestHandler, WordsList},
    Error,
};

use chrono::{NaiveDate, Utc};
use clap::Parser;

use tracing::{debug, info};

mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        // a missing .env is normal
        if !err.not_found() {
            eprintln!("couldn't load .env: {err}");
        }
    }

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            logging::init_tracing(None);
            let err = Error::from(err);
            err.trace();
            return Err(err.into());
        }
    };

    logging::init_tracing(config.logs.filter());

    let build = if built_info::DEBUG {
        format!("development build ({})", built_info::PROFILE)
    } else {
        format!("release {}", built_info::PKG_VERSION)
    };
    debug!("{build}");

    run(cli.command, &config).map_err(|err| {
        err.trace();
        err.into()
    })
}

fn run(command: Command, config: &Config) -> Result<(), Error> {
    match command {
        Command::Play(args) => play(&args, config),
        Command::Today { date } => today(date.unwrap_or_else(today_utc), config),
        Command::Config => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}

fn play(args: &PlayArgs, config: &Config) -> Result<(), Error> {
    if let Some(flavor_text) = config.logs.flavor_text() {
        info!("{flavor_text}");
    }

    let words = WordsList::load(&config.wordle)?;
    let handler = RequestHandler::new(&words, config.wordle.selector(), config.wordle.scoring);

    let request = if args.stdin {
        serde_json::from_reader::<_, GuessRequest>(std::io::stdin().lock())?
    } else {
        args.request()
    };

    let response = handler.handle(&request, args.date.unwrap_or_else(today_utc))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}\n", response.share);
        println!("{}", response.board.emoji_with_letters());
        if let Some(last_error) = &response.last_error {
            println!("\nnot accepted: {}", last_error.invalid_word);
        }
        if !response.status.is_finished() {
            let left = MAX_GUESSES.saturating_sub(response.attempts.len());
            println!("\n{left} guesses left, pass them back with --attempt");
        }
    }

    Ok(())
}

fn today(date: NaiveDate, config: &Config) -> Result<(), Error> {
    let words = WordsList::load(&config.wordle)?;
    let selector = config.wordle.selector();
    let number = selector.day_index(date);

    match words.solution_for_day(number) {
        Ok(_) => println!("{date}: puzzle {number}"),
        Err(err) => println!("{date}: puzzle {number} ({err})"),
    }

    Ok(())
}

fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
