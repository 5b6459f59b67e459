use clap::Parser;
use propmap::api::ClassificationApi;
use propmap::config::PropmapConfig;
use propmap::enums;
use propmap::error::Result;
use propmap::model::{Classification, GenericClassification};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// One generic classification, or every classification of an entity.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<GenericClassification>),
    One(GenericClassification),
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {}", e);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Commands::Config = cli.command {
        print!("{}", PropmapConfig::template());
        return Ok(());
    }

    let config = PropmapConfig::load(cli.config.as_deref())?;
    debug!(service = %config.service_name, enum_names = ?config.enum_names, "loaded config");
    let api = ClassificationApi::new(config.registry());

    match cli.command {
        Commands::Types => print::print_types(api.registry()),
        Commands::Domains => print::print_domains(&enums::domains()),
        Commands::Decode { file } => handle_decode(&api, &file)?,
        Commands::Encode { file } => handle_encode(&api, &file)?,
        Commands::Config => {}
    }
    Ok(())
}

fn handle_decode(api: &ClassificationApi, file: &Path) -> Result<()> {
    let input: OneOrMany = serde_json::from_str(&std::fs::read_to_string(file)?)?;
    let generics = match input {
        OneOrMany::Many(generics) => generics,
        OneOrMany::One(generic) => vec![generic],
    };
    let outcomes = api.decode_all(&generics)?;
    print::print_outcomes(&outcomes)
}

fn handle_encode(api: &ClassificationApi, file: &Path) -> Result<()> {
    let classification: Classification = serde_json::from_str(&std::fs::read_to_string(file)?)?;
    let generic = api.encode_classification(&classification)?;
    print::print_generic(&generic)
}
