use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use regsel_cli::predict::input::PredictConfig;
use regsel_cli::predict::run_prediction;
use regsel_cli::train::input::TrainConfig;
use regsel_cli::train::run_training;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REGSEL_LOG", "error,regsel=info"))
        .init();

    let matches = Command::new("regsel")
        .version(clap::crate_version!())
        .about("Train linear regression variants and keep the best-scoring model")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("train")
                .about("Train every candidate model and persist the best one")
                .arg(
                    Arg::new("config")
                        .help("Path to training configuration file (JSON)")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("train_data")
                        .short('d')
                        .long("train_data")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help(
                            "Path to training data (*.csv or *.tsv, target in the last column). \
                             Overrides the training data file specified in the configuration file.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("test_data")
                        .short('t')
                        .long("test_data")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help(
                            "Path to test data used for scoring. \
                             Overrides the test data file specified in the configuration file.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help(
                            "File path that the selected model will be written to. \
                             Overrides the path specified in the configuration file.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no_headers")
                        .long("no-headers")
                        .help("Data files have no header row.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("predict")
                .about("Predict with a previously trained model")
                .arg(
                    Arg::new("model_path")
                        .short('m')
                        .long("model")
                        .help("Path to the trained model file (*.json)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("inference_data")
                        .short('d')
                        .long("inference_data")
                        .help("Path to the input data file (*.csv or *.tsv)")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .help("Path to the output file for predictions. Defaults to stdout.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("has_target")
                        .long("has-target")
                        .help("The last input column is the target; report R2 against it.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no_headers")
                        .long("no-headers")
                        .help("The input file has no header row.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("train", sub_m)) => handle_train(sub_m),
        Some(("predict", sub_m)) => handle_predict(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_train(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    let data_given = matches.contains_id("train_data") && matches.contains_id("test_data");

    if config_path.is_none() && !data_given {
        eprintln!("[regsel::train] No config file provided; printing a template configuration.");
        println!("{}", serde_json::to_string_pretty(&TrainConfig::default())?);
        return Ok(());
    }
    if let Some(path) = config_path {
        log::info!("[regsel::train] Training from config: {:?}", path);
    }

    let params = TrainConfig::from_arguments(config_path, matches)?;

    match run_training(&params) {
        Ok(summary) => {
            log::info!(
                "[regsel::train] Selected {} (score {}) saved to {:?}",
                summary.best_model,
                summary.best_score,
                summary.artifact_path
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Training failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_predict(matches: &ArgMatches) -> Result<()> {
    let params = PredictConfig::from_arguments(matches)?;
    log::info!(
        "[regsel::predict] Predicting {} with {:?}",
        params.inference_data,
        params.model_path
    );

    match run_prediction(&params) {
        Ok(predictions) => {
            log::info!("[regsel::predict] Completed {} predictions.", predictions.len());
            Ok(())
        }
        Err(e) => {
            log::error!("Prediction failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
