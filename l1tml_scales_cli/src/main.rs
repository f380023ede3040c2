//! # l1tml_scales_cli
//!
//! Part of the l1tml_scales crate family.
//!
//! Command line tool which converts the fitted standard scaler of the L1T ML
//! demo into the `scales.h` header compiled into the HLS Scaler firmware
//! module. See the `libl1tml_scales` documentation for the configuration and
//! file formats.

use clap::{Arg, Command};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use libl1tml_scales::config::Config;
use libl1tml_scales::process::process;

fn make_template_config(path: &Path) {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config).unwrap();
    let mut file = File::create(path).expect("Could create template config file!");
    file.write_all(yaml_str.as_bytes())
        .expect("Failed to write yaml data to file!");
}

fn main() {
    // Create a cli
    let matches = Command::new("l1tml_scales_cli")
        .arg_required_else_help(true)
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .help("Path to the file"),
        )
        .get_matches();

    // Initialize feedback
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("Could not create logging!");

    // Parse the cli
    let config_path = PathBuf::from(matches.get_one::<String>("path").expect("We require args"));

    match matches.subcommand() {
        Some(("new", _)) => {
            log::info!(
                "Making a template config at {}...",
                config_path.to_string_lossy()
            );

            make_template_config(&config_path);
            log::info!("Done.");
            return;
        }
        _ => (),
    }

    // Load our config
    log::info!("Loading config from {}...", config_path.to_string_lossy());
    let config = match Config::read_config_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Config successfully loaded.");
    log::info!("Root Path: {}", config.root_path.to_string_lossy());
    match &config.scaler_path {
        Some(path) => log::info!("Scaler Path: {}", path.to_string_lossy()),
        None => log::info!("Scaler Path: default under root"),
    }
    match &config.output_path {
        Some(path) => log::info!("Output Path: {}", path.to_string_lossy()),
        None => log::info!("Output Path: default under root"),
    }
    match config.n_inputs {
        Some(n) => log::info!("Expected N_INPUTS: {n}"),
        None => log::info!("Expected N_INPUTS: not checked"),
    }

    // Run the generator
    match process(&config) {
        Ok(()) => log::info!("Successfully generated the scales header!"),
        Err(e) => log::error!("Header generation failed with error: {e}"),
    }

    log::info!("Done.");
}
