use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use coordkit::CoordKit;
use coordkit::utils::logger::Logger;
use coordkit::commands::{CommandFactory, CoordkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CoordKit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Convert geographic coordinates between DEC, DEG and MMS")
        .arg(
            Arg::new("lat")
                .help("Latitude value (quote DEG values: \"37 33 59.3\")")
                .allow_hyphen_values(true)
                .required_unless_present_any(["batch", "list-conversions"])
                .index(1),
        )
        .arg(
            Arg::new("lng")
                .help("Longitude value")
                .allow_hyphen_values(true)
                .required_unless_present_any(["batch", "list-conversions"])
                .index(2),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Source format (DEC, DEG, MMS)")
                .value_name("FORMAT")
                .default_value("DEC"),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Target format (DEC, DEG, MMS)")
                .value_name("FORMAT")
                .default_value("DEC"),
        )
        .arg(
            Arg::new("detailed")
                .short('d')
                .long("detailed")
                .help("Report each axis separately instead of failing both together")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Convert 'lat,lng' lines from a file ('-' for stdin)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for batch conversion")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("list-conversions")
                .long("list-conversions")
                .help("List the available conversions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the built-in conversion settings")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let kit = match CoordKit::from_config(matches.get_one::<String>("config").map(String::as_str)) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            process::exit(1);
        }
    };

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
