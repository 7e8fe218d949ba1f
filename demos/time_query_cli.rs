use std::io;
use std::io::Write;

use clap::{App, Arg};
use time_logic_adapter::{LogicAdapter, Statement, TimeLogicAdapter};

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_nanos()
        .init();

    let matches = App::new("time-query")
        .about("Interactive CLI answering questions about the current time")
        .arg(
            Arg::with_name("CONFIG_DIR")
                .takes_value(true)
                .index(1)
                .help("path to a directory containing a time_adapter.json configuration"),
        )
        .arg(
            Arg::with_name("show_features")
                .short("f")
                .long("show-features")
                .help("print the features computed for each query"),
        )
        .get_matches();
    let show_features = matches.is_present("show_features");

    println!("\nTraining the time logic adapter...");
    let adapter = match matches.value_of("CONFIG_DIR") {
        Some(config_dir) => TimeLogicAdapter::from_path(config_dir),
        None => TimeLogicAdapter::new(None, None),
    }
    .unwrap();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();
        let mut query = String::new();
        if io::stdin().read_line(&mut query).unwrap() == 0 {
            break;
        }
        if show_features {
            for (name, value) in adapter.compute_features(query.trim()) {
                println!("{} = {}", name, value);
            }
        }
        let response = adapter.process(&Statement::from(query.trim()));
        let response_json = serde_json::to_string_pretty(&response).unwrap();
        println!("{}", response_json);
    }
}
