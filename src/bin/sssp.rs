use dijkstra_sssp::driver::{run_text, DriverConfig};
use dijkstra_sssp::FrontierStrategy;
use std::env;
use std::io::{self, Read};
use std::process;

fn parse_args(args: &[String]) -> Result<DriverConfig, String> {
    let mut config = DriverConfig::default();
    let mut positional = 0;

    for arg in args {
        if arg == "--json" {
            config.json = true;
            continue;
        }
        match positional {
            0 => {
                config.source = arg
                    .parse()
                    .map_err(|_| format!("invalid source vertex: {}", arg))?;
            }
            1 => config.strategy = arg.parse::<FrontierStrategy>()?,
            _ => return Err(format!("unexpected argument: {}", arg)),
        }
        positional += 1;
    }

    Ok(config)
}

fn execute(config: &DriverConfig) -> dijkstra_sssp::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    run_text(&input, config)
}

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: sssp [source] [lazy|rebuild] [--json]
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: sssp [source] [lazy|rebuild] [--json] < input");
            process::exit(2);
        }
    };

    match execute(&config) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
