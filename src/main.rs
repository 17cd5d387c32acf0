use clap::Parser;
use quasarlib::analysis::parse_spot;
use quasarlib::analysis::Response;
use quasarlib::solver::solve::solve_one;
use quasarlib::Args;

fn main() {
    quasarlib::logs();
    let args = Args::parse();
    match run(&args) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let input = match &args.spot {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let (state, mut config) = parse_spot(&input)?;
    if let Some(iters) = args.iters {
        config.cfr_iters = iters;
    }
    let response = Response::from(solve_one(&state, &config));
    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(json)
}
