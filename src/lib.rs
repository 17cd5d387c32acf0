pub mod analysis;
pub mod cards;
pub mod gameplay;
pub mod nn;
pub mod solver;

pub use analysis::*;
pub use cards::*;
pub use gameplay::*;
pub use solver::*;

/// dimensional analysis types
pub type Chips = f64;
pub type Utility = f64;
pub type Probability = f64;
pub type Equity = f32;

// betting bound parameters.
// AMOUNT_EPSILON separates distinct chip amounts (bound feasibility,
// candidate deduplication); NOISE_EPSILON only absorbs accumulated
// floating point error in the facing-a-bet test.
pub const AMOUNT_EPSILON: Chips = 1e-9;
pub const NOISE_EPSILON: Chips = 1e-12;

/// utility assigned to surrendering the pot. a fixed heuristic constant,
/// not derived from forfeited equity.
pub const FOLD_PENALTY: Utility = -0.1;

// river opponent-response curve parameters
pub const CALL_PROB_FLOOR: Probability = 0.05;
pub const CALL_PROB_CEILING: Probability = 0.95;
pub const SIZE_RATIO_CAP: f64 = 4.0;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Solve a single PLO decision from a spot description
pub struct Args {
    /// Path to a spot JSON file; reads stdin when omitted
    pub spot: Option<std::path::PathBuf>,
    /// Override the solver iteration count from the spot
    #[arg(long)]
    pub iters: Option<usize>,
    /// Pretty-print the response JSON
    #[arg(long)]
    pub pretty: bool,
}

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize terminal logging for the CLI binary
pub fn logs() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
