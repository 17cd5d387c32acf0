pub mod cfr;
pub mod equity;
pub mod eval;
pub mod solve;

pub use cfr::cfr_onestep;
pub use cfr::CfrConfig;
pub use cfr::CfrResult;
pub use equity::EquityError;
pub use equity::EquityMatrix;
pub use eval::ImmediateOutlay;
pub use eval::RiverEvalConfig;
pub use eval::RiverFoldEquity;
pub use eval::UtilityModel;
pub use solve::solve_one;
pub use solve::SolveConfig;
pub use solve::SolveResult;
