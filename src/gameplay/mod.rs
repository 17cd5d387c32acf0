pub mod action;
pub mod discretize;
pub mod legal;
pub mod rules;
pub mod state;

pub use action::Action;
pub use discretize::discretize_actions;
pub use discretize::DiscretizationConfig;
pub use legal::compute_legal_actions;
pub use legal::LegalActionSummary;
pub use legal::RaiseBounds;
pub use rules::BettingRules;
pub use rules::MinBetRule;
pub use state::PublicState;
