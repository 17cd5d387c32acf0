pub mod response;
pub mod spot;

pub use response::Response;
pub use spot::parse_spot;
pub use spot::SpotError;

/// One-shot boundary call: spot JSON in, response JSON out. This is the
/// surface language bindings and the CLI share.
pub fn solve_spot_json(input: &str) -> Result<String, SpotError> {
    let (state, config) = parse_spot(input)?;
    let result = crate::solver::solve::solve_one(&state, &config);
    Ok(serde_json::to_string(&Response::from(result))?)
}
