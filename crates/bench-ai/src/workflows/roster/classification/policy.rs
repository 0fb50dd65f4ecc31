use super::super::domain::BenchDecision;

/// The substitution rule: any player in debt on remaining effective seconds
/// exits now; everyone else holds.
pub(crate) fn decide(res: i32) -> BenchDecision {
    if res < 0 {
        BenchDecision::ExitNow
    } else {
        BenchDecision::Maintain
    }
}
