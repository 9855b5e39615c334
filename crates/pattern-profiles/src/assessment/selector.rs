use super::domain::ProfileResult;

/// Single dominant profile.
pub const DOMINANT: usize = 1;
/// Short list shown with the result summary and stored with a session.
pub const SHORTLIST: usize = 2;
/// Entries shown in a breakdown chart.
pub const BREAKDOWN: usize = 5;

/// First `n` entries of an already ranked list.
///
/// Never re-ranks by percentage: negative scores all clamp to 0 %, so only the
/// raw-score order produced by the engine distinguishes them.
pub fn top_n(results: &[ProfileResult], n: usize) -> &[ProfileResult] {
    &results[..n.min(results.len())]
}

/// The top-ranked result, if any.
pub fn dominant(results: &[ProfileResult]) -> Option<&ProfileResult> {
    top_n(results, DOMINANT).first()
}
