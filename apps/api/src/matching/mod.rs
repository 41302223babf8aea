// Job filtering, resume/job match scoring and skill extraction from uploads.
// Everything here except the handlers is pure and synchronous, apart from the
// `MatchScorer` trait which is async so a remote scorer can slot in later.

pub mod filter;
pub mod handlers;
pub mod scoring;
pub mod skill_extraction;
