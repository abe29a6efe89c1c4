// Core algorithm exports
pub mod distance;
pub mod profile;
pub mod ranker;
pub mod scoring;

pub use distance::{distance_score, parse_leading_number};
pub use profile::{build_profile, profile_from_likes};
pub use ranker::Ranker;
pub use scoring::{freshness_score, preference_score, random_score, score_pet};
