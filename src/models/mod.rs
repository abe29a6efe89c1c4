// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Pet, PetId, PetType, UnknownPetType, PreferenceProfile, ScoreBreakdown, ScoredPet, ScoringWeights, WeightsError, FreshnessWindows};
pub use requests::NewPet;
pub use responses::RankedFeed;
