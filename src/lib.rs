//! PetMatch Algo - feed ranking engine for the PetMatch app
//!
//! This library orders the pet feed for a user. Signed-in users get a
//! weighted score over distance, taste (derived from their likes),
//! listing freshness and a random exploration term; anonymous visitors
//! get a shuffle.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, distance_score, freshness_score, preference_score};
pub use models::{Pet, PetId, PetType, PreferenceProfile, ScoredPet, ScoringWeights, RankedFeed, NewPet};
pub use services::{InteractionStore, MemoryStore, PetRepository};
