use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pet identifier. Seed pets use small constants, user pets the creation
/// timestamp in milliseconds.
pub type PetId = i64;

/// Kinds of pet the app knows about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    #[default]
    Dog,
    Cat,
    Rabbit,
    Bird,
    Hamster,
    Reptile,
    Fish,
}

impl PetType {
    pub const ALL: [PetType; 7] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Rabbit,
        PetType::Bird,
        PetType::Hamster,
        PetType::Reptile,
        PetType::Fish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Rabbit => "rabbit",
            PetType::Bird => "bird",
            PetType::Hamster => "hamster",
            PetType::Reptile => "reptile",
            PetType::Fish => "fish",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pet type: {0}")]
pub struct UnknownPetType(pub String);

impl FromStr for PetType {
    type Err = UnknownPetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPetType(s.to_string()))
    }
}

/// Pet record as stored by the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub pet_type: PetType,
    pub breed: String,
    /// Free text such as "5m" or "10 miles"
    pub distance: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub owner: String,
    #[serde(rename = "ownerId", default)]
    pub owner_id: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Taste model derived from a user's liked pets. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceProfile {
    pub types: HashMap<PetType, u32>,
    pub breeds: HashMap<String, u32>,
    pub total: u32,
}

impl PreferenceProfile {
    pub fn type_count(&self, pet_type: PetType) -> u32 {
        self.types.get(&pet_type).copied().unwrap_or(0)
    }

    pub fn breed_count(&self, breed: &str) -> u32 {
        self.breeds.get(breed).copied().unwrap_or(0)
    }
}

/// The four component scores behind a ranking total, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub distance: f64,
    pub preference: f64,
    pub freshness: f64,
    pub random: f64,
}

/// Pet annotated with its ranking score for a single ranking call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPet {
    #[serde(flatten)]
    pub pet: Pet,
    #[serde(rename = "_score")]
    pub score: f64,
    #[serde(rename = "_breakdown", default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("Weight '{name}' must be a finite, non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub distance: f64,
    pub preference: f64,
    pub freshness: f64,
    pub random: f64,
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn sum(&self) -> f64 {
        self.distance + self.preference + self.freshness + self.random
    }

    /// Check every weight is usable and that together they sum to 1.0
    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, value) in [
            ("distance", self.distance),
            ("preference", self.preference),
            ("freshness", self.freshness),
            ("random", self.random),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { name, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }
        Ok(())
    }

    pub fn combine(&self, scores: &ScoreBreakdown) -> f64 {
        scores.distance * self.distance
            + scores.preference * self.preference
            + scores.freshness * self.freshness
            + scores.random * self.random
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.30,
            preference: 0.40,
            freshness: 0.10,
            random: 0.20,
        }
    }
}

/// Age windows for the freshness score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshnessWindows {
    /// Ids below this are seed-catalog constants, not timestamps
    pub seed_id_threshold: PetId,
    pub fresh: Duration,
    pub recent: Duration,
}

impl Default for FreshnessWindows {
    fn default() -> Self {
        Self {
            seed_id_threshold: 100_000,
            fresh: Duration::days(1),
            recent: Duration::days(7),
        }
    }
}
