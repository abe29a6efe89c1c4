use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{profile::build_profile, scoring::score_pet};
use crate::models::{FreshnessWindows, Pet, RankedFeed, ScoredPet, ScoringWeights, WeightsError};
use crate::services::{InteractionStore, PetRepository};

/// Feed ranking orchestrator
///
/// # Paths
/// - Anonymous visitors get the whole catalog in a uniform shuffle.
/// - Signed-in users get every pet scored on distance, preference,
///   freshness and a random exploration term, sorted by weighted total.
///
/// Nothing is filtered: liked pets stay in the feed.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    freshness: FreshnessWindows,
}

impl Ranker {
    pub fn new(weights: ScoringWeights, freshness: FreshnessWindows) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights, freshness })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            freshness: FreshnessWindows::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn freshness(&self) -> &FreshnessWindows {
        &self.freshness
    }

    /// Rank the catalog for a user, or shuffle it for anonymous visitors
    ///
    /// Uses the current time and the thread RNG, so repeated calls on the
    /// same state return the same pets in possibly different order.
    pub fn rank<P, S>(&self, repo: &P, store: &S, user_id: Option<&str>) -> Vec<ScoredPet>
    where
        P: PetRepository + ?Sized,
        S: InteractionStore + ?Sized,
    {
        self.rank_with(repo, store, user_id, Utc::now(), &mut rand::thread_rng())
    }

    /// Rank with an explicit clock and random source
    ///
    /// # Arguments
    /// * `repo` - Source of all pets; read once at entry
    /// * `store` - Source of the user's likes
    /// * `user_id` - Requesting user, `None` or empty for anonymous
    /// * `now` - Reference time for freshness
    /// * `rng` - Random source for the shuffle or the random score
    pub fn rank_with<P, S, R>(
        &self,
        repo: &P,
        store: &S,
        user_id: Option<&str>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<ScoredPet>
    where
        P: PetRepository + ?Sized,
        S: InteractionStore + ?Sized,
        R: Rng + ?Sized,
    {
        let pets = repo.all_pets();

        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            tracing::debug!("Anonymous feed: shuffling {} pets", pets.len());
            return shuffle_pets(pets, rng);
        };

        let profile = build_profile(&pets, store, user_id);

        let mut scored: Vec<ScoredPet> = pets
            .into_iter()
            .map(|pet| {
                let breakdown = score_pet(&pet, profile.as_ref(), now, &self.freshness, &mut *rng);
                let score = self.weights.combine(&breakdown);
                tracing::trace!("Pet {} scored {:.2} ({:?})", pet.id, score, breakdown);
                ScoredPet {
                    pet,
                    score,
                    breakdown: Some(breakdown),
                }
            })
            .collect();

        // Sort by score (descending); tie order is unspecified
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Ranked {} pets for user {} (personalized: {})",
            scored.len(),
            user_id,
            profile.is_some()
        );

        scored
    }

    /// Ranked pets without score annotations, in feed order
    pub fn recommended_pets<P, S>(&self, repo: &P, store: &S, user_id: Option<&str>) -> Vec<Pet>
    where
        P: PetRepository + ?Sized,
        S: InteractionStore + ?Sized,
    {
        self.rank(repo, store, user_id)
            .into_iter()
            .map(|scored| scored.pet)
            .collect()
    }

    /// Ranked feed with metadata for the rendering layer
    pub fn feed<P, S>(&self, repo: &P, store: &S, user_id: Option<&str>) -> RankedFeed
    where
        P: PetRepository + ?Sized,
        S: InteractionStore + ?Sized,
    {
        let now = Utc::now();
        let pets = self.rank_with(repo, store, user_id, now, &mut rand::thread_rng());
        let user_id = user_id.filter(|id| !id.is_empty()).map(str::to_string);

        RankedFeed {
            personalized: user_id.is_some(),
            user_id,
            total_results: pets.len(),
            pets,
            generated_at: now,
        }
    }
}

fn shuffle_pets<R: Rng + ?Sized>(mut pets: Vec<Pet>, rng: &mut R) -> Vec<ScoredPet> {
    pets.shuffle(rng);
    pets.into_iter()
        .map(|pet| ScoredPet {
            pet,
            score: 0.0,
            breakdown: None,
        })
        .collect()
}
