use chrono::{DateTime, Utc};
use rand::Rng;
use crate::models::{FreshnessWindows, Pet, PreferenceProfile, ScoreBreakdown};
use crate::core::distance::distance_score;

/// Score given to seed pets, which have no meaningful creation time
pub const SEED_FRESHNESS_SCORE: f64 = 50.0;

/// Maximum points a type match contributes to the preference score
const TYPE_POINTS: f64 = 60.0;

/// Maximum points a breed match contributes to the preference score
const BREED_POINTS: f64 = 40.0;

/// Calculate freshness score (0-100)
///
/// `<fresh → 100`, `<recent → 80`, otherwise `40`. Seed pets score 50.
///
/// An explicit `created_at` wins. Without one, ids at or above the seed
/// threshold are read as millisecond timestamps; smaller ids are seed
/// constants. Timestamp ids are aged in plain milliseconds (`now - id`),
/// so an id past the representable date range still counts as created in
/// the future and scores 100.
#[inline]
pub fn freshness_score(pet: &Pet, now: DateTime<Utc>, windows: &FreshnessWindows) -> f64 {
    match age_millis(pet, now, windows) {
        Some(age) => age_score(age, windows),
        None => SEED_FRESHNESS_SCORE,
    }
}

fn age_millis(pet: &Pet, now: DateTime<Utc>, windows: &FreshnessWindows) -> Option<i64> {
    if let Some(created) = pet.created_at {
        return Some((now - created).num_milliseconds());
    }
    if pet.id < windows.seed_id_threshold {
        return None;
    }
    Some(now.timestamp_millis().saturating_sub(pet.id))
}

#[inline]
fn age_score(age_ms: i64, windows: &FreshnessWindows) -> f64 {
    if age_ms < windows.fresh.num_milliseconds() {
        100.0
    } else if age_ms < windows.recent.num_milliseconds() {
        80.0
    } else {
        40.0
    }
}

/// Calculate preference score (0-100)
///
/// Without a profile (no like history) every pet scores 0. Otherwise a
/// type match is worth up to 60 points and a breed match up to 40, each in
/// proportion to how often it appears among the liked pets.
#[inline]
pub fn preference_score(pet: &Pet, profile: Option<&PreferenceProfile>) -> f64 {
    let Some(profile) = profile else {
        return 0.0;
    };
    if profile.total == 0 {
        return 0.0;
    }

    let total = profile.total as f64;
    let type_score = profile.type_count(pet.pet_type) as f64 / total * TYPE_POINTS;
    let breed_score = profile.breed_count(&pet.breed) as f64 / total * BREED_POINTS;

    (type_score + breed_score).min(100.0)
}

/// Uniform draw in [0, 100)
#[inline]
pub fn random_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..100.0)
}

/// Compute all four component scores for one pet
pub fn score_pet<R: Rng + ?Sized>(
    pet: &Pet,
    profile: Option<&PreferenceProfile>,
    now: DateTime<Utc>,
    windows: &FreshnessWindows,
    rng: &mut R,
) -> ScoreBreakdown {
    ScoreBreakdown {
        distance: distance_score(&pet.distance),
        preference: preference_score(pet, profile),
        freshness: freshness_score(pet, now, windows),
        random: random_score(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PetId, PetType};
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn create_test_pet(id: PetId, pet_type: PetType, breed: &str) -> Pet {
        Pet {
            id,
            name: format!("Pet {}", id),
            pet_type,
            breed: breed.to_string(),
            distance: "3m".to_string(),
            age: "2 years".to_string(),
            gender: "female".to_string(),
            bio: String::new(),
            image: None,
            images: vec![],
            owner: "Owner".to_string(),
            owner_id: "owner".to_string(),
            traits: vec![],
            created_at: None,
        }
    }

    fn dog_profile() -> PreferenceProfile {
        PreferenceProfile {
            types: HashMap::from([(PetType::Dog, 2)]),
            breeds: HashMap::from([("Poodle".to_string(), 1), ("Labrador".to_string(), 1)]),
            total: 2,
        }
    }

    #[test]
    fn test_seed_pet_freshness_is_neutral() {
        let windows = FreshnessWindows::default();
        let pet = create_test_pet(50, PetType::Dog, "Poodle");
        assert_eq!(freshness_score(&pet, Utc::now(), &windows), 50.0);
        assert_eq!(freshness_score(&pet, Utc::now() + Duration::days(400), &windows), 50.0);
    }

    #[test]
    fn test_freshness_windows() {
        let windows = FreshnessWindows::default();
        let now = Utc::now();
        let ms = now.timestamp_millis();

        let just_created = create_test_pet(ms - 1000, PetType::Cat, "Bengal");
        assert_eq!(freshness_score(&just_created, now, &windows), 100.0);

        let three_days = create_test_pet(ms - 3 * 86_400_000, PetType::Cat, "Bengal");
        assert_eq!(freshness_score(&three_days, now, &windows), 80.0);

        let eight_days = create_test_pet(ms - 8 * 86_400_000, PetType::Cat, "Bengal");
        assert_eq!(freshness_score(&eight_days, now, &windows), 40.0);
    }

    #[test]
    fn test_threshold_boundary() {
        let windows = FreshnessWindows::default();
        let now = Utc::now();
        let below = create_test_pet(99_999, PetType::Dog, "Pug");
        let at = create_test_pet(100_000, PetType::Dog, "Pug");
        assert_eq!(freshness_score(&below, now, &windows), 50.0);
        assert_eq!(freshness_score(&at, now, &windows), 40.0);
    }

    #[test]
    fn test_far_future_id_scores_fresh() {
        let windows = FreshnessWindows::default();
        let now = Utc::now();

        for id in [i64::MAX / 2, i64::MAX] {
            let pet = create_test_pet(id, PetType::Fish, "Betta");
            assert_eq!(freshness_score(&pet, now, &windows), 100.0, "id {}", id);
        }
    }

    #[test]
    fn test_explicit_created_at_wins() {
        let windows = FreshnessWindows::default();
        let now = Utc::now();
        let mut pet = create_test_pet(7, PetType::Bird, "Cockatiel");
        pet.created_at = Some(now - Duration::hours(2));
        assert_eq!(freshness_score(&pet, now, &windows), 100.0);
    }

    #[test]
    fn test_preference_cold_start() {
        let pet = create_test_pet(1, PetType::Dog, "Poodle");
        assert_eq!(preference_score(&pet, None), 0.0);
        assert_eq!(preference_score(&pet, Some(&PreferenceProfile::default())), 0.0);
    }

    #[test]
    fn test_preference_type_and_breed() {
        let profile = dog_profile();

        let poodle = create_test_pet(10, PetType::Dog, "Poodle");
        assert!((preference_score(&poodle, Some(&profile)) - 80.0).abs() < 1e-9);

        let beagle = create_test_pet(11, PetType::Dog, "Beagle");
        assert!((preference_score(&beagle, Some(&profile)) - 60.0).abs() < 1e-9);

        let cat = create_test_pet(12, PetType::Cat, "Siamese");
        assert_eq!(preference_score(&cat, Some(&profile)), 0.0);
    }

    #[test]
    fn test_preference_clamped_at_100() {
        // Counts inconsistent with total can only come from a hand-built profile
        let profile = PreferenceProfile {
            types: HashMap::from([(PetType::Dog, 3)]),
            breeds: HashMap::from([("Poodle".to_string(), 3)]),
            total: 2,
        };
        let poodle = create_test_pet(10, PetType::Dog, "Poodle");
        assert_eq!(preference_score(&poodle, Some(&profile)), 100.0);
    }

    #[test]
    fn test_random_score_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let score = random_score(&mut rng);
            assert!((0.0..100.0).contains(&score));
        }
    }

    #[test]
    fn test_score_pet_components_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let profile = dog_profile();
        let windows = FreshnessWindows::default();
        let pet = create_test_pet(Utc::now().timestamp_millis(), PetType::Dog, "Poodle");

        let scores = score_pet(&pet, Some(&profile), Utc::now(), &windows, &mut rng);

        for value in [scores.distance, scores.preference, scores.freshness, scores.random] {
            assert!((0.0..=100.0).contains(&value));
        }
        assert_eq!(scores.distance, 100.0);
    }
}
