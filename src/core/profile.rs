use std::collections::HashSet;
use crate::models::{Pet, PetId, PreferenceProfile};
use crate::services::InteractionStore;

/// Tally type and breed counts over the liked pets present in `pets`
///
/// Likes that reference pets missing from the catalog are ignored.
///
/// # Returns
/// `None` when no liked pet is in the catalog (cold start)
pub fn profile_from_likes(pets: &[Pet], likes: &HashSet<PetId>) -> Option<PreferenceProfile> {
    let mut profile = PreferenceProfile::default();

    for pet in pets.iter().filter(|pet| likes.contains(&pet.id)) {
        *profile.types.entry(pet.pet_type).or_insert(0) += 1;
        *profile.breeds.entry(pet.breed.clone()).or_insert(0) += 1;
        profile.total += 1;
    }

    if profile.total == 0 {
        None
    } else {
        Some(profile)
    }
}

/// Build the preference profile for a user from their current likes
pub fn build_profile<S>(pets: &[Pet], store: &S, user_id: &str) -> Option<PreferenceProfile>
where
    S: InteractionStore + ?Sized,
{
    let likes = store.likes(user_id);
    let profile = profile_from_likes(pets, &likes);

    match &profile {
        Some(p) => tracing::debug!(
            "Built profile for {}: {} liked pets, {} types, {} breeds",
            user_id,
            p.total,
            p.types.len(),
            p.breeds.len()
        ),
        None => tracing::debug!(
            "No usable like history for {} ({} likes), cold start",
            user_id,
            likes.len()
        ),
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PetType;

    fn create_test_pet(id: PetId, pet_type: PetType, breed: &str) -> Pet {
        Pet {
            id,
            name: format!("Pet {}", id),
            pet_type,
            breed: breed.to_string(),
            distance: "5m".to_string(),
            age: String::new(),
            gender: String::new(),
            bio: String::new(),
            image: None,
            images: vec![],
            owner: String::new(),
            owner_id: String::new(),
            traits: vec![],
            created_at: None,
        }
    }

    fn catalog() -> Vec<Pet> {
        vec![
            create_test_pet(1, PetType::Dog, "Poodle"),
            create_test_pet(2, PetType::Dog, "Labrador"),
            create_test_pet(3, PetType::Cat, "Siamese"),
        ]
    }

    #[test]
    fn test_empty_likes_is_cold_start() {
        assert!(profile_from_likes(&catalog(), &HashSet::new()).is_none());
    }

    #[test]
    fn test_counts_types_and_breeds() {
        let profile = profile_from_likes(&catalog(), &HashSet::from([1, 2])).unwrap();

        assert_eq!(profile.total, 2);
        assert_eq!(profile.type_count(PetType::Dog), 2);
        assert_eq!(profile.type_count(PetType::Cat), 0);
        assert_eq!(profile.breed_count("Poodle"), 1);
        assert_eq!(profile.breed_count("Labrador"), 1);
    }

    #[test]
    fn test_missing_pets_ignored() {
        let profile = profile_from_likes(&catalog(), &HashSet::from([3, 999])).unwrap();
        assert_eq!(profile.total, 1);
        assert_eq!(profile.type_count(PetType::Cat), 1);
    }

    #[test]
    fn test_only_missing_pets_is_cold_start() {
        assert!(profile_from_likes(&catalog(), &HashSet::from([404, 405])).is_none());
    }
}
