use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::models::{NewPet, Pet, PetId, PetType};
use crate::services::catalog::{is_known_breed, seed_pets};
use crate::services::repository::{InteractionStore, PetRepository};

/// Distance recorded for pets added by the local user
const LOCAL_PET_DISTANCE: &str = "1m";

/// Errors that can occur when loading or mutating the local store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid pet: {0}")]
    InvalidPet(#[from] validator::ValidationErrors),

    #[error("Pet id already in use: {0}")]
    DuplicatePetId(PetId),
}

/// On-disk form of the user-created state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub likes: HashMap<String, Vec<PetId>>,
}

/// In-memory pet catalog and like store
///
/// Holds the seed catalog, pets added by users and each user's likes.
/// Likes keep their insertion order even though ranking ignores it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    seed: Vec<Pet>,
    user_pets: Vec<Pet>,
    likes: HashMap<String, Vec<PetId>>,
}

impl MemoryStore {
    /// Empty store with no seed catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the built-in seed pets
    pub fn with_seed_catalog() -> Self {
        Self {
            seed: seed_pets(),
            ..Self::default()
        }
    }

    /// Build a store from a snapshot, optionally on top of the seed catalog
    pub fn from_snapshot(snapshot: Snapshot, include_seed: bool) -> Self {
        let mut store = if include_seed {
            Self::with_seed_catalog()
        } else {
            Self::new()
        };
        store.user_pets = snapshot.pets;
        store.likes = snapshot.likes;
        store
    }

    /// Load a JSON snapshot from disk
    pub fn load_snapshot<P: AsRef<Path>>(path: P, include_seed: bool) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded snapshot from {} ({} user pets, {} users with likes)",
            path.as_ref().display(),
            snapshot.pets.len(),
            snapshot.likes.len()
        );

        Ok(Self::from_snapshot(snapshot, include_seed))
    }

    /// Write the user-created state (not the seed catalog) as JSON
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(path.as_ref(), json)?;
        tracing::debug!("Saved snapshot to {}", path.as_ref().display());
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pets: self.user_pets.clone(),
            likes: self.likes.clone(),
        }
    }

    pub fn get_pet(&self, id: PetId) -> Option<&Pet> {
        self.seed
            .iter()
            .chain(self.user_pets.iter())
            .find(|pet| pet.id == id)
    }

    fn contains_pet(&self, id: PetId) -> bool {
        self.get_pet(id).is_some()
    }

    fn max_pet_id(&self) -> Option<PetId> {
        self.seed
            .iter()
            .chain(self.user_pets.iter())
            .map(|pet| pet.id)
            .max()
    }

    /// Add a pet created by a user
    ///
    /// Without an explicit id the creation time in milliseconds is used,
    /// bumped past the largest existing id if it collides. Type defaults to
    /// dog and traits to `["Friendly"]`; distance is always local.
    pub fn add_user_pet(
        &mut self,
        new_pet: NewPet,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Pet, StoreError> {
        new_pet.validate()?;

        let id = match new_pet.id {
            Some(id) if self.contains_pet(id) => return Err(StoreError::DuplicatePetId(id)),
            Some(id) => id,
            None => {
                let stamp = now.timestamp_millis();
                if self.contains_pet(stamp) {
                    self.max_pet_id().map_or(stamp, |max| max.max(stamp) + 1)
                } else {
                    stamp
                }
            }
        };

        let pet_type = new_pet.pet_type.unwrap_or(PetType::Dog);
        if !is_known_breed(pet_type, &new_pet.breed) {
            tracing::debug!("Breed '{}' is not in the {} catalog", new_pet.breed, pet_type);
        }

        let traits = if new_pet.traits.is_empty() {
            vec!["Friendly".to_string()]
        } else {
            new_pet.traits
        };

        let pet = Pet {
            id,
            name: new_pet.name,
            pet_type,
            breed: new_pet.breed,
            distance: LOCAL_PET_DISTANCE.to_string(),
            age: new_pet.age,
            gender: new_pet.gender,
            bio: new_pet.bio,
            image: new_pet.images.first().cloned(),
            images: new_pet.images,
            owner: new_pet.owner,
            owner_id: owner_id.to_string(),
            traits,
            created_at: Some(now),
        };

        tracing::info!("Added pet {} ({}) for owner {}", pet.id, pet.name, owner_id);
        self.user_pets.push(pet.clone());
        Ok(pet)
    }

    /// Remove a user-created pet. Likes referencing it are left in place.
    pub fn remove_user_pet(&mut self, id: PetId) -> Option<Pet> {
        let index = self.user_pets.iter().position(|pet| pet.id == id)?;
        let removed = self.user_pets.remove(index);
        tracing::info!("Removed pet {}", id);
        Some(removed)
    }

    /// Like or unlike a pet
    ///
    /// # Returns
    /// `true` when the pet is liked after the call
    pub fn toggle_like(&mut self, user_id: &str, pet_id: PetId) -> bool {
        let likes = self.likes.entry(user_id.to_string()).or_default();

        // Snapshots may carry the same id twice; unliking clears every copy
        if likes.contains(&pet_id) {
            likes.retain(|id| *id != pet_id);
            tracing::debug!("User {} unliked pet {}", user_id, pet_id);
            false
        } else {
            likes.push(pet_id);
            tracing::debug!("User {} liked pet {}", user_id, pet_id);
            true
        }
    }

    /// Liked pet ids in the order they were liked
    pub fn likes_in_order(&self, user_id: &str) -> &[PetId] {
        self.likes.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl PetRepository for MemoryStore {
    fn all_pets(&self) -> Vec<Pet> {
        self.seed
            .iter()
            .chain(self.user_pets.iter())
            .cloned()
            .collect()
    }
}

impl InteractionStore for MemoryStore {
    fn likes(&self, user_id: &str) -> HashSet<PetId> {
        self.likes_in_order(user_id).iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_pet(name: &str, breed: &str) -> NewPet {
        NewPet {
            id: None,
            name: name.to_string(),
            pet_type: None,
            breed: breed.to_string(),
            age: "1 year".to_string(),
            gender: "Female".to_string(),
            bio: String::new(),
            images: vec!["data:image/png;base64,AAAA".to_string()],
            owner: "Alex".to_string(),
            traits: vec![],
        }
    }

    #[test]
    fn test_seed_pets_come_first() {
        let mut store = MemoryStore::with_seed_catalog();
        let seed_count = store.all_pets().len();
        let pet = store.add_user_pet(new_pet("Rex", "Beagle"), "u1", Utc::now()).unwrap();

        let all = store.all_pets();
        assert_eq!(all.len(), seed_count + 1);
        assert_eq!(all.last().map(|p| p.id), Some(pet.id));
    }

    #[test]
    fn test_add_user_pet_defaults() {
        let mut store = MemoryStore::new();
        let now = Utc::now();
        let pet = store.add_user_pet(new_pet("Rex", "Beagle"), "u1", now).unwrap();

        assert_eq!(pet.id, now.timestamp_millis());
        assert_eq!(pet.pet_type, PetType::Dog);
        assert_eq!(pet.distance, "1m");
        assert_eq!(pet.traits, vec!["Friendly"]);
        assert_eq!(pet.owner_id, "u1");
        assert_eq!(pet.created_at, Some(now));
        assert_eq!(pet.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_same_millisecond_ids_do_not_collide() {
        let mut store = MemoryStore::new();
        let now = Utc::now();
        let first = store.add_user_pet(new_pet("A", "Pug"), "u1", now).unwrap();
        let second = store.add_user_pet(new_pet("B", "Pug"), "u1", now).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_explicit_duplicate_id_rejected() {
        let mut store = MemoryStore::with_seed_catalog();
        let mut pet = new_pet("Dup", "Pug");
        pet.id = Some(1);
        let result = store.add_user_pet(pet, "u1", Utc::now());
        assert!(matches!(result, Err(StoreError::DuplicatePetId(1))));
    }

    #[test]
    fn test_invalid_pet_rejected() {
        let mut store = MemoryStore::new();
        let result = store.add_user_pet(new_pet("", "Pug"), "u1", Utc::now());
        assert!(matches!(result, Err(StoreError::InvalidPet(_))));
        assert!(store.all_pets().is_empty());
    }

    #[test]
    fn test_toggle_like() {
        let mut store = MemoryStore::with_seed_catalog();
        assert!(store.toggle_like("u1", 3));
        assert!(store.toggle_like("u1", 1));
        assert_eq!(store.likes_in_order("u1"), &[3, 1]);
        assert!(!store.toggle_like("u1", 3));
        assert_eq!(store.likes("u1"), HashSet::from([1]));
    }

    #[test]
    fn test_unlike_drops_duplicate_entries() {
        let snapshot = Snapshot {
            pets: vec![],
            likes: HashMap::from([("u1".to_string(), vec![200_000, 4, 200_000])]),
        };
        let mut store = MemoryStore::from_snapshot(snapshot, true);

        assert!(!store.toggle_like("u1", 200_000));
        assert!(!store.likes("u1").contains(&200_000));
        assert_eq!(store.likes_in_order("u1"), &[4]);

        // Next toggle likes it again
        assert!(store.toggle_like("u1", 200_000));
    }

    #[test]
    fn test_unknown_user_has_no_likes() {
        let store = MemoryStore::with_seed_catalog();
        assert!(store.likes("nobody").is_empty());
    }

    #[test]
    fn test_remove_keeps_dangling_likes() {
        let mut store = MemoryStore::new();
        let pet = store
            .add_user_pet(new_pet("Rex", "Beagle"), "u1", Utc::now() - Duration::days(1))
            .unwrap();
        store.toggle_like("u2", pet.id);

        assert!(store.remove_user_pet(pet.id).is_some());
        assert!(store.get_pet(pet.id).is_none());
        assert!(store.likes("u2").contains(&pet.id));
    }

    #[test]
    fn test_snapshot_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("petmatch.json");

        let mut store = MemoryStore::with_seed_catalog();
        let pet = store.add_user_pet(new_pet("Rex", "Beagle"), "u1", Utc::now()).unwrap();
        store.toggle_like("u1", 2);
        store.save_snapshot(&path).unwrap();

        let loaded = MemoryStore::load_snapshot(&path, true).unwrap();
        assert_eq!(loaded.all_pets(), store.all_pets());
        assert_eq!(loaded.likes("u1"), HashSet::from([2]));
        assert_eq!(loaded.get_pet(pet.id).map(|p| p.name.as_str()), Some("Rex"));
    }

    #[test]
    fn test_load_missing_snapshot_fails() {
        let result = MemoryStore::load_snapshot("/nonexistent/petmatch.json", false);
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
