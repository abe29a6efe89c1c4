use std::collections::HashSet;
use crate::models::{Pet, PetId};

/// Read access to every pet the app currently knows about
///
/// Implementations return seed pets first, then user pets in creation
/// order, and return owned records so a ranking call never observes
/// mutation made after it started.
pub trait PetRepository {
    fn all_pets(&self) -> Vec<Pet>;
}

/// Read access to per-user like sets
pub trait InteractionStore {
    /// Pets the user has liked. Unknown users have an empty set.
    fn likes(&self, user_id: &str) -> HashSet<PetId>;
}

impl<T: PetRepository + ?Sized> PetRepository for &T {
    fn all_pets(&self) -> Vec<Pet> {
        (**self).all_pets()
    }
}

impl<T: InteractionStore + ?Sized> InteractionStore for &T {
    fn likes(&self, user_id: &str) -> HashSet<PetId> {
        (**self).likes(user_id)
    }
}
