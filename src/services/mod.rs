// Service exports
pub mod catalog;
pub mod memory;
pub mod repository;

pub use catalog::{breeds_for, is_known_breed, seed_pets};
pub use memory::{MemoryStore, Snapshot, StoreError};
pub use repository::{InteractionStore, PetRepository};
