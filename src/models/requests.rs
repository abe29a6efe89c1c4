use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::PetType;

/// A pet submitted by a user through onboarding
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPet {
    /// Optional caller-chosen id; a creation timestamp is used otherwise
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[serde(rename = "type", default)]
    pub pet_type: Option<PetType>,
    #[validate(length(min = 1, max = 128))]
    pub breed: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub traits: Vec<String>,
}
