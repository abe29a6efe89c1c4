use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredPet;

/// Ranked feed handed to the rendering layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedFeed {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub personalized: bool,
    pub pets: Vec<ScoredPet>,
    pub total_results: usize,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
