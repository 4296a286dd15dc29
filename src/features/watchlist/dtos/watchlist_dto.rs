use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Watch state of a listing after a toggle
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WatchStatusDto {
    pub listing_id: Uuid,
    pub watching: bool,
}
