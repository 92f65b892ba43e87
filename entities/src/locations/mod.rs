use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::owner_id::OwnerId;
use shared_kernel::{string_key, uuid_key};

uuid_key!(LocationId);
string_key!(Slug);

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: Option<String>,
    pub slug: Slug,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
