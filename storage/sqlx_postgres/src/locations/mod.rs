mod create_location;
mod list_locations;

use chrono::{DateTime, Utc};
use entities::locations::Location;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct LocationRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    slug: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            slug: row.slug.into(),
            owner_id: row.owner_id.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
