use super::LocationRow;
use crate::repository::Repository;
use anyhow::Context;
use async_trait::async_trait;
use entities::locations::Location;
use shared_kernel::owner_id::OwnerId;
use use_cases::list_locations::ListLocationsRepo;

#[async_trait]
impl ListLocationsRepo for Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn find_locations_by_owner(&self, owner_id: OwnerId) -> anyhow::Result<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            "
            SELECT id, name, description, slug, owner_id, created_at, updated_at
            FROM location.locations WHERE owner_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id.inner())
        .fetch_all(self.pool())
        .await
        .context("Failed to fetch locations")?;

        Ok(rows.into_iter().map(Location::from).collect())
    }
}
