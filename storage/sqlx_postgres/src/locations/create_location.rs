use super::LocationRow;
use crate::repository::Repository;
use anyhow::Context;
use async_trait::async_trait;
use entities::locations::{Location, Slug};
use shared_kernel::owner_id::OwnerId;
use use_cases::create_location::{
    ConstraintKind, CreateLocationRepo, InsertLocationError, NewLocation,
};

const UNIQUE_SLUG_CONSTRAINT: &str = "locations_slug_key";
const UNIQUE_NAME_PER_OWNER_CONSTRAINT: &str = "locations_name_owner_id_key";

fn constraint_kind(constraint: Option<&str>) -> Option<ConstraintKind> {
    match constraint {
        Some(UNIQUE_SLUG_CONSTRAINT) => Some(ConstraintKind::UniqueSlug),
        Some(UNIQUE_NAME_PER_OWNER_CONSTRAINT) => Some(ConstraintKind::UniqueNamePerOwner),
        _ => None,
    }
}

fn into_insert_error(err: sqlx::Error) -> InsertLocationError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(kind) = constraint_kind(db_err.constraint()) {
            return InsertLocationError::Constraint(kind);
        }
    }
    InsertLocationError::Other(anyhow::Error::new(err).context("Failed to insert location"))
}

#[async_trait]
impl CreateLocationRepo for Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn location_name_exists(&self, name: String, owner_id: OwnerId) -> anyhow::Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "
            SELECT EXISTS(SELECT 1 FROM location.locations WHERE name = $1 AND owner_id = $2)
            ",
        )
        .bind(&name)
        .bind(owner_id.inner())
        .fetch_one(self.pool())
        .await
        .context("Failed to check whether the location name is taken")?;

        Ok(exists)
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn slug_exists(&self, slug: Slug) -> anyhow::Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "
            SELECT EXISTS(SELECT 1 FROM location.locations WHERE slug = $1)
            ",
        )
        .bind(slug.inner())
        .fetch_one(self.pool())
        .await
        .context("Failed to check whether the slug is taken")?;

        Ok(exists)
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn insert_location(
        &self,
        location: NewLocation,
    ) -> Result<Location, InsertLocationError> {
        let row = sqlx::query_as::<_, LocationRow>(
            "
            INSERT INTO location.locations (name, description, slug, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, slug, owner_id, created_at, updated_at
            ",
        )
        .bind(&location.name)
        .bind(&location.description)
        .bind(location.slug.inner())
        .bind(location.owner_id.inner())
        .fetch_one(self.pool())
        .await
        .map_err(into_insert_error)?;

        Ok(row.into())
    }
}
