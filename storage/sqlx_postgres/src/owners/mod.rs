use crate::repository::Repository;
use anyhow::Context;
use async_trait::async_trait;
use entities::owners::{OwnerDetails, OwnerExternalId};
use shared_kernel::owner_id::OwnerId;
use use_cases::authentication::owner_resolution::OwnerResolverRepo;
use use_cases::authentication::OwnerAuthenticationRepo;
use uuid::Uuid;

#[async_trait]
impl OwnerAuthenticationRepo for Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn create_or_update_owner(&self, owner: OwnerDetails) -> anyhow::Result<()> {
        sqlx::query(
            r#"
        INSERT INTO public.owner (name, email, external_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (external_id)
        DO UPDATE SET name = EXCLUDED.name, email = EXCLUDED.email, last_login = now();
        "#,
        )
        .bind(owner.name.as_ref())
        .bind(owner.email.as_ref())
        .bind(owner.external_id.as_ref())
        .execute(self.pool())
        .await
        .context("Failed to create or update owner")
        .map(|_| ())
    }
}

#[async_trait]
impl OwnerResolverRepo for Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn find_owner_by_external_id(
        &self,
        external_id: OwnerExternalId,
    ) -> anyhow::Result<Option<OwnerId>> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "
            SELECT id FROM public.owner WHERE external_id = $1
            ",
        )
        .bind(external_id.inner())
        .fetch_optional(self.pool())
        .await
        .context("Failed to fetch owner")?;

        Ok(id.map(OwnerId::from))
    }
}
