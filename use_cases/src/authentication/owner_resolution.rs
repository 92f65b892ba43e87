use crate::actor::Actor;
use anyhow::anyhow;
use async_trait::async_trait;
use entities::owners::OwnerExternalId;
#[cfg(test)]
use mockall::automock;
use shared_kernel::owner_id::OwnerId;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait OwnerResolverRepo: Send + Sync {
    async fn find_owner_by_external_id(
        &self,
        external_id: OwnerExternalId,
    ) -> anyhow::Result<Option<OwnerId>>;
}

#[async_trait]
pub trait OwnerResolverInteractor: Send + Sync {
    async fn resolve_from_actor(&self, actor: &dyn Actor) -> anyhow::Result<OwnerId>;
}

pub struct OwnerResolverInteractorImpl {
    repo: Arc<dyn OwnerResolverRepo>,
}

impl OwnerResolverInteractorImpl {
    pub fn new(repo: Arc<dyn OwnerResolverRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl OwnerResolverInteractor for OwnerResolverInteractorImpl {
    #[tracing::instrument(err, skip(self, actor), level = "info")]
    async fn resolve_from_actor(&self, actor: &dyn Actor) -> anyhow::Result<OwnerId> {
        let external_id = actor.external_id();
        let owner_id = self
            .repo
            .find_owner_by_external_id(external_id.clone())
            .await?;

        owner_id.ok_or_else(|| anyhow!("Owner {} has not been registered", external_id.as_ref()))
    }
}
