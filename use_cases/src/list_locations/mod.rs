use crate::actor::Actor;
use crate::authentication::owner_resolution::OwnerResolverInteractor;
use async_trait::async_trait;
use entities::locations::Location;
#[cfg(test)]
use mockall::automock;
use shared_kernel::owner_id::OwnerId;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ListLocationsRepo: Send + Sync {
    async fn find_locations_by_owner(&self, owner_id: OwnerId) -> anyhow::Result<Vec<Location>>;
}

#[async_trait]
pub trait ListLocationsInteractor: Send + Sync {
    async fn list(&self, actor: &dyn Actor) -> anyhow::Result<Vec<Location>>;
}

pub struct ListLocationsInteractorImpl {
    owner_resolver: Arc<dyn OwnerResolverInteractor>,
    repo: Arc<dyn ListLocationsRepo>,
}

impl ListLocationsInteractorImpl {
    pub fn new(
        owner_resolver: Arc<dyn OwnerResolverInteractor>,
        repo: Arc<dyn ListLocationsRepo>,
    ) -> Self {
        Self {
            owner_resolver,
            repo,
        }
    }
}

#[async_trait]
impl ListLocationsInteractor for ListLocationsInteractorImpl {
    #[tracing::instrument(err, skip(self, actor), level = "info")]
    async fn list(&self, actor: &dyn Actor) -> anyhow::Result<Vec<Location>> {
        let owner_id = self.owner_resolver.resolve_from_actor(actor).await?;
        self.repo.find_locations_by_owner(owner_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::MockActor;
    use crate::authentication::owner_resolution::{
        MockOwnerResolverRepo, OwnerResolverInteractorImpl,
    };
    use entities::owners::OwnerExternalId;

    #[tokio::test]
    async fn test_that_only_the_resolved_owners_locations_are_requested() {
        let owner_id = OwnerId::new();
        let mut mock_actor = MockActor::new();
        mock_actor
            .expect_external_id()
            .returning(|| OwnerExternalId::try_from("auth|external_id".to_string()).unwrap());

        let mut resolver_repo = MockOwnerResolverRepo::new();
        resolver_repo
            .expect_find_owner_by_external_id()
            .returning(move |_| Ok(Some(owner_id)));

        let mut mock_repo = MockListLocationsRepo::new();
        mock_repo
            .expect_find_locations_by_owner()
            .withf(move |id| *id == owner_id)
            .returning(|_| Ok(vec![]));

        let interactor = ListLocationsInteractorImpl::new(
            Arc::new(OwnerResolverInteractorImpl::new(Arc::new(resolver_repo))),
            Arc::new(mock_repo),
        );

        let locations = interactor.list(&mock_actor).await.unwrap();
        assert!(locations.is_empty());
    }
}
