use crate::authentication::owner_resolution::OwnerResolverInteractorImpl;
use crate::authentication::{AuthenticationInteractor, AuthenticationInteractorImpl};
use crate::create_location::{CreateLocationInteractor, CreateLocationInteractorImpl};
use crate::list_locations::{ListLocationsInteractor, ListLocationsInteractorImpl};
use crate::repositories::Repository;
use std::sync::Arc;

pub mod actor;
pub mod authentication;
pub mod create_location;
pub mod list_locations;
mod repositories;
pub mod slug;

pub trait App {
    fn authentication(&self) -> &dyn AuthenticationInteractor;
    fn create_location(&self) -> &dyn CreateLocationInteractor;
    fn list_locations(&self) -> &dyn ListLocationsInteractor;
}

pub struct AppImpl {
    authentication: Arc<dyn AuthenticationInteractor>,
    create_location: Arc<dyn CreateLocationInteractor>,
    list_locations: Arc<dyn ListLocationsInteractor>,
}

impl App for AppImpl {
    fn authentication(&self) -> &dyn AuthenticationInteractor {
        self.authentication.as_ref()
    }

    fn create_location(&self) -> &dyn CreateLocationInteractor {
        self.create_location.as_ref()
    }

    fn list_locations(&self) -> &dyn ListLocationsInteractor {
        self.list_locations.as_ref()
    }
}

impl AppImpl {
    pub fn new<R: Repository + 'static>(repo: R) -> Self {
        let repository = Arc::new(repo);
        let owner_resolver = Arc::new(OwnerResolverInteractorImpl::new(repository.clone()));
        let authentication_interactor = AuthenticationInteractorImpl::new(repository.clone());
        let create_location_interactor =
            CreateLocationInteractorImpl::new(owner_resolver.clone(), repository.clone());
        let list_locations_interactor =
            ListLocationsInteractorImpl::new(owner_resolver, repository);

        Self {
            authentication: Arc::new(authentication_interactor),
            create_location: Arc::new(create_location_interactor),
            list_locations: Arc::new(list_locations_interactor),
        }
    }
}
