use crate::authentication::owner_resolution::OwnerResolverRepo;
use crate::authentication::OwnerAuthenticationRepo;
use crate::create_location::CreateLocationRepo;
use crate::list_locations::ListLocationsRepo;

pub trait Repository:
    OwnerAuthenticationRepo + OwnerResolverRepo + CreateLocationRepo + ListLocationsRepo + Clone
{
}

impl<T> Repository for T where
    T: Clone + OwnerAuthenticationRepo + OwnerResolverRepo + CreateLocationRepo + ListLocationsRepo
{
}
