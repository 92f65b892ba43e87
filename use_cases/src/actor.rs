use entities::owners::OwnerExternalId;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Actor: Send + Sync {
    fn external_id(&self) -> OwnerExternalId;
}
