pub mod owner_resolution;

use crate::actor::Actor;
use async_trait::async_trait;
use entities::owners::{OwnerDetails, OwnerEmail, OwnerName};
#[cfg(test)]
use mockall::automock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug)]
pub struct OwnerDetailsInput {
    pub name: String,
    pub email: String,
}

#[derive(Error, Debug)]
pub enum AuthenticationError {
    #[error("Validation failed")]
    Validation(HashMap<String, String>),
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait OwnerAuthenticationRepo: Send + Sync {
    async fn create_or_update_owner(&self, owner: OwnerDetails) -> anyhow::Result<()>;
}

#[async_trait]
pub trait AuthenticationInteractor: Send + Sync {
    async fn authenticate(
        &self,
        actor: &dyn Actor,
        owner: OwnerDetailsInput,
    ) -> Result<(), AuthenticationError>;
}

pub struct AuthenticationInteractorImpl {
    repo: Arc<dyn OwnerAuthenticationRepo>,
}

#[async_trait]
impl AuthenticationInteractor for AuthenticationInteractorImpl {
    #[tracing::instrument(err, skip(self, actor), level = "info")]
    async fn authenticate(
        &self,
        actor: &dyn Actor,
        owner: OwnerDetailsInput,
    ) -> Result<(), AuthenticationError> {
        let name = OwnerName::try_from(owner.name);
        let email = OwnerEmail::try_from(owner.email);
        let (name, email) = match (name, email) {
            (Ok(name), Ok(email)) => (name, email),
            (name, email) => {
                let mut field_errors = HashMap::new();
                if let Err(err) = name {
                    field_errors.insert("name".to_string(), err);
                }
                if let Err(err) = email {
                    field_errors.insert("email".to_string(), err);
                }
                return Err(AuthenticationError::Validation(field_errors));
            }
        };

        let details = OwnerDetails {
            name,
            email,
            external_id: actor.external_id(),
        };

        self.repo.create_or_update_owner(details).await?;

        Ok(())
    }
}

impl AuthenticationInteractorImpl {
    pub fn new(repo: Arc<dyn OwnerAuthenticationRepo>) -> Self {
        Self { repo }
    }
}

#[cfg(test)]
mod tests {
    use crate::actor::MockActor;
    use crate::authentication::MockOwnerAuthenticationRepo;
    use crate::authentication::{
        AuthenticationError, AuthenticationInteractor, AuthenticationInteractorImpl,
        OwnerDetailsInput,
    };
    use entities::owners::OwnerExternalId;

    use std::sync::Arc;

    fn mock_actor() -> MockActor {
        let mut mock_actor = MockActor::new();
        mock_actor
            .expect_external_id()
            .returning(|| OwnerExternalId::try_from("auth|external_id".to_string()).unwrap());
        mock_actor
    }

    #[tokio::test]
    async fn test_that_an_invalid_email_reads_as_a_field_error() {
        let mock_repo = MockOwnerAuthenticationRepo::new();
        let mock_actor = mock_actor();
        let interactor = AuthenticationInteractorImpl::new(Arc::new(mock_repo));

        let result = interactor
            .authenticate(
                &mock_actor,
                OwnerDetailsInput {
                    name: "Ada".to_string(),
                    email: "just-an-email.com".to_string(),
                },
            )
            .await;

        match result {
            Err(AuthenticationError::Validation(fields)) => {
                assert!(fields.contains_key("email"));
                assert!(!fields.contains_key("name"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_that_an_empty_name_reads_as_a_field_error() {
        let mock_repo = MockOwnerAuthenticationRepo::new();
        let mock_actor = mock_actor();
        let interactor = AuthenticationInteractorImpl::new(Arc::new(mock_repo));

        let result = interactor
            .authenticate(
                &mock_actor,
                OwnerDetailsInput {
                    name: "  ".to_string(),
                    email: "ada@example.com".to_string(),
                },
            )
            .await;

        match result {
            Err(AuthenticationError::Validation(fields)) => {
                assert!(fields.contains_key("name"))
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_that_valid_owner_details_are_submitted() {
        let mut mock_repo = MockOwnerAuthenticationRepo::new();
        mock_repo
            .expect_create_or_update_owner()
            .times(1)
            .returning(|_| Ok(()));
        let mock_actor = mock_actor();
        let interactor = AuthenticationInteractorImpl::new(Arc::new(mock_repo));

        let result = interactor
            .authenticate(
                &mock_actor,
                OwnerDetailsInput {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                },
            )
            .await;

        assert!(result.is_ok());
    }
}
