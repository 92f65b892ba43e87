use crate::actor::Actor;
use crate::authentication::owner_resolution::OwnerResolverInteractor;
use crate::slug;
use async_trait::async_trait;
use entities::locations::{Location, Slug};
#[cfg(test)]
use mockall::automock;
use shared_kernel::owner_id::OwnerId;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Upper bound on existence checks per request. The expected iteration
/// count is O(1) given the 36^5 suffix space; the database constraint
/// remains the final authority either way.
pub const MAX_SLUG_ATTEMPTS: usize = 10;

const MAX_NAME_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 1000;

#[derive(Debug)]
pub struct CreateLocationInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NewLocation {
    pub name: String,
    pub description: Option<String>,
    pub slug: Slug,
    pub owner_id: OwnerId,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintKind {
    UniqueSlug,
    UniqueNamePerOwner,
}

#[derive(Error, Debug)]
pub enum InsertLocationError {
    #[error("{0:?} constraint violated")]
    Constraint(ConstraintKind),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum CreateLocationError {
    #[error("Validation failed")]
    Validation(HashMap<String, String>),
    #[error("You already have a location with this name.")]
    DuplicateName,
    #[error("Slug must be unique (the location name is used to generate the slug).")]
    SlugConflict,
    #[error("Failed to generate a unique slug.")]
    SlugGenerationExhausted,
    #[error("Internal error")]
    InternalError(#[from] anyhow::Error),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CreateLocationRepo: Send + Sync {
    async fn location_name_exists(&self, name: String, owner_id: OwnerId) -> anyhow::Result<bool>;

    async fn slug_exists(&self, slug: Slug) -> anyhow::Result<bool>;

    async fn insert_location(&self, location: NewLocation)
        -> Result<Location, InsertLocationError>;
}

#[async_trait]
pub trait CreateLocationInteractor: Send + Sync {
    async fn create(
        &self,
        actor: &dyn Actor,
        input: CreateLocationInput,
    ) -> Result<Location, CreateLocationError>;
}

pub struct CreateLocationInteractorImpl {
    owner_resolver: Arc<dyn OwnerResolverInteractor>,
    repo: Arc<dyn CreateLocationRepo>,
}

impl CreateLocationInteractorImpl {
    pub fn new(
        owner_resolver: Arc<dyn OwnerResolverInteractor>,
        repo: Arc<dyn CreateLocationRepo>,
    ) -> Self {
        Self {
            owner_resolver,
            repo,
        }
    }

    async fn resolve_unique_slug(&self, base: String) -> Result<Slug, CreateLocationError> {
        let mut candidate = base.clone();
        for _ in 0..MAX_SLUG_ATTEMPTS {
            let taken = self
                .repo
                .slug_exists(Slug::from(candidate.clone()))
                .await
                .map_err(CreateLocationError::InternalError)?;
            if !taken {
                return Ok(Slug::from(candidate));
            }
            candidate = format!("{base}-{}", slug::random_suffix());
        }

        Err(CreateLocationError::SlugGenerationExhausted)
    }
}

fn validate(input: &CreateLocationInput) -> HashMap<String, String> {
    let mut field_errors = HashMap::new();
    let name = input.name.trim();
    if name.is_empty() {
        field_errors.insert("name".to_string(), "name cannot be empty".to_string());
    } else if slug::slugify(name).is_empty() {
        field_errors.insert(
            "name".to_string(),
            "name must contain at least one letter or number".to_string(),
        );
    } else if name.chars().count() > MAX_NAME_LENGTH {
        field_errors.insert(
            "name".to_string(),
            format!("name cannot be longer than {MAX_NAME_LENGTH} characters"),
        );
    }
    if let Some(description) = &input.description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            field_errors.insert(
                "description".to_string(),
                format!("description cannot be longer than {MAX_DESCRIPTION_LENGTH} characters"),
            );
        }
    }
    field_errors
}

#[async_trait]
impl CreateLocationInteractor for CreateLocationInteractorImpl {
    #[tracing::instrument(err, skip(self, actor), level = "info")]
    async fn create(
        &self,
        actor: &dyn Actor,
        input: CreateLocationInput,
    ) -> Result<Location, CreateLocationError> {
        let field_errors = validate(&input);
        if !field_errors.is_empty() {
            return Err(CreateLocationError::Validation(field_errors));
        }

        let owner_id = self
            .owner_resolver
            .resolve_from_actor(actor)
            .await
            .map_err(CreateLocationError::InternalError)?;

        let name_taken = self
            .repo
            .location_name_exists(input.name.clone(), owner_id)
            .await
            .map_err(CreateLocationError::InternalError)?;
        if name_taken {
            return Err(CreateLocationError::DuplicateName);
        }

        let slug = self.resolve_unique_slug(slug::slugify(&input.name)).await?;

        self.repo
            .insert_location(NewLocation {
                name: input.name,
                description: input.description,
                slug,
                owner_id,
            })
            .await
            .map_err(|err| match err {
                InsertLocationError::Constraint(ConstraintKind::UniqueSlug) => {
                    CreateLocationError::SlugConflict
                }
                InsertLocationError::Constraint(ConstraintKind::UniqueNamePerOwner) => {
                    CreateLocationError::DuplicateName
                }
                InsertLocationError::Other(err) => CreateLocationError::InternalError(err),
            })
    }
}
