use actix_web::{web, HttpRequest};
use chrono::{DateTime, Utc};
use entities::locations::Location;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    authentication::AuthenticatedUserInfo, errors::ApiError,
    use_case_app_container::UseCaseAppContainer,
};

#[derive(Serialize)]
pub(super) struct LocationResponse {
    id: Uuid,
    name: String,
    description: Option<String>,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub(super) struct LocationsResponseWrapper {
    items: Vec<LocationResponse>,
}

impl From<Location> for LocationResponse {
    fn from(value: Location) -> Self {
        Self {
            id: value.id.inner(),
            name: value.name,
            description: value.description,
            slug: value.slug.inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[tracing::instrument(err, skip(app), level = "info")]
pub(super) async fn list_locations(
    app: web::Data<UseCaseAppContainer>,
    req: HttpRequest,
) -> Result<web::Json<LocationsResponseWrapper>, ApiError> {
    let user: AuthenticatedUserInfo = (&req).try_into()?;
    let interactor = app.get_client().list_locations();
    let results = interactor
        .list(&user)
        .await
        .map_err(ApiError::InternalServerError)?;

    let response = LocationsResponseWrapper {
        items: results.into_iter().map(Into::into).collect(),
    };

    Ok(web::Json(response))
}
