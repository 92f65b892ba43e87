use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use use_cases::create_location::CreateLocationInput;

use crate::{
    authentication::AuthenticatedUserInfo, errors::ApiError,
    use_case_app_container::UseCaseAppContainer,
};

#[derive(Debug, Deserialize)]
pub(super) struct CreateLocationRequest {
    name: String,
    description: Option<String>,
}

impl From<CreateLocationRequest> for CreateLocationInput {
    fn from(value: CreateLocationRequest) -> Self {
        CreateLocationInput {
            name: value.name,
            description: value.description,
        }
    }
}

#[tracing::instrument(err, skip(app), level = "info")]
pub(super) async fn create_location(
    data: web::Json<CreateLocationRequest>,
    app: web::Data<UseCaseAppContainer>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user: AuthenticatedUserInfo = (&req).try_into()?;
    let interactor = app.get_client().create_location();

    let data = data.into_inner();
    let location = interactor.create(&user, data.into()).await?;

    Ok(HttpResponse::Ok().json(location))
}
