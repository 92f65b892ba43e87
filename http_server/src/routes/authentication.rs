use crate::authentication::AuthenticatedUserInfo;
use crate::errors::ApiError;
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use use_cases::authentication::OwnerDetailsInput;

#[derive(Serialize, Deserialize, Debug)]
struct OwnerRequest {
    name: String,
    email: String,
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn authentication(
    owner_details: web::Json<OwnerRequest>,
    app: web::Data<UseCaseAppContainer>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user: AuthenticatedUserInfo = (&req).try_into()?;
    let interactor = app.get_client().authentication();
    interactor
        .authenticate(
            &user,
            OwnerDetailsInput {
                name: owner_details.name.clone(),
                email: owner_details.email.clone(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/authenticate")
            .service(web::resource("").route(web::post().to(authentication))),
    );
}
