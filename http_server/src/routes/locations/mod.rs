mod create_location;
mod list_locations;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/locations").service(
            web::resource("")
                .route(web::post().to(create_location::create_location))
                .route(web::get().to(list_locations::list_locations)),
        ),
    );
}
