use actix_web::web;

use crate::routes;

pub fn user_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{user_id}/posts", web::get().to(routes::get_user_posts))
        .route("/{user_id}/posts", web::post().to(routes::create_user_post))
        .route(
            "/{user_id}/posts/{post_id}",
            web::put().to(routes::update_user_post),
        )
        .route(
            "/{user_id}/posts/{post_id}",
            web::delete().to(routes::delete_user_post),
        );
}
