use actix_web::web;

use crate::routes::{
    create_post, delete_post, dislike_post, get_all_posts, get_post, like_post,
    show_comments_for_post, update_post,
};

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_all_posts))
        .route("", web::post().to(create_post))
        .route("/{post_id}", web::get().to(get_post))
        .route("/{post_id}", web::patch().to(update_post))
        .route("/{post_id}", web::delete().to(delete_post))
        .route("/{post_id}/comments", web::get().to(show_comments_for_post))
        .route("/{post_id}/like", web::post().to(like_post))
        .route("/{post_id}/dislike", web::post().to(dislike_post));
}
