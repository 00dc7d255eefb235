use crate::helpers::spawn_app;
use anonboard::domain::{PostId, Reaction, ReactionPayload};
use anonboard::repository;
use anonboard::routes::LikeError;
use serde_json::{Value, json};

#[tokio::test]
async fn like_returns_counts_and_message() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    let response = app
        .like_post(post_id, &json!({ "isLike": true, "userId": user_id }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Post liked successfully!");
    assert_eq!(
        body["data"],
        json!({ "postId": post_id, "likeCount": 1, "dislikeCount": 0 })
    );
}

#[tokio::test]
async fn like_with_false_flag_reports_a_dislike() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    let body = app.react_as(post_id, user_id, false).await;

    assert_eq!(body["message"], "Post disliked successfully!");
    assert_eq!(body["data"]["dislikeCount"], 1);
}

#[tokio::test]
async fn liking_twice_keeps_one_row_with_latest_flag() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    app.react_as(post_id, user_id, true).await;
    let body = app.react_as(post_id, user_id, false).await;

    assert_eq!(app.stored_reactions(post_id, user_id).await, vec![false]);
    assert_eq!(body["data"]["likeCount"], 0);
    assert_eq!(body["data"]["dislikeCount"], 1);
}

#[tokio::test]
async fn concurrent_likes_from_one_user_keep_one_row() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    let payload = json!({ "isLike": true, "userId": user_id });
    let (a, b) = tokio::join!(
        app.like_post(post_id, &payload),
        app.like_post(post_id, &payload)
    );

    assert_eq!(a.status().as_u16(), 200);
    assert_eq!(b.status().as_u16(), 200);
    assert_eq!(app.stored_reactions(post_id, user_id).await, vec![true]);
}

#[tokio::test]
async fn dislike_always_stores_false() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    let response = app
        .dislike_post(post_id, &json!({ "isLike": true, "userId": user_id }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Post disliked successfully!");
    assert_eq!(body["data"]["likeCount"], 0);
    assert_eq!(body["data"]["dislikeCount"], 1);
    assert_eq!(app.stored_reactions(post_id, user_id).await, vec![false]);
}

#[tokio::test]
async fn dislike_flips_an_existing_like() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;
    app.react_as(post_id, user_id, true).await;

    let response = app
        .dislike_post(post_id, &json!({ "isLike": false, "userId": user_id }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.stored_reactions(post_id, user_id).await, vec![false]);
}

#[tokio::test]
async fn counts_match_distinct_users() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let (likes, dislikes) = (3, 2);

    for _ in 0..likes {
        let user_id = app.store_user().await;
        app.react_as(post_id, user_id, true).await;
    }
    let mut last = Value::Null;
    for _ in 0..dislikes {
        let user_id = app.store_user().await;
        let response = app
            .dislike_post(post_id, &json!({ "isLike": false, "userId": user_id }))
            .await;
        assert_eq!(response.status().as_u16(), 200);
        last = response.json().await.unwrap();
    }

    assert_eq!(last["data"]["likeCount"], likes);
    assert_eq!(last["data"]["dislikeCount"], dislikes);
}

#[tokio::test]
async fn like_returns_400_for_invalid_input() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    let response = app
        .like_post("abc", &json!({ "isLike": true, "userId": user_id }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid post ID");

    let response = app.like_post(post_id, &json!({ "isLike": true })).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid user ID");

    let response = app.like_post(post_id, &json!({ "userId": user_id })).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn dislike_returns_400_for_invalid_body() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    let invalid_payloads = vec![
        json!({ "userId": user_id }),
        json!({ "isLike": "yes", "userId": user_id }),
        json!({ "isLike": false }),
    ];

    for payload in invalid_payloads {
        let response = app.dislike_post(post_id, &payload).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Expected 400 for payload {payload}"
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Invalid request body");
    }
}

#[tokio::test]
async fn like_returns_404_for_unknown_user_or_post() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;
    let user_id = app.store_user().await;

    let response = app
        .like_post(post_id, &json!({ "isLike": true, "userId": 987654 }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User not found");

    let response = app
        .like_post(post_id + 100, &json!({ "isLike": true, "userId": user_id }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Post not found");

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn reaction_to_a_post_deleted_after_the_checks_is_a_missing_post() {
    let app = spawn_app().await;
    let user_id = app.store_user().await;
    let post_id = app.create_sample_post().await;
    let reaction = Reaction::like(
        PostId::try_from(post_id).unwrap(),
        ReactionPayload {
            is_like: Some(true),
            user_id: Some(user_id),
        },
    )
    .unwrap();
    app.delete_post(post_id).await;

    let result = repository::upsert_reaction(&reaction, &app.db_pool).await;

    assert!(
        matches!(result, Err(LikeError::PostNotFound)),
        "Expected PostNotFound, got {result:?}"
    );
}
