use crate::helpers::spawn_app;
use serde_json::{Value, json};

#[tokio::test]
async fn created_reply_is_listed_under_its_parent() {
    let app = spawn_app().await;
    let parent = app.create_sample_post().await;

    let response = app
        .create_post(&json!({ "content": "This is a reply", "parentId": parent }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["data"]["parentId"], parent);

    let response = app.get_comments(parent).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Comments loaded successfully!");
    let comments = body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["id"], created["data"]["id"]);
    assert_eq!(comments[0]["content"], "This is a reply");
}

#[tokio::test]
async fn comments_are_newest_first_and_scoped_to_parent() {
    let app = spawn_app().await;
    let parent = app.create_sample_post().await;
    let other = app.create_sample_post().await;

    let older = app.create_sample_comment(parent).await;
    let newer = app.create_sample_comment(parent).await;
    app.create_sample_comment(other).await;

    let body: Value = app.get_comments(parent).await.json().await.unwrap();
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();

    assert_eq!(ids, vec![newer, older]);
}

#[tokio::test]
async fn get_comments_returns_empty_array_for_post_with_no_comments() {
    let app = spawn_app().await;
    let post_id = app.create_sample_post().await;

    let response = app.get_comments(post_id).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_comments_ignores_page_parameter() {
    let app = spawn_app().await;
    let parent = app.create_sample_post().await;
    app.create_sample_comment(parent).await;

    let response = app
        .send_get(&format!("api/posts/{parent}/comments?page=3"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_comments_returns_400_for_invalid_post_id() {
    let app = spawn_app().await;

    let response = app.get_comments("abc").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid post ID");
}
