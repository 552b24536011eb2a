use crate::api::PostsClient;
use crate::error::AppError;
use serde_json::json;

// Representative feed body with two posts.
fn feed_body() -> serde_json::Value {
    json!({
        "posts": [
            {
                "id": 1,
                "title": "His mother had always taught him",
                "body": "His mother had always taught him not to ever think of himself as better than others.",
                "tags": ["history", "american", "crime"],
                "reactions": { "likes": 192, "dislikes": 25 },
                "views": 305,
                "userId": 121
            },
            {
                "id": 2,
                "title": "He was an expert but not in a discipline",
                "body": "He was an expert but not in a discipline that anyone could fully appreciate.",
                "tags": ["french", "fiction", "english"],
                "reactions": { "likes": 859, "dislikes": 32 },
                "views": 4884,
                "userId": 306
            }
        ],
        "total": 2,
        "skip": 0,
        "limit": 30
    })
}

#[tokio::test]
async fn get_posts_returns_the_upstream_list_in_order() {
    let mut server = mockito::Server::new_async().await;
    let client = PostsClient::new_with_base_url(&server.url());

    let mock = server
        .mock("GET", "/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(feed_body().to_string())
        .create_async()
        .await;

    let posts = client.get_posts().await.unwrap();

    mock.assert_async().await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].title, "His mother had always taught him");
    assert_eq!(posts[0].reactions.likes, 192);
    assert_eq!(posts[1].id, 2);
    assert_eq!(posts[1].user_id, 306);
}

#[tokio::test]
async fn missing_posts_field_is_a_malformed_response() {
    let mut server = mockito::Server::new_async().await;
    let client = PostsClient::new_with_base_url(&server.url());

    let _mock = server
        .mock("GET", "/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "total": 0, "skip": 0, "limit": 30 }).to_string())
        .create_async()
        .await;

    let err = client.get_posts().await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[tokio::test]
async fn body_that_is_not_json_is_a_malformed_response() {
    let mut server = mockito::Server::new_async().await;
    let client = PostsClient::new_with_base_url(&server.url());

    let _mock = server
        .mock("GET", "/posts")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>So sorry</html>")
        .create_async()
        .await;

    let err = client.get_posts().await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[tokio::test]
async fn server_error_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let client = PostsClient::new_with_base_url(&server.url());

    let _mock = server
        .mock("GET", "/posts")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = client.get_posts().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Discard port; nothing listens here.
    let client = PostsClient::new_with_base_url("http://127.0.0.1:9");

    let err = client.get_posts().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}
