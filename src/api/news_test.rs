use crate::api::NewsClient;
use crate::error::AppError;
use mockito::Matcher;
use rstest::rstest;
use serde_json::json;

// Representative top-headlines body with two articles.
fn headlines_body() -> serde_json::Value {
    json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": { "id": null, "name": "El Universal" },
                "author": "Redacción",
                "title": "Anuncian nueva línea del tren ligero",
                "description": "La obra arrancará este año.",
                "url": "https://example.mx/tren-ligero",
                "urlToImage": "https://example.mx/tren-ligero.jpg",
                "publishedAt": "2024-05-31T12:00:00Z",
                "content": "La obra arrancará este año..."
            },
            {
                "source": { "id": "el-informador", "name": "El Informador" },
                "author": null,
                "title": "Cierra la temporada de estiaje",
                "description": null,
                "url": "https://example.mx/estiaje",
                "urlToImage": null,
                "publishedAt": "2024-05-31T09:30:00Z",
                "content": null
            }
        ]
    })
}

#[tokio::test]
async fn get_top_headlines_always_requests_mx() {
    let mut server = mockito::Server::new_async().await;
    let client = NewsClient::new_with_base_url("test_key".to_string(), &server.url());

    let mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "mx".into()),
            Matcher::UrlEncoded("apiKey".into(), "test_key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(headlines_body().to_string())
        .create_async()
        .await;

    let articles = client.get_top_headlines().await.unwrap();

    mock.assert_async().await;
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Anuncian nueva línea del tren ligero");
    assert_eq!(articles[0].source.name, "El Universal");
    assert_eq!(articles[1].title, "Cierra la temporada de estiaje");
    assert!(articles[1].author.is_none());
}

#[tokio::test]
async fn missing_articles_field_is_a_malformed_response() {
    let mut server = mockito::Server::new_async().await;
    let client = NewsClient::new_with_base_url("test_key".to_string(), &server.url());

    let _mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "status": "ok", "totalResults": 0 }).to_string())
        .create_async()
        .await;

    let err = client.get_top_headlines().await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[rstest]
#[case(401)]
#[case(403)]
#[tokio::test]
async fn credential_rejection_is_unauthorized(#[case] status: usize) {
    let mut server = mockito::Server::new_async().await;
    let client = NewsClient::new_with_base_url("bad_key".to_string(), &server.url());

    let _mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client.get_top_headlines().await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn server_error_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let client = NewsClient::new_with_base_url("test_key".to_string(), &server.url());

    let _mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let err = client.get_top_headlines().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Discard port; nothing listens here.
    let client = NewsClient::new_with_base_url("test_key".to_string(), "http://127.0.0.1:9");

    let err = client.get_top_headlines().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}
