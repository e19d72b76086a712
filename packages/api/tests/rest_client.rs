//! HTTP client tests against a mock service.

use api::RestClient;
use store::{
    ClientError, ListController, Post, PostDraft, PostPatch, RelationFilter, ResourceClient,
    Role, TextFilter, UserDraft,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestClient {
    RestClient::with_client(reqwest::Client::new(), &server.uri())
}

fn posts_json() -> serde_json::Value {
    serde_json::json!([
        { "userId": 1, "id": 1, "title": "first", "body": "one" },
        { "userId": 2, "id": 2, "title": "second", "body": "two" },
        { "userId": 1, "id": 3, "title": "third" }
    ])
}

fn users_json() -> serde_json::Value {
    serde_json::json!([
        { "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz", "phone": "ignored" },
        { "id": 3, "name": "Clementine Bauch", "username": "Samantha", "email": "Nathan@yesenia.net" }
    ])
}

#[tokio::test]
async fn test_list_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts_json()))
        .mount(&server)
        .await;

    let posts: Vec<Post> = client_for(&server).posts().list().await.unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[1].user_id, 2);
    assert_eq!(posts[2].body, None);
}

#[tokio::test]
async fn test_list_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).users().list().await.unwrap_err();
    assert_eq!(err, ClientError::Status { status: 500 });
}

#[tokio::test]
async fn test_list_garbage_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).posts().list().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_create_sends_camel_case_without_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({
            "name": "Jane Doe",
            "username": "jane",
            "email": "jane@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 11 })))
        .mount(&server)
        .await;

    let draft = UserDraft {
        name: "Jane Doe".to_string(),
        username: "jane".to_string(),
        email: "jane@example.com".to_string(),
        role: Role::Admin,
    };
    let reply = client_for(&server).users().create(&draft).await.unwrap();
    assert_eq!(reply.id, Some(11));
}

#[tokio::test]
async fn test_create_with_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .posts()
        .create(&PostDraft::default())
        .await
        .unwrap();
    assert_eq!(reply, PostPatch::default());
}

#[tokio::test]
async fn test_update_partial_reply() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/posts/2"))
        .and(body_json(serde_json::json!({ "title": "X" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 2, "title": "X" })),
        )
        .mount(&server)
        .await;

    let sent = PostPatch {
        title: Some("X".to_string()),
        ..Default::default()
    };
    let reply = client_for(&server).posts().update(2, &sent).await.unwrap();
    assert_eq!(reply.title.as_deref(), Some("X"));
    assert_eq!(reply.body, None);
}

#[tokio::test]
async fn test_delete_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/posts/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let posts = client_for(&server).posts();
    posts.delete(1).await.unwrap();
    assert_eq!(posts.delete(9).await, Err(ClientError::Status { status: 404 }));
}

#[tokio::test]
async fn test_posts_view_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 1 })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ListController::new(client.posts(), RelationFilter::new(Some(1)), 5);
    let authors = controller.load_with(&client.users()).await.unwrap();
    assert_eq!(authors[1].role, Role::Admin);
    assert_eq!(controller.view().filtered_len(), 2);

    assert!(controller.start_edit(1));
    controller.form_mut().draft_mut().title = "renamed".to_string();
    controller.submit().await.unwrap();
    let post = controller.view().get(1).unwrap();
    assert_eq!(post.title, "renamed");
    assert_eq!(post.body.as_deref(), Some("one"));
}

#[tokio::test]
async fn test_users_load_failure_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ListController::new(client.users(), TextFilter::default(), 5);
    let err = controller.load().await.unwrap_err();
    assert_eq!(err.message, "An unexpected error occurred while fetching users.");
}
