use std::marker::PhantomData;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use store::config::ApiConfig;
use store::{ClientError, Id, Post, Record, ResourceClient, User};

/// A record type served under its own path segment.
pub trait RestResource: Record + DeserializeOwned
where
    Self::Patch: Serialize + DeserializeOwned,
{
    /// Collection path relative to the base URL.
    const PATH: &'static str;
}

impl RestResource for User {
    const PATH: &'static str = "users";
}

impl RestResource for Post {
    const PATH: &'static str = "posts";
}

/// HTTP client for the remote service.
///
/// The base URL is not validated up front; a malformed one makes every call fail
/// with [`ClientError::Request`], which the views already handle.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), &config.base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, headers).
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users(&self) -> Collection<User> {
        self.collection()
    }

    pub fn posts(&self) -> Collection<Post> {
        self.collection()
    }

    pub fn collection<R>(&self) -> Collection<R>
    where
        R: RestResource,
        R::Patch: Serialize + DeserializeOwned,
    {
        Collection {
            http: self.http.clone(),
            url: format!("{}/{}", self.base_url, R::PATH),
            _record: PhantomData,
        }
    }
}

/// One remote collection, e.g. `{base}/posts`.
#[derive(Debug)]
pub struct Collection<R> {
    http: Client,
    url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            url: self.url.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> PartialEq for Collection<R> {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl<R> Collection<R> {
    pub fn url(&self) -> &str {
        &self.url
    }

    fn item_url(&self, id: Id) -> String {
        format!("{}/{}", self.url, id)
    }
}

impl<R> ResourceClient<R> for Collection<R>
where
    R: RestResource,
    R::Patch: Serialize + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<R>, ClientError> {
        debug!(url = %self.url, "GET");
        let response = self.http.get(&self.url).send().await.map_err(request_error)?;
        let response = check_status(response)?;
        response.json::<Vec<R>>().await.map_err(request_error)
    }

    async fn create(&self, draft: &R::Draft) -> Result<R::Patch, ClientError> {
        debug!(url = %self.url, "POST");
        let body = R::Patch::from(draft.clone());
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;
        read_patch::<R>(check_status(response)?).await
    }

    async fn update(&self, id: Id, patch: &R::Patch) -> Result<R::Patch, ClientError> {
        let url = self.item_url(id);
        debug!(url = %url, "PUT");
        let response = self
            .http
            .put(&url)
            .json(patch)
            .send()
            .await
            .map_err(request_error)?;
        read_patch::<R>(check_status(response)?).await
    }

    async fn delete(&self, id: Id) -> Result<(), ClientError> {
        let url = self.item_url(id);
        debug!(url = %url, "DELETE");
        let response = self.http.delete(&url).send().await.map_err(request_error)?;
        check_status(response)?;
        Ok(())
    }
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(url = %response.url(), status = status.as_u16(), "service rejected request");
        Err(ClientError::Status {
            status: status.as_u16(),
        })
    }
}

/// Decode a create/update reply. An empty body or `null` is an empty patch, so
/// the caller falls back to what it sent.
async fn read_patch<R>(response: Response) -> Result<R::Patch, ClientError>
where
    R: RestResource,
    R::Patch: Serialize + DeserializeOwned,
{
    let bytes = response.bytes().await.map_err(request_error)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(R::Patch::default());
    }
    serde_json::from_slice::<Option<R::Patch>>(&bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

fn request_error(e: reqwest::Error) -> ClientError {
    if e.is_decode() {
        ClientError::Decode(e.to_string())
    } else if let Some(status) = e.status() {
        ClientError::Status {
            status: status.as_u16(),
        }
    } else {
        ClientError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_urls() {
        let client = RestClient::with_client(Client::new(), "http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.users().url(), "http://localhost:3000/users");
        assert_eq!(client.posts().item_url(7), "http://localhost:3000/posts/7");
    }

    #[test]
    fn test_default_config_points_at_jsonplaceholder() {
        let client = RestClient::new(&ApiConfig::default());
        assert_eq!(client.posts().url(), "https://jsonplaceholder.typicode.com/posts");
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_per_call() {
        let client = RestClient::with_client(Client::new(), "not a url");
        let err = client.users().list().await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
    }
}
