//! YouGile API client
//!
//! Every listing goes through three stages: a raw fetch that returns the
//! response body, the shared response cache wrapped around that fetch, and a
//! parse step that turns the (possibly cached) body into domain records.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, instrument};
use workpulse_core::{credential_fingerprint, CacheKey, ProviderClient, ResponseCache};
use workpulse_domain::{EmployeeFilter, Paginated, RemoteEmployee, Result, Task, TaskFilter};

use super::types::{parse_employees, parse_tasks};
use crate::http::HttpClient;

/// Client bound to one YouGile API key
pub struct YouGileClient {
    http: HttpClient,
    cache: ResponseCache,
    base_url: String,
    token: String,
    fingerprint: String,
}

impl YouGileClient {
    pub fn new(
        http: HttpClient,
        cache: ResponseCache,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let token = token.into();
        let fingerprint = credential_fingerprint(&token);
        Self {
            http,
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            fingerprint,
        }
    }

    /// GET `{base_url}/{path}` and return the body of a 2xx response.
    async fn fetch_raw(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base_url, path);
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let request =
            self.http.request(Method::GET, &url).bearer_auth(&self.token).headers(headers).query(query);

        self.http.send_for_bytes(request).await
    }

    /// [`YouGileClient::fetch_raw`] behind the response cache.
    ///
    /// The key carries the credential fingerprint, so two accounts never
    /// share entries.
    async fn fetch_cached(&self, function: &str, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>> {
        let key = CacheKey::for_call(function, &[self.fingerprint.as_str()], query);
        self.cache.cached_default(&key, || self.fetch_raw(path, query)).await
    }
}

#[async_trait]
impl ProviderClient for YouGileClient {
    #[instrument(skip(self, filter), fields(limit = filter.limit, offset = filter.offset))]
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Paginated<Task>> {
        let query = task_query(filter);
        let body = self.fetch_cached("yougile_list_tasks", "tasks", &query).await?;
        let page = parse_tasks(&body)?;
        debug!(received = page.items.len(), has_next = page.has_next, "YouGile tasks page");
        Ok(page)
    }

    #[instrument(skip(self, filter), fields(limit = filter.limit, offset = filter.offset))]
    async fn list_employees(&self, filter: &EmployeeFilter) -> Result<Paginated<RemoteEmployee>> {
        let query = employee_query(filter);
        let body = self.fetch_cached("yougile_list_employees", "users", &query).await?;
        let page = parse_employees(&body)?;
        debug!(received = page.items.len(), has_next = page.has_next, "YouGile users page");
        Ok(page)
    }
}

/// Query for `GET /tasks`; unset criteria are omitted.
fn task_query(filter: &TaskFilter) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(5);
    if let Some(column_id) = &filter.column_id {
        query.push(("columnId", column_id.clone()));
    }
    if let Some(include_deleted) = filter.include_deleted {
        query.push(("includeDeleted", include_deleted.to_string()));
    }
    query.push(("limit", filter.limit.to_string()));
    query.push(("offset", filter.offset.to_string()));
    if let Some(title) = &filter.title {
        query.push(("title", title.clone()));
    }
    query
}

/// Query for `GET /users`; unset criteria are omitted.
fn employee_query(filter: &EmployeeFilter) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(4);
    if let Some(email) = &filter.email {
        query.push(("email", email.clone()));
    }
    query.push(("limit", filter.limit.to_string()));
    query.push(("offset", filter.offset.to_string()));
    if let Some(project_id) = &filter.project_id {
        query.push(("projectId", project_id.clone()));
    }
    query
}

impl std::fmt::Debug for YouGileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouGileClient")
            .field("base_url", &self.base_url)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}
