use futures_util::future::{BoxFuture, FutureExt};
use log::{debug, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::directory::{DirectoryPage, DirectorySource};
use crate::errors::AppError;
use crate::models::employee::{EmployeeDetail, EmployeeRecord};

#[derive(Deserialize)]
struct UsersEnvelope {
    #[serde(default)]
    users: Vec<EmployeeRecord>,
    #[serde(default)]
    total: usize,
}

#[derive(Clone)]
pub struct HttpDirectoryClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpDirectoryClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, AppError> {
        if base.cannot_be_a_base() {
            return Err(AppError::BadRequest(format!("directory url {} cannot be a base", base)));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Upstream(format!("http client: {}", err)))?;
        Ok(HttpDirectoryClient { http, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn page_url(&self, limit: usize, offset: usize) -> Url {
        let mut url = self.endpoint(&["users"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &offset.to_string());
        url
    }

    /// Strict variant of `fetch_page` that reports why a page could not be
    /// read.
    pub async fn try_fetch_page(&self, limit: usize, offset: usize) -> Result<DirectoryPage, AppError> {
        let url = self.page_url(limit, offset);
        debug!("GET {}", url);
        let envelope = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| AppError::Upstream(err.to_string()))?
            .json::<UsersEnvelope>()
            .await
            .map_err(|err| AppError::Upstream(format!("invalid listing body: {}", err)))?;
        Ok(DirectoryPage { records: envelope.users, total: envelope.total })
    }

    pub async fn try_fetch_detail(&self, id: u64) -> Result<EmployeeDetail, AppError> {
        let url = self.endpoint(&["users", &id.to_string()]);
        debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| AppError::Upstream(err.to_string()))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }
        resp.error_for_status()
            .map_err(|err| AppError::Upstream(err.to_string()))?
            .json::<EmployeeDetail>()
            .await
            .map_err(|err| AppError::Upstream(format!("invalid detail body: {}", err)))
    }
}

impl DirectorySource for HttpDirectoryClient {
    fn fetch_page(&self, limit: usize, offset: usize) -> BoxFuture<'_, DirectoryPage> {
        async move {
            match self.try_fetch_page(limit, offset).await {
                Ok(page) => page,
                Err(err) => {
                    warn!("Error fetching users (limit={}, skip={}): {}", limit, offset, err);
                    DirectoryPage::default()
                }
            }
        }
        .boxed()
    }

    fn fetch_detail(&self, id: u64) -> BoxFuture<'_, Result<EmployeeDetail, AppError>> {
        self.try_fetch_detail(id).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpDirectoryClient {
        HttpDirectoryClient::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn page_url_carries_limit_and_skip() {
        let url = client("https://dummyjson.com").page_url(12, 24);
        assert_eq!(url.as_str(), "https://dummyjson.com/users?limit=12&skip=24");
    }

    #[test]
    fn base_path_is_preserved() {
        let url = client("http://localhost:9000/api/").page_url(5, 0);
        assert_eq!(url.as_str(), "http://localhost:9000/api/users?limit=5&skip=0");
        let detail = client("http://localhost:9000/api").endpoint(&["users", "7"]);
        assert_eq!(detail.as_str(), "http://localhost:9000/api/users/7");
    }

    #[test]
    fn rejects_non_base_urls() {
        let url = Url::parse("mailto:hr@example.com").unwrap();
        assert!(HttpDirectoryClient::new(url, Duration::from_secs(1)).is_err());
    }
}
