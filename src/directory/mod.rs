use futures_util::future::BoxFuture;

use crate::errors::AppError;
use crate::models::employee::{EmployeeDetail, EmployeeRecord};

pub mod fake;
pub mod http;

pub use fake::StaticDirectory;
pub use http::HttpDirectoryClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryPage {
    pub records: Vec<EmployeeRecord>,
    pub total: usize,
}

/// Source of employee pages and profiles.
///
/// `fetch_page` never fails: a transport error or a non-success status comes
/// back as an empty page with a total of 0, so callers cannot tell "no more
/// records" apart from an outage. Implementations log the underlying cause.
pub trait DirectorySource: Send + Sync {
    fn fetch_page(&self, limit: usize, offset: usize) -> BoxFuture<'_, DirectoryPage>;

    fn fetch_detail(&self, id: u64) -> BoxFuture<'_, Result<EmployeeDetail, AppError>>;
}
