use futures_util::future::{self, BoxFuture, FutureExt};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::directory::{DirectoryPage, DirectorySource};
use crate::errors::AppError;
use crate::models::employee::{EmployeeDetail, EmployeeRecord};

/// In-memory directory that pages like the remote one. Can be switched into
/// an outage mode to exercise the soft-failure path.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    records: Vec<EmployeeRecord>,
    offline: AtomicBool,
    page_requests: AtomicUsize,
}

impl StaticDirectory {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        StaticDirectory {
            records,
            ..Self::default()
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    fn page(&self, limit: usize, offset: usize) -> DirectoryPage {
        self.page_requests.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return DirectoryPage::default();
        }
        DirectoryPage {
            records: self.records.iter().skip(offset).take(limit).cloned().collect(),
            total: self.records.len(),
        }
    }

    fn detail(&self, id: u64) -> Result<EmployeeDetail, AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Upstream("directory offline".to_string()));
        }
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(EmployeeDetail::from)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }
}

impl DirectorySource for StaticDirectory {
    fn fetch_page(&self, limit: usize, offset: usize) -> BoxFuture<'_, DirectoryPage> {
        future::ready(self.page(limit, offset)).boxed()
    }

    fn fetch_detail(&self, id: u64) -> BoxFuture<'_, Result<EmployeeDetail, AppError>> {
        future::ready(self.detail(id)).boxed()
    }
}
