use log::{debug, info};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Mutex as AsyncMutex;

use crate::directory::DirectorySource;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::draft::EmployeeDraft;
use crate::models::employee::{EmployeeRecord, RatedEmployee};
use crate::models::filter::FilterState;
use crate::utils::validation::validate_payload;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    InitialLoading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Merged { fetched: usize, inserted: usize },
    /// The listing was reset while the page was in flight; nothing merged.
    Stale,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub phase: Phase,
    pub has_more: bool,
    pub offset: usize,
    pub total: usize,
    pub loaded: usize,
    pub departments: Vec<String>,
    pub filter: FilterState,
    pub employees: Vec<RatedEmployee>,
}

struct ListingState {
    records: Vec<EmployeeRecord>,
    ids: HashSet<u64>,
    // Created through the dialog rather than fetched.
    local_ids: HashSet<u64>,
    departments: Vec<String>,
    offset: usize,
    total: usize,
    has_more: bool,
    filter: FilterState,
    epoch: u64,
}

impl ListingState {
    fn fresh(epoch: u64, filter: FilterState) -> Self {
        ListingState {
            records: Vec::new(),
            ids: HashSet::new(),
            local_ids: HashSet::new(),
            departments: Vec::new(),
            offset: 0,
            total: 0,
            has_more: true,
            filter,
            epoch,
        }
    }

    fn phase(&self) -> Phase {
        if self.records.is_empty() {
            Phase::InitialLoading
        } else {
            Phase::Ready
        }
    }

    // First seen wins; departments keep first-appearance order.
    fn insert(&mut self, record: EmployeeRecord) -> bool {
        if !self.ids.insert(record.id) {
            return false;
        }
        let department = record.department();
        if !department.is_empty() && !self.departments.iter().any(|d| d == department) {
            self.departments.push(department.to_string());
        }
        self.records.push(record);
        true
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
    }

    fn filtered(&self) -> Vec<RatedEmployee> {
        self.records
            .iter()
            .filter(|r| self.filter.matches(r))
            .map(RatedEmployee::from)
            .collect()
    }
}

/// Accumulates directory pages into one growing, filterable collection.
///
/// Page loads are admitted one at a time. Each load remembers the epoch it
/// started in, and `reset` bumps the epoch so that a page arriving for a
/// discarded listing is dropped instead of merged.
pub struct ListingViewModel {
    source: Arc<dyn DirectorySource>,
    page_size: usize,
    state: Mutex<ListingState>,
    load_gate: AsyncMutex<()>,
}

impl ListingViewModel {
    pub fn new(source: Arc<dyn DirectorySource>, page_size: usize) -> Self {
        ListingViewModel {
            source,
            page_size,
            state: Mutex::new(ListingState::fresh(0, FilterState::default())),
            load_gate: AsyncMutex::new(()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn source(&self) -> &Arc<dyn DirectorySource> {
        &self.source
    }

    /// Fetches the page at the current offset and merges it.
    ///
    /// The offset advances by the number of records the page carried, even
    /// when some of them were already present. A failed fetch arrives as an
    /// empty page with total 0: records and offset stay put and `has_more`
    /// drops to false.
    pub async fn load_next_page(&self) -> LoadOutcome {
        let _gate = self.load_gate.lock().await;
        self.merge_next_page().await
    }

    /// Loads the first page unless the collection already has records.
    /// Emptiness is checked once the gate is held, so reads racing to
    /// populate an empty listing fetch a single page between them.
    pub async fn load_initial_page(&self) -> Option<LoadOutcome> {
        let _gate = self.load_gate.lock().await;
        if !self.state().records.is_empty() {
            return None;
        }
        Some(self.merge_next_page().await)
    }

    // Callers hold `load_gate`.
    async fn merge_next_page(&self) -> LoadOutcome {
        let (epoch, offset) = {
            let state = self.state();
            (state.epoch, state.offset)
        };

        let page = self.source.fetch_page(self.page_size, offset).await;

        let mut state = self.state();
        if state.epoch != epoch {
            debug!("Dropping page at offset {} from stale epoch {}", offset, epoch);
            return LoadOutcome::Stale;
        }
        let fetched = page.records.len();
        let mut inserted = 0;
        for record in page.records {
            if state.insert(record) {
                inserted += 1;
            }
        }
        state.offset += fetched;
        state.total = page.total;
        state.has_more = state.offset < page.total;
        info!(
            "Loaded page at offset {}: fetched={}, inserted={}, total={}, has_more={}",
            offset, fetched, inserted, page.total, state.has_more
        );
        LoadOutcome::Merged { fetched, inserted }
    }

    /// Adds a locally drafted employee under the next free id. The directory
    /// is not contacted.
    pub fn create_record(&self, draft: EmployeeDraft) -> Result<EmployeeRecord, AppError> {
        validate_payload(&draft)?;
        let mut state = self.state();
        let record = draft.into_record(state.next_id());
        state.local_ids.insert(record.id);
        state.insert(record.clone());
        info!("Created employee {} in {}", record.id, record.department());
        Ok(record)
    }

    pub fn apply_filter<D, R>(&self, search: &str, departments: D, ratings: R) -> Vec<RatedEmployee>
    where
        D: IntoIterator<Item = String>,
        R: IntoIterator<Item = u8>,
    {
        self.set_filter(FilterState::new(search, departments, ratings));
        self.filtered()
    }

    pub fn set_filter(&self, filter: FilterState) {
        self.state().filter = filter;
    }

    pub fn clear_filter(&self) {
        self.set_filter(FilterState::default());
    }

    pub fn filtered(&self) -> Vec<RatedEmployee> {
        self.state().filtered()
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        let state = self.state();
        ListingSnapshot {
            phase: state.phase(),
            has_more: state.has_more,
            offset: state.offset,
            total: state.total,
            loaded: state.records.len(),
            departments: state.departments.clone(),
            filter: state.filter.clone(),
            employees: state.filtered(),
        }
    }

    /// Starts over from offset 0. Pages already in flight are discarded when
    /// they land; the filter is kept.
    pub fn reset(&self) {
        let mut state = self.state();
        let epoch = state.epoch + 1;
        let filter = std::mem::take(&mut state.filter);
        *state = ListingState::fresh(epoch, filter);
        info!("Listing reset, epoch {}", epoch);
    }

    pub fn departments(&self) -> Vec<Department> {
        let state = self.state();
        state
            .departments
            .iter()
            .map(|name| Department {
                name: name.clone(),
                employees: state.records.iter().filter(|r| r.department() == name).count(),
            })
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<EmployeeRecord> {
        self.state().records.iter().find(|r| r.id == id).cloned()
    }

    pub fn is_local(&self, id: u64) -> bool {
        self.state().local_ids.contains(&id)
    }

    pub fn phase(&self) -> Phase {
        self.state().phase()
    }

    pub fn has_more(&self) -> bool {
        self.state().has_more
    }

    pub fn offset(&self) -> usize {
        self.state().offset
    }

    pub fn len(&self) -> usize {
        self.state().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().records.is_empty()
    }
}
