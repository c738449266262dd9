use actix_web::web;
use std::sync::Arc;

use staffboard_backend::directory::StaticDirectory;
use staffboard_backend::models::employee::{CompanyRef, EmployeeRecord};
use staffboard_backend::state::AppState;
use staffboard_backend::storage::{Credentials, KeyValueStore, MemoryStore};

pub const USERNAME: &str = "user@example.com";
pub const PASSWORD: &str = "password123";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub directory: Arc<StaticDirectory>,
    pub kv: Arc<MemoryStore>,
}

pub fn employee(id: u64, first: &str, department: &str) -> EmployeeRecord {
    EmployeeRecord {
        id,
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "+1 555 0100".to_string(),
        age: 34,
        company: CompanyRef { department: department.to_string() },
    }
}

pub fn roster(count: u64) -> Vec<EmployeeRecord> {
    let departments = ["Engineering", "Sales", "Marketing", "Finance"];
    (1..=count)
        .map(|id| employee(id, &format!("Person{}", id), departments[(id % 4) as usize]))
        .collect()
}

pub fn context(records: Vec<EmployeeRecord>, page_size: usize) -> TestContext {
    let kv = Arc::new(MemoryStore::new());
    context_with_store(records, page_size, kv)
}

pub fn context_with_store(records: Vec<EmployeeRecord>, page_size: usize, kv: Arc<MemoryStore>) -> TestContext {
    let directory = Arc::new(StaticDirectory::new(records));
    let shared: Arc<dyn KeyValueStore> = kv.clone();
    let state = AppState::from_parts(shared, directory.clone(), page_size, Credentials::default());
    TestContext {
        state: web::Data::new(state),
        directory,
        kv,
    }
}
