pub mod analytics;
pub mod department;
pub mod draft;
pub mod employee;
pub mod favorite;
pub mod filter;
