use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::employee::EmployeeRecord;

/// Search box plus the department and rating checkboxes of the listing.
///
/// Each part is ignored while empty; otherwise a record has to satisfy all
/// three.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub departments: BTreeSet<String>,
    pub ratings: BTreeSet<u8>,
}

impl FilterState {
    pub fn new<D, R>(search: impl Into<String>, departments: D, ratings: R) -> Self
    where
        D: IntoIterator<Item = String>,
        R: IntoIterator<Item = u8>,
    {
        FilterState {
            search: search.into(),
            departments: departments.into_iter().collect(),
            ratings: ratings.into_iter().collect(),
        }
    }

    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.matches_search(record) && self.matches_department(record) && self.matches_rating(record)
    }

    fn matches_search(&self, record: &EmployeeRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.email.as_str(),
            record.department(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_department(&self, record: &EmployeeRecord) -> bool {
        self.departments.is_empty() || self.departments.contains(record.department())
    }

    fn matches_rating(&self, record: &EmployeeRecord) -> bool {
        self.ratings.is_empty() || self.ratings.contains(&record.rating())
    }
}
