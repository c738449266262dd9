use serde::Serialize;

// Canned figures behind the analytics page; only `bookmarks_saved` is live.
const DEPARTMENT_RATINGS: [(&str, f32); 7] = [
    ("Sales", 4.2),
    ("Marketing", 3.8),
    ("Engineering", 4.5),
    ("Human Resources", 4.0),
    ("Customer Service", 3.5),
    ("Finance", 4.1),
    ("Operations", 3.7),
];

const BOOKMARK_TRENDS: [(&str, u32); 7] = [
    ("Jan", 5),
    ("Feb", 8),
    ("Mar", 7),
    ("Apr", 10),
    ("May", 12),
    ("Jun", 9),
    ("Jul", 15),
];

const AGE_DISTRIBUTION: [(&str, u32); 5] = [
    ("18-25", 30),
    ("26-35", 65),
    ("36-45", 40),
    ("46-55", 20),
    ("56+", 10),
];

const GENDER_DISTRIBUTION: [(&str, u32); 3] = [("Male", 80), ("Female", 85), ("Other", 5)];

const AVERAGE_AGE: f32 = 35.2;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRating {
    pub department: String,
    pub avg_rating: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub count: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_employees: u32,
    pub total_bookmarks: u32,
    pub average_employee_age: f32,
    pub bookmarks_saved: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub kpis: Kpis,
    pub department_ratings: Vec<DepartmentRating>,
    pub bookmark_trends: Vec<Bucket>,
    pub age_distribution: Vec<Bucket>,
    pub gender_distribution: Vec<Bucket>,
}

fn buckets(rows: &[(&str, u32)]) -> Vec<Bucket> {
    rows.iter()
        .map(|(label, count)| Bucket { label: label.to_string(), count: *count })
        .collect()
}

impl AnalyticsReport {
    pub fn mock(bookmarks_saved: usize) -> Self {
        let age_distribution = buckets(&AGE_DISTRIBUTION);
        let bookmark_trends = buckets(&BOOKMARK_TRENDS);
        AnalyticsReport {
            kpis: Kpis {
                total_employees: age_distribution.iter().map(|b| b.count).sum(),
                total_bookmarks: bookmark_trends.iter().map(|b| b.count).sum(),
                average_employee_age: AVERAGE_AGE,
                bookmarks_saved,
            },
            department_ratings: DEPARTMENT_RATINGS
                .iter()
                .map(|(department, avg_rating)| DepartmentRating {
                    department: department.to_string(),
                    avg_rating: *avg_rating,
                })
                .collect(),
            bookmark_trends,
            age_distribution,
            gender_distribution: buckets(&GENDER_DISTRIBUTION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpis_are_sums_of_the_series() {
        let report = AnalyticsReport::mock(3);
        assert_eq!(report.kpis.total_employees, 165);
        assert_eq!(report.kpis.total_bookmarks, 66);
        assert_eq!(report.kpis.bookmarks_saved, 3);
        assert_eq!(report.department_ratings.len(), 7);
        assert_eq!(report.gender_distribution[1].label, "Female");
    }
}
