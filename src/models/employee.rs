use serde::{Deserialize, Serialize};

// Mirrors one entry of the directory's `users` array. Anything the listing
// does not use is left out and ignored on decode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub company: CompanyRef,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CompanyRef {
    #[serde(default)]
    pub department: String,
}

impl EmployeeRecord {
    pub fn department(&self) -> &str {
        &self.company.department
    }

    pub fn rating(&self) -> u8 {
        derived_rating(self.id)
    }
}

/// Pseudo performance rating shown next to every employee, always in `1..=5`.
pub fn derived_rating(id: u64) -> u8 {
    (id % 5) as u8 + 1
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatedEmployee {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    pub rating: u8,
}

impl From<&EmployeeRecord> for RatedEmployee {
    fn from(record: &EmployeeRecord) -> Self {
        RatedEmployee {
            rating: record.rating(),
            record: record.clone(),
        }
    }
}

// Full profile served by `GET /users/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: CompanyDetail,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl From<&EmployeeRecord> for EmployeeDetail {
    // Locally created employees only know what the create form asked for.
    fn from(record: &EmployeeRecord) -> Self {
        EmployeeDetail {
            id: record.id,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            maiden_name: None,
            age: record.age,
            gender: None,
            email: record.email.clone(),
            phone: record.phone.clone(),
            birth_date: None,
            image: None,
            blood_group: None,
            address: None,
            company: CompanyDetail {
                department: record.company.department.clone(),
                ..CompanyDetail::default()
            },
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailResponse {
    #[serde(flatten)]
    pub detail: EmployeeDetail,
    pub rating: u8,
    pub bookmarked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_is_id_mod_five_plus_one() {
        assert_eq!(derived_rating(0), 1);
        assert_eq!(derived_rating(1), 2);
        assert_eq!(derived_rating(4), 5);
        assert_eq!(derived_rating(5), 1);
        for id in 0..200 {
            assert!((1..=5).contains(&derived_rating(id)));
        }
    }

    #[test]
    fn decodes_directory_user_and_ignores_extra_fields() {
        let raw = json!({
            "id": 7,
            "firstName": "Alexander",
            "lastName": "Jones",
            "maidenName": "",
            "age": 38,
            "email": "alexander.jones@x.dummyjson.com",
            "phone": "+61 260-824-4986",
            "bank": { "cardType": "Visa" },
            "company": { "department": "Engineering", "name": "Acme", "title": "Lead" }
        });
        let record: EmployeeRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.department(), "Engineering");
        assert_eq!(record.rating(), 3);
    }

    #[test]
    fn rated_employee_flattens_record() {
        let record = EmployeeRecord {
            id: 2,
            first_name: "Ana".into(),
            last_name: "Li".into(),
            email: "ana@example.com".into(),
            phone: String::new(),
            age: 30,
            company: CompanyRef { department: "Sales".into() },
        };
        let value = serde_json::to_value(RatedEmployee::from(&record)).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["company"]["department"], "Sales");
        assert_eq!(value["rating"], 3);
    }
}
