use serde::{Deserialize, Serialize};
use validator::Validate;

// Stored under the `bookmarks` key as a JSON array; field names match what
// the browser front end writes.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRef {
    #[validate(range(min = 1, message = "Employee id must be positive."))]
    pub id: u64,
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
}

