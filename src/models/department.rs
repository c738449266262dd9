use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub name: String,
    pub employees: usize,
}
