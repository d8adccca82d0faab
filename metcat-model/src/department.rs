use serde::{Deserialize, Serialize};

/// Curatorial department, used to scope advanced searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: u32,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    #[serde(default)]
    pub departments: Vec<Department>,
}
