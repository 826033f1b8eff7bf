use serde::{Deserialize, Serialize};

// Pet record returned by /api/pets
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Pet {
    pub id: u32,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub age: u32,
}

// Feeding log entry returned by /api/feeding
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecord {
    pub id: u32,
    pub pet_id: u32,
    pub time: &'static str,
    pub food: &'static str,
    pub amount: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct User {
    pub id: u32,
    pub username: &'static str,
    pub role: &'static str,
}

// Login body - missing fields or a non-JSON body end up as None
#[derive(Debug, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: User,
}

// Success envelope for list endpoints
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime: f64,
}
