/*
 * Responsibility
 * - Response DTO for GET /users/{user_name}
 * - Field names mirror the hub's user model on the wire
 * - Fields are declared in alphabetical order so objects serialize with sorted keys
 */
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub admin: bool,
    pub auth_state: Option<Value>,
    pub created: &'static str,
    pub groups: Vec<String>,
    pub kind: &'static str,
    pub last_activity: &'static str,
    pub name: String,
    pub pending: Option<String>,
    pub server: String,
    // keyed by server instance name; "" is the default server
    pub servers: BTreeMap<String, ServerRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerRecord {
    pub last_activity: &'static str,
    pub name: String,
    pub pending: Option<String>,
    pub progress_url: String,
    pub ready: bool,
    pub started: &'static str,
    pub state: ServerState,
    pub url: String,
    pub user_options: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerState {
    pub pod_name: String,
}
