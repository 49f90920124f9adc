/*
 * Responsibility
 * - Response DTO for GET /proxy
 * - The table is a JSON object keyed by routespec
 * - Fields are declared in alphabetical order so objects serialize with sorted keys
 */
use std::collections::BTreeMap;

use serde::Serialize;

pub type ProxyTable = BTreeMap<String, ProxyEntry>;

#[derive(Debug, Clone, Serialize)]
pub struct ProxyEntry {
    pub data: ProxyData,
    pub routespec: String,
    pub target: String,
}

/// Free-form route data; the shape depends on what the route points at.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProxyData {
    Hub {
        hub: bool,
        last_activity: &'static str,
    },
    User {
        last_activity: &'static str,
        server_name: String,
        user: String,
    },
}
