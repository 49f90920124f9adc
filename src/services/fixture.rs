/*
 * Responsibility
 * - Catalogue of simulated hub users and routes
 * - Builds response DTOs from static literals on every call (no shared mutable state)
 */
use std::collections::BTreeMap;

use crate::api::hub::dto::{
    proxy::{ProxyData, ProxyEntry, ProxyTable},
    users::{ServerRecord, ServerState, UserRecord},
};

const USER_CREATED: &str = "2022-01-13T12:46:10.251047Z";
const USER_LAST_ACTIVITY: &str = "2022-07-01T09:13:42.130971Z";
const SERVER_LAST_ACTIVITY: &str = "2022-07-01T09:13:05.146000Z";
const SERVER_STARTED: &str = "2022-06-26T13:20:45.104152Z";
const SERVER_PROFILE: &str = "ml-env";

const HUB_TARGET: &str = "http://hub:8081";
const HUB_LAST_ACTIVITY: &str = "2022-07-03T09:50:24.613Z";
const ROUTED_USER: &str = "test";
const ROUTED_USER_TARGET: &str = "http://10.0.12.30:8888";
const ROUTED_USER_LAST_ACTIVITY: &str = "2022-07-03T09:53:55.092Z";

/// Users the fixture knows about. Anything else is reported as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureUser {
    /// Has a ready default server.
    Test,
    /// Exists but has no server running.
    Test1,
}

impl FixtureUser {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "test" => Some(Self::Test),
            "test1" => Some(Self::Test1),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Test1 => "test1",
        }
    }

    pub fn has_running_server(self) -> bool {
        matches!(self, Self::Test)
    }
}

fn user_prefix(name: &str) -> String {
    format!("/user/{name}/")
}

fn default_server(name: &str) -> ServerRecord {
    ServerRecord {
        name: String::new(),
        last_activity: SERVER_LAST_ACTIVITY,
        started: SERVER_STARTED,
        pending: None,
        ready: true,
        state: ServerState {
            pod_name: format!("jupyter-{name}"),
        },
        url: user_prefix(name),
        user_options: BTreeMap::from([("profile".to_string(), SERVER_PROFILE.to_string())]),
        progress_url: format!("/hub/api/users/{name}/server/progress"),
    }
}

pub fn user_record(user: FixtureUser) -> UserRecord {
    let name = user.name();

    let mut servers = BTreeMap::new();
    if user.has_running_server() {
        servers.insert(String::new(), default_server(name));
    }

    UserRecord {
        kind: "user",
        name: name.to_string(),
        admin: true,
        groups: Vec::new(),
        server: user_prefix(name),
        pending: None,
        created: USER_CREATED,
        last_activity: USER_LAST_ACTIVITY,
        servers,
        auth_state: None,
    }
}

pub fn proxy_table() -> ProxyTable {
    let hub = ProxyEntry {
        routespec: "/".to_string(),
        target: HUB_TARGET.to_string(),
        data: ProxyData::Hub {
            hub: true,
            last_activity: HUB_LAST_ACTIVITY,
        },
    };

    let user = ProxyEntry {
        routespec: user_prefix(ROUTED_USER),
        target: ROUTED_USER_TARGET.to_string(),
        data: ProxyData::User {
            user: ROUTED_USER.to_string(),
            server_name: String::new(),
            last_activity: ROUTED_USER_LAST_ACTIVITY,
        },
    };

    [hub, user]
        .into_iter()
        .map(|entry| (entry.routespec.clone(), entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn recognizes_only_fixture_names() {
        assert_eq!(FixtureUser::from_name("test"), Some(FixtureUser::Test));
        assert_eq!(FixtureUser::from_name("test1"), Some(FixtureUser::Test1));
        assert_eq!(FixtureUser::from_name("Test"), None);
        assert_eq!(FixtureUser::from_name("test2"), None);
        assert_eq!(FixtureUser::from_name(""), None);
    }

    #[test]
    fn running_user_has_default_server() {
        let record = serde_json::to_value(user_record(FixtureUser::Test)).unwrap();

        assert_eq!(
            record["servers"],
            json!({
                "": {
                    "name": "",
                    "last_activity": "2022-07-01T09:13:05.146000Z",
                    "started": "2022-06-26T13:20:45.104152Z",
                    "pending": null,
                    "ready": true,
                    "state": {"pod_name": "jupyter-test"},
                    "url": "/user/test/",
                    "user_options": {"profile": "ml-env"},
                    "progress_url": "/hub/api/users/test/server/progress"
                }
            })
        );
        assert_eq!(record["server"], "/user/test/");
        assert_eq!(record["auth_state"], Value::Null);
        assert_eq!(record["pending"], Value::Null);
    }

    #[test]
    fn idle_user_differs_only_by_name_and_servers() {
        let mut test = serde_json::to_value(user_record(FixtureUser::Test)).unwrap();
        let mut test1 = serde_json::to_value(user_record(FixtureUser::Test1)).unwrap();

        assert_eq!(test1["servers"], json!({}));
        assert_eq!(test1["name"], "test1");
        assert_eq!(test1["server"], "/user/test1/");

        for field in ["name", "server", "servers"] {
            test.as_object_mut().unwrap().remove(field);
            test1.as_object_mut().unwrap().remove(field);
        }
        assert_eq!(test, test1);
    }

    #[test]
    fn proxy_table_has_hub_and_user_routes() {
        let table = proxy_table();

        assert_eq!(
            table.keys().map(String::as_str).collect::<Vec<_>>(),
            ["/", "/user/test/"]
        );
        for (key, entry) in &table {
            assert_eq!(key, &entry.routespec);
        }
    }
}
