use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// In-panel location as supplied by the host.
///
/// `path` is the only field the panel interprets. Any other fields the host sends
/// along are kept in `extra` so the value can be passed back down unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Empty or bare-root path, i.e. the host opened the panel without a page.
    pub fn is_root(&self) -> bool {
        self.path.is_empty() || self.path == "/"
    }
}

/// Payload of the location-changed signal emitted by routed descendants.
///
/// `route` is optional on the wire: a detail without it is malformed and must be
/// ignored by the receiver instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationChangedDetail {
    #[serde(default)]
    pub route: Option<Route>,
}

impl LocationChangedDetail {
    pub fn new(route: Route) -> Self {
        Self { route: Some(route) }
    }

    /// Decode an untyped detail object. Returns `None` for anything that does not
    /// carry a route with a string `path`.
    pub fn from_value(value: Value) -> Option<Self> {
        let has_path = value
            .get("route")
            .and_then(|route| route.get("path"))
            .is_some_and(Value::is_string);
        if !has_path {
            return None;
        }
        serde_json::from_value::<Self>(value).ok()
    }
}

/// Options for the host navigation facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateOptions {
    #[serde(default)]
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self { replace: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_keeps_auxiliary_fields() {
        let route: Route =
            serde_json::from_value(json!({"prefix": "/knx", "path": "/info", "query": "a=1"}))
                .unwrap();
        assert_eq!(route.prefix, "/knx");
        assert_eq!(route.path, "/info");
        assert_eq!(route.extra.get("query"), Some(&json!("a=1")));

        let back = serde_json::to_value(&route).unwrap();
        assert_eq!(back["query"], json!("a=1"));
    }

    #[test]
    fn test_route_is_root() {
        assert!(Route::new("").is_root());
        assert!(Route::new("/").is_root());
        assert!(!Route::new("/knx/info").is_root());
    }

    #[test]
    fn test_location_detail_with_route() {
        let detail =
            LocationChangedDetail::from_value(json!({"route": {"path": "/knx/monitor"}})).unwrap();
        assert_eq!(detail.route.unwrap().path, "/knx/monitor");
    }

    #[test]
    fn test_location_detail_malformed() {
        assert!(LocationChangedDetail::from_value(json!({})).is_none());
        assert!(LocationChangedDetail::from_value(json!({"route": null})).is_none());
        assert!(LocationChangedDetail::from_value(json!({"route": 42})).is_none());
        assert!(LocationChangedDetail::from_value(json!("nope")).is_none());
        // a route without a path would navigate to ""
        assert!(LocationChangedDetail::from_value(json!({"route": {}})).is_none());
        assert!(LocationChangedDetail::from_value(json!({"route": {"prefix": "/knx"}})).is_none());
        assert!(LocationChangedDetail::from_value(json!({"route": {"path": null}})).is_none());
        assert!(LocationChangedDetail::from_value(json!({"route": {"path": 7}})).is_none());
    }
}
