use contracts::system::navigation::NavigateOptions;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

use super::route_sync::Navigator;

/// Event the host router listens for after the History API changed the location.
const LOCATION_CHANGED_EVENT: &str = "location-changed";

/// Navigates the host page through `history.replaceState` / `pushState`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let history = match window.history() {
            Ok(h) => h,
            Err(e) => {
                log::warn!("history unavailable: {:?}", e);
                return;
            }
        };

        let current = window.location().pathname().unwrap_or_default();
        if current == path && options.replace {
            return;
        }

        let result = if options.replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(path))
        };
        if let Err(e) = result {
            log::warn!("navigation to {} failed: {:?}", path, e);
            return;
        }

        let detail = serde_wasm_bindgen::to_value(&options).unwrap_or(JsValue::NULL);
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        if let Ok(event) = CustomEvent::new_with_event_init_dict(LOCATION_CHANGED_EVENT, &init) {
            let _ = window.dispatch_event(&event);
        }
    }
}
