//! JS-facing handle the host application uses to mount and drive the panel.
//!
//! ```js
//! const panel = KnxPanel.mount(container, { url_prefix: "/knx" });
//! panel.set_session(hass);
//! panel.set_route({ prefix: "/knx", path: "" });
//! panel.set_narrow(false);
//! ```

use std::any::Any;

use contracts::system::navigation::{LocationChangedDetail, Route};
use contracts::system::session::HostSession;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::app::{App, HostProps};
use crate::shared::error::PanelError;
use crate::shared::navigation::LocationChannel;
use crate::shared::settings::PanelSettings;

fn decode<T: DeserializeOwned>(what: &str, value: JsValue) -> Result<T, PanelError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| PanelError::HostProperty(format!("{}: {}", what, e)))
}

fn decode_optional<T: DeserializeOwned>(what: &str, value: JsValue) -> Result<Option<T>, PanelError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    decode(what, value).map(Some)
}

/// Store a decoded host property. A value that failed to decode is logged and
/// the previous one stays in place.
fn store_or_keep<T>(target: RwSignal<T>, decoded: Result<T, PanelError>) -> bool
where
    T: Send + Sync + 'static,
{
    match decoded {
        Ok(value) => target.try_set(value).is_none(),
        Err(e) => {
            log::warn!("{}, previous value kept", e);
            false
        }
    }
}

/// Validate an untyped location-changed detail.
pub fn parse_location_detail(value: serde_json::Value) -> Result<LocationChangedDetail, PanelError> {
    let shown = value.to_string();
    LocationChangedDetail::from_value(value).ok_or(PanelError::MalformedLocationSignal(shown))
}

#[wasm_bindgen]
pub struct KnxPanel {
    props: HostProps,
    channel: LocationChannel,
    owner: Owner,
    mount: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl KnxPanel {
    /// Mount the panel into `parent`. `settings` may be `undefined`; settings that
    /// do not decode fall back to the defaults.
    pub fn mount(parent: HtmlElement, settings: JsValue) -> KnxPanel {
        let settings: PanelSettings = decode_optional("settings", settings)
            .unwrap_or_else(|e| {
                log::warn!("{}, default settings used", e);
                None
            })
            .unwrap_or_default();
        log::info!("mounting knx panel under {}", settings.url_prefix);

        let owner = Owner::new();
        let props = owner.with(HostProps::new);
        let channel = LocationChannel::new();

        let app_channel = channel.clone();
        let handle = owner.with(|| {
            leptos::mount::mount_to(parent, move || {
                view! { <App settings=settings props=props channel=app_channel /> }
            })
        });

        KnxPanel {
            props,
            channel,
            owner,
            mount: Some(Box::new(handle)),
        }
    }

    /// Host session object; `null`/`undefined` means not available yet.
    /// Returns whether the value was taken over.
    pub fn set_session(&self, session: JsValue) -> bool {
        store_or_keep(
            self.props.session,
            decode_optional::<HostSession>("session", session),
        )
    }

    pub fn set_route(&self, route: JsValue) -> bool {
        store_or_keep(
            self.props.route,
            decode_optional::<Route>("route", route).map(Option::unwrap_or_default),
        )
    }

    pub fn set_narrow(&self, narrow: bool) {
        let _ = self.props.narrow.try_set(narrow);
    }

    /// Forward a location-changed detail (`{ route: { path } }`) to the panel.
    /// Malformed details are ignored; returns whether the signal was consumed.
    pub fn dispatch_location_changed(&self, detail: JsValue) -> bool {
        let value: serde_json::Value =
            serde_wasm_bindgen::from_value(detail).unwrap_or(serde_json::Value::Null);
        match parse_location_detail(value) {
            Ok(detail) => self.channel.emit(detail),
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    pub fn unmount(&mut self) {
        if let Some(handle) = self.mount.take() {
            drop(handle);
            self.owner.cleanup();
            log::info!("knx panel detached");
        }
    }
}
