//! Header - fixed top bar of the panel.
//!
//! Contains:
//! - Menu button (narrow layouts only) asking the host to toggle its sidebar
//! - Panel title

use crate::layout::global_context::use_panel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

/// Event the host listens for to open/close its sidebar.
const TOGGLE_MENU_EVENT: &str = "hass-toggle-menu";

fn request_menu_toggle(from: &web_sys::Element) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&JsValue::NULL);
    match CustomEvent::new_with_event_init_dict(TOGGLE_MENU_EVENT, &init) {
        Ok(event) => {
            let _ = from.dispatch_event(&event);
        }
        Err(e) => log::warn!("failed to create {}: {:?}", TOGGLE_MENU_EVENT, e),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_panel();

    let toggle_menu = move |_| {
        if let Some(root) = ctx.root.get_untracked() {
            request_menu_toggle(&root);
        }
    };

    view! {
        <div class="knx-header__bar">
            <Show when=move || ctx.narrow.get()>
                <button
                    class="knx-header__icon-btn"
                    on:click=toggle_menu
                    title=move || ctx.localize("menu")
                >
                    {icon("menu")}
                </button>
            </Show>
            <div class="knx-header__title">{move || ctx.localize("title")}</div>
        </div>
    }
}
