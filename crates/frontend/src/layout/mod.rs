pub mod global_context;
pub mod header;
pub mod modal_service;
pub mod tabs;

pub use modal_service::{DialogHost, DialogManager};

use leptos::prelude::*;

/// Styles of the page frame. Colours come from the theme variables the panel
/// applies to its container.
pub const PANEL_CSS: &str = include_str!("panel.css");

/// Page frame of the panel.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  Header (menu button, title)             |
/// |  Tabs (info | monitor)                   |
/// +------------------------------------------+
/// |  Content (nested router)                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<H, C>(header: H, content: C) -> impl IntoView
where
    H: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <style>{PANEL_CSS}</style>
        <div class="knx-layout">
            <header class="knx-header" data-zone="header">
                {header()}
            </header>
            <div class="knx-main">
                {content()}
            </div>
        </div>
    }
}
