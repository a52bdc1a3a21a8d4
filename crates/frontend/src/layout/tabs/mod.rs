//! Navigation bar of the panel.
//!
//! The selected tab is derived from the authoritative route on every render, so
//! the indicator cannot disagree with the active page.

use crate::layout::global_context::use_panel;
use crate::shared::icons::icon;
use crate::shared::settings::TAB_PAGES;
use leptos::prelude::*;

/// Localization key of a tab's label.
pub fn tab_label_key(page: &str) -> &'static str {
    match page {
        "monitor" => "group_monitor_title",
        _ => "info_title",
    }
}

#[component]
fn NavTab(page: &'static str) -> impl IntoView {
    let ctx = use_panel();
    let tab_path = ctx.settings.with_value(|s| s.tab_path(page));

    let is_active = Memo::new(move |_| ctx.selected_tab_path().as_deref() == Some(tab_path.as_str()));

    let on_click = move |_| ctx.select_tab(page);

    view! {
        <div
            class="knx-tab"
            class:active=is_active
            role="tab"
            aria-selected=move || is_active.get().to_string()
            on:click=on_click
        >
            {icon(page)}
            <span>{move || ctx.localize(tab_label_key(page))}</span>
        </div>
    }
}

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <div class="knx-tabs" role="tablist">
            {TAB_PAGES.into_iter().map(|page| view! { <NavTab page=page /> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label_key("info"), "info_title");
        assert_eq!(tab_label_key("monitor"), "group_monitor_title");
    }
}
