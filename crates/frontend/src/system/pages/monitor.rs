use leptos::prelude::*;

use crate::system::config::KnxConfig;

/// Group monitor page frame. Telegram streaming is provided by the host backend
/// and not wired into the panel shell.
#[component]
pub fn GroupMonitorPage(config: Signal<Option<KnxConfig>>, narrow: Signal<bool>) -> impl IntoView {
    let text = move |key: &'static str| {
        move || {
            config
                .with(|c| c.as_ref().map(|c| c.localize(key)))
                .unwrap_or_default()
        }
    };

    view! {
        <div class="page knx-monitor" class:page--narrow=move || narrow.get()>
            <div class="page__header">
                <h2>{text("group_monitor_title")}</h2>
            </div>
            <div class="page__content">
                <p class="knx-monitor__empty">{text("group_monitor_waiting")}</p>
            </div>
        </div>
    }
}
