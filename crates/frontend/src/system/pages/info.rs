use contracts::system::session::HostSession;
use leptos::prelude::*;
use thaw::*;

use crate::layout::modal_service::{DialogManager, DialogRequest};
use crate::system::config::KnxConfig;

/// Info page: the integration's config entry.
#[component]
pub fn InfoPage(
    session: Signal<Option<HostSession>>,
    config: Signal<Option<KnxConfig>>,
) -> impl IntoView {
    let dialogs = use_context::<DialogManager>().expect("DialogManager not provided in context");

    let label = move |key: &'static str| {
        move || {
            config
                .with(|c| c.as_ref().map(|c| c.localize(key)))
                .unwrap_or_default()
        }
    };

    let show_details = move |_| {
        let Some(config) = config.get_untracked() else {
            return;
        };
        let body = serde_json::to_string_pretty(&config.config_entry)
            .unwrap_or_else(|e| format!("{}", e));
        dialogs.show(DialogRequest {
            title: config.config_entry.title.clone(),
            body,
        });
    };

    let entry_field = move |f: fn(&KnxConfig) -> String| {
        move || config.with(|c| c.as_ref().map(f)).unwrap_or_default()
    };

    view! {
        <div class="page knx-info">
            <div class="page__content">
                <dl class="knx-info__list">
                    <dt>{label("info_integration")}</dt>
                    <dd>{entry_field(|c| c.config_entry.title.clone())}</dd>
                    <dt>{label("info_entry_id")}</dt>
                    <dd>{entry_field(|c| c.config_entry.entry_id.clone())}</dd>
                    <dt>{label("info_state")}</dt>
                    <dd>{entry_field(|c| c.config_entry.state.as_str().to_string())}</dd>
                    <dt>{label("info_language")}</dt>
                    <dd>
                        {move || session
                            .with(|s| s.as_ref().and_then(|s| s.language.clone()))
                            .unwrap_or_else(|| "en".to_string())}
                    </dd>
                </dl>
                <Button appearance=ButtonAppearance::Secondary on_click=show_details>
                    {label("info_details")}
                </Button>
            </div>
        </div>
    }
}
