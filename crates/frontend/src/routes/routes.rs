use contracts::system::navigation::{LocationChangedDetail, Route};
use contracts::system::session::HostSession;
use leptos::prelude::*;

use crate::layout::global_context::use_panel;
use crate::shared::navigation::LocationChannel;
use crate::shared::settings::PanelSettings;
use crate::system::config::KnxConfig;
use crate::system::pages::info::InfoPage;
use crate::system::pages::monitor::GroupMonitorPage;

/// Pages the nested router can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelPage {
    Info,
    GroupMonitor,
    Unknown(String),
}

/// Map a route path onto a page.
pub fn resolve_page(settings: &PanelSettings, path: &str) -> PanelPage {
    match settings.page_of(path) {
        "info" => PanelPage::Info,
        "monitor" => PanelPage::GroupMonitor,
        other => PanelPage::Unknown(other.to_string()),
    }
}

/// Nested router: renders the page for `route`.
///
/// The router never changes the route itself. For an unknown page it asks the
/// owner of the route for the default landing page over the [`LocationChannel`].
#[component]
pub fn KnxRouter(
    route: Signal<Route>,
    session: Signal<Option<HostSession>>,
    config: Signal<Option<KnxConfig>>,
    narrow: Signal<bool>,
) -> impl IntoView {
    let ctx = use_panel();
    let channel = use_context::<LocationChannel>().expect("LocationChannel not provided in context");

    let page = Memo::new(move |_| {
        let path = route.with(|r| r.path.clone());
        ctx.settings.with_value(|s| resolve_page(s, &path))
    });

    Effect::new(move |_| {
        if let PanelPage::Unknown(name) = page.get() {
            let landing = ctx.settings.with_value(|s| s.default_landing_path());
            log::info!("unknown page '{}', requesting {}", name, landing);
            channel.emit(LocationChangedDetail::new(Route::new(landing)));
        }
    });

    view! {
        <div class="knx-router" class:narrow=move || narrow.get()>
            {move || match page.get() {
                PanelPage::Info => view! { <InfoPage session=session config=config /> }.into_any(),
                PanelPage::GroupMonitor => view! { <GroupMonitorPage config=config narrow=narrow /> }.into_any(),
                PanelPage::Unknown(_) => view! { <></> }.into_any(),
            }}
        </div>
    }
}
