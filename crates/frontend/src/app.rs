use contracts::system::navigation::Route;
use contracts::system::session::HostSession;
use leptos::prelude::*;

use crate::app_shell::KnxFrontend;
use crate::shared::navigation::LocationChannel;
use crate::shared::settings::PanelSettings;

/// Properties the host sets on the panel.
///
/// The host writes through these signals, the panel only reads them.
#[derive(Clone, Copy)]
pub struct HostProps {
    pub session: RwSignal<Option<HostSession>>,
    pub route: RwSignal<Route>,
    pub narrow: RwSignal<bool>,
}

impl HostProps {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            route: RwSignal::new(Route::default()),
            narrow: RwSignal::new(false),
        }
    }
}

impl Default for HostProps {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App(settings: PanelSettings, props: HostProps, channel: LocationChannel) -> impl IntoView {
    view! {
        <KnxFrontend
            settings=settings
            session=props.session.into()
            route=props.route.into()
            narrow=props.narrow.into()
            channel=channel
        />
    }
}
