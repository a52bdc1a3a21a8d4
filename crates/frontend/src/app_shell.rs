//! Root component of the KNX panel.
//!
//! `KnxFrontend` is the bootstrap gate: it renders nothing until the host session
//! and the panel configuration are both present, then runs the one-time bootstrap
//! sequence and shows the page frame (header, tabs, nested router).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::system::navigation::Route;
use contracts::system::session::HostSession;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::layout::global_context::PanelContext;
use crate::layout::header::Header;
use crate::layout::tabs::NavTabs;
use crate::layout::{DialogHost, DialogManager, Shell};
use crate::routes::KnxRouter;
use crate::shared::navigation::LocationChannel;
use crate::shared::settings::PanelSettings;
use crate::shared::state::lifecycle::{Lifecycle, PanelState, SideEffect};
use crate::shared::theme::{apply_session_theme, ElementThemeTarget};
use crate::system::config::api::load_config;

/// Key the panel listens under on the location channel.
const LOCATION_LISTENER: &str = "knx-frontend";

/// Lifecycle of the mount plus the phase the view renders from.
#[derive(Clone, Copy)]
struct Gate {
    lifecycle: StoredValue<Lifecycle>,
    phase: RwSignal<PanelState>,
}

impl Gate {
    fn new() -> Self {
        Self {
            lifecycle: StoredValue::new(Lifecycle::new().mounted()),
            phase: RwSignal::new(PanelState::AwaitingSession),
        }
    }

    /// Feed host presence into the lifecycle, run the resulting side effects, then
    /// publish the new phase. Tabs only appear once the phase flips, so normalization
    /// always precedes user interaction.
    fn step(&self, has_session: bool, has_config: bool, mut run: impl FnMut(SideEffect)) {
        let Some(transition) = self.lifecycle.try_update_value(|l| {
            let t = l.on_props_changed(has_session, has_config);
            *l = t.next;
            t
        }) else {
            return;
        };

        for effect in transition.effects {
            run(effect);
        }

        let state = transition.next.state();
        if self.phase.get_untracked() != state {
            log::debug!("panel state: {:?}", state);
            self.phase.set(state);
        }
    }

    fn unmount(&self) {
        self.lifecycle.try_update_value(|l| *l = l.unmounted());
    }
}

/// Everything a side effect needs; all parts are cheap handles.
#[derive(Clone)]
struct Effects {
    ctx: PanelContext,
    channel: LocationChannel,
    dialogs: DialogManager,
    lifecycle: StoredValue<Lifecycle>,
    mounted: Arc<AtomicBool>,
}

impl Effects {
    fn run(&self, effect: SideEffect) {
        log::debug!("side effect: {:?}", effect);
        match effect {
            SideEffect::FetchConfig => self.fetch_config(),
            SideEffect::RegisterLocationListener => {
                let ctx = self.ctx;
                self.channel
                    .listen(LOCATION_LISTENER, move |detail| ctx.handle_location_changed(detail));
            }
            SideEffect::InitDialogManager => {
                self.dialogs.register();
            }
            SideEffect::NormalizeRoute => {
                self.ctx.normalize_initial_route();
            }
            SideEffect::ApplyTheme => self.apply_theme(),
        }
    }

    fn fetch_config(&self) {
        let Some(session) = self.ctx.session.get_untracked() else {
            return;
        };
        let settings = self.ctx.settings.get_value();
        let this = self.clone();

        spawn_local(async move {
            let result = load_config(&settings, &session).await;

            if !this.mounted.load(Ordering::Relaxed) {
                log::debug!("config fetch finished after unmount, dropped");
                return;
            }

            match result {
                Ok(config) => {
                    this.lifecycle
                        .try_update_value(|l| *l = l.on_config_loaded());
                    let _ = this.ctx.config.try_set(Some(config));
                }
                Err(e) => {
                    // panel stays gated; a new mount fetches again
                    log::error!("{}", e);
                    this.lifecycle
                        .try_update_value(|l| *l = l.on_config_failed());
                }
            }
        });
    }

    fn apply_theme(&self) {
        let container = self
            .ctx
            .root
            .get_untracked()
            .and_then(|root| root.parent_element())
            .and_then(|parent| parent.dyn_into::<web_sys::HtmlElement>().ok());

        let Some(container) = container else {
            log::warn!("panel has no container element, theme not applied");
            return;
        };

        let target = ElementThemeTarget::new(container);
        self.ctx.session.with_untracked(|session| {
            if let Some(session) = session {
                apply_session_theme(&target, session);
            }
        });
    }
}

/// Root shell of the KNX panel.
#[component]
pub fn KnxFrontend(
    settings: PanelSettings,
    session: Signal<Option<HostSession>>,
    route: Signal<Route>,
    narrow: Signal<bool>,
    /// Channel routed descendants (and the host) report location changes on
    #[prop(optional)]
    channel: Option<LocationChannel>,
) -> impl IntoView {
    let ctx = PanelContext::new(settings, session, route.get_untracked(), narrow);
    let channel = channel.unwrap_or_default();
    let dialogs = DialogManager::new();

    provide_context(ctx);
    provide_context(channel.clone());
    provide_context(dialogs);

    let gate = Gate::new();
    let mounted = Arc::new(AtomicBool::new(true));

    let effects = Effects {
        ctx,
        channel: channel.clone(),
        dialogs,
        lifecycle: gate.lifecycle,
        mounted: mounted.clone(),
    };

    on_cleanup(move || {
        mounted.store(false, Ordering::Relaxed);
        channel.unlisten(LOCATION_LISTENER);
        gate.unmount();
        log::debug!("knx panel unmounted");
    });

    // Bootstrap gate: re-entered whenever session or config presence changes.
    Effect::new(move |_| {
        let has_session = ctx.has_session();
        let has_config = ctx.has_config();
        gate.step(has_session, has_config, |effect| effects.run(effect));
    });

    // Later route values from the host property.
    Effect::new(move |initialized: Option<()>| {
        let host_route = route.get();
        if initialized.is_some() {
            ctx.replace_from_host(host_route);
        }
    });

    let is_ready = move || gate.phase.get() == PanelState::Ready && ctx.has_session() && ctx.has_config();

    view! {
        <div class="knx-frontend" node_ref=ctx.root>
            <Show when=is_ready>
                <Shell
                    header=move || view! { <Header /> <NavTabs /> }.into_any()
                    content=move || {
                        view! {
                            <KnxRouter
                                route=Signal::derive(move || ctx.route())
                                session=ctx.session
                                config=Signal::from(ctx.config)
                                narrow=ctx.narrow
                            />
                        }
                            .into_any()
                    }
                />
                <DialogHost close_label=Signal::derive(move || ctx.localize("close")) />
            </Show>
        </div>
    }
}
