use std::sync::Arc;

use contracts::system::navigation::{LocationChangedDetail, Route};
use contracts::system::session::HostSession;
use leptos::html::Div;
use leptos::prelude::*;

use crate::shared::navigation::{BrowserNavigator, RouteSynchronizer, SharedNavigator};
use crate::shared::settings::PanelSettings;
use crate::system::config::KnxConfig;

/// Panel-wide state shared with every component below the shell.
///
/// `sync` is the only place the authoritative route lives; components read it
/// through [`PanelContext::route`] and change it through the methods here.
#[derive(Clone, Copy)]
pub struct PanelContext {
    pub settings: StoredValue<PanelSettings>,
    pub session: Signal<Option<HostSession>>,
    pub config: RwSignal<Option<KnxConfig>>,
    pub narrow: Signal<bool>,
    pub sync: RwSignal<RouteSynchronizer<SharedNavigator>>,
    /// Panel root; its parent element is the styling boundary.
    pub root: NodeRef<Div>,
}

impl PanelContext {
    /// Context navigating the browser's history.
    pub fn new(
        settings: PanelSettings,
        session: Signal<Option<HostSession>>,
        initial_route: Route,
        narrow: Signal<bool>,
    ) -> Self {
        Self::with_navigator(
            settings,
            session,
            initial_route,
            narrow,
            Arc::new(BrowserNavigator),
        )
    }

    pub fn with_navigator(
        settings: PanelSettings,
        session: Signal<Option<HostSession>>,
        initial_route: Route,
        narrow: Signal<bool>,
        navigator: SharedNavigator,
    ) -> Self {
        let sync = RouteSynchronizer::new(initial_route, settings.clone(), navigator);
        Self {
            settings: StoredValue::new(settings),
            session,
            config: RwSignal::new(None),
            narrow,
            sync: RwSignal::new(sync),
            root: NodeRef::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.sync.with(|s| s.route().clone())
    }

    pub fn selected_tab_path(&self) -> Option<String> {
        self.sync.with(|s| s.selected_tab_path())
    }

    pub fn select_tab(&self, page: &str) {
        self.sync.update(|s| s.select_tab(page));
    }

    /// Handler for the location channel. A detail without route leaves the
    /// signal untouched so nothing re-renders.
    pub fn handle_location_changed(&self, detail: LocationChangedDetail) {
        if detail.route.is_none() {
            log::warn!("location-changed signal without route ignored");
            return;
        }
        self.sync.update(|s| {
            s.apply_location_changed(detail);
        });
    }

    /// Route update pushed by the host property.
    pub fn replace_from_host(&self, route: Route) {
        let changed = self.sync.with_untracked(|s| s.route() != &route);
        if changed {
            self.sync.update(|s| {
                s.replace_from_host(route);
            });
        }
    }

    /// Normalize an empty/root initial path. Returns whether it navigated.
    pub fn normalize_initial_route(&self) -> bool {
        let is_root = self.sync.with_untracked(|s| s.route().is_root());
        if !is_root {
            return false;
        }
        let mut navigated = false;
        self.sync.update(|s| navigated = s.normalize_initial());
        navigated
    }

    pub fn has_session(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn has_config(&self) -> bool {
        self.config.with(Option::is_some)
    }

    pub fn localize(&self, key: &str) -> String {
        self.config.with(|c| match c {
            Some(config) => config.localize(key),
            None => crate::shared::localize::localize("en", key),
        })
    }
}

/// Hook to access the panel context
pub fn use_panel() -> PanelContext {
    use_context::<PanelContext>().expect("PanelContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigation::route_sync::testing::RecordingNavigator;

    fn context(path: &str) -> (PanelContext, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let ctx = PanelContext::with_navigator(
            PanelSettings::default(),
            Signal::stored(None),
            Route::new(path),
            Signal::stored(false),
            navigator.clone(),
        );
        (ctx, navigator)
    }

    fn revision(ctx: &PanelContext) -> u64 {
        ctx.sync.with_untracked(|s| s.revision())
    }

    #[test]
    fn test_normalize_root_route() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, navigator) = context("/");
            assert!(ctx.normalize_initial_route());
            assert_eq!(ctx.route().path, "/knx/info");
            assert_eq!(ctx.selected_tab_path().as_deref(), Some("/knx/info"));

            let calls = navigator.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].0, "/knx/info");
            assert!(calls[0].1.replace);

            // already on a page
            assert!(!ctx.normalize_initial_route());
            assert_eq!(navigator.calls().len(), 1);
        });
    }

    #[test]
    fn test_location_changed_without_route_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, navigator) = context("/knx/monitor");
            ctx.handle_location_changed(LocationChangedDetail::default());
            assert_eq!(revision(&ctx), 0);
            assert_eq!(ctx.route().path, "/knx/monitor");
            assert!(navigator.calls().is_empty());
        });
    }

    #[test]
    fn test_location_changed_moves_route_and_tab() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, navigator) = context("/knx/info");
            ctx.handle_location_changed(LocationChangedDetail::new(Route::new("/knx/monitor")));
            assert_eq!(ctx.route().path, "/knx/monitor");
            assert_eq!(ctx.selected_tab_path().as_deref(), Some("/knx/monitor"));
            assert_eq!(revision(&ctx), 1);
            assert_eq!(navigator.calls().len(), 1);
        });
    }

    #[test]
    fn test_tab_selection_and_host_route() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, navigator) = context("/knx/info");
            ctx.select_tab("monitor");
            assert_eq!(ctx.selected_tab_path().as_deref(), Some("/knx/monitor"));
            assert_eq!(navigator.calls().len(), 1);

            // the host already shows its own route
            ctx.replace_from_host(Route::new("/knx/info"));
            assert_eq!(ctx.selected_tab_path().as_deref(), Some("/knx/info"));
            assert_eq!(navigator.calls().len(), 1);

            let before = revision(&ctx);
            ctx.replace_from_host(Route::new("/knx/info"));
            assert_eq!(revision(&ctx), before);
        });
    }
}
