use std::sync::Arc;

use contracts::system::navigation::{LocationChangedDetail, NavigateOptions, Route};

use crate::shared::settings::PanelSettings;

/// Host navigation facility.
pub trait Navigator {
    fn navigate(&self, path: &str, options: NavigateOptions);
}

/// Navigator as stored in reactive state.
pub type SharedNavigator = Arc<dyn Navigator + Send + Sync>;

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        (**self).navigate(path, options)
    }
}

/// Owner of the authoritative route.
///
/// Every change goes through [`RouteSynchronizer::set_route`], which updates the
/// path, replaces the visible location and bumps `revision`. The revision is what
/// the view layer treats as "re-render requested"; when the synchronizer lives in a
/// signal, the signal update does the same job.
#[derive(Debug, Clone)]
pub struct RouteSynchronizer<N> {
    route: Route,
    settings: PanelSettings,
    navigator: N,
    revision: u64,
}

impl<N: Navigator> RouteSynchronizer<N> {
    pub fn new(route: Route, settings: PanelSettings, navigator: N) -> Self {
        Self {
            route,
            settings,
            navigator,
            revision: 0,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The only mutation entry point: path, replace navigation, re-render.
    pub fn set_route(&mut self, new_path: impl Into<String>) {
        let new_path = new_path.into();
        log::debug!("route: {} -> {}", self.route.path, new_path);
        self.route.path = new_path;
        self.navigator
            .navigate(&self.route.path, NavigateOptions::replace());
        self.revision += 1;
    }

    /// Replace an empty or root initial path with the default landing page.
    /// Returns whether a navigation happened.
    pub fn normalize_initial(&mut self) -> bool {
        if !self.route.is_root() {
            return false;
        }
        let landing = self.settings.default_landing_path();
        log::info!("initial route '{}' normalized to {}", self.route.path, landing);
        self.set_route(landing);
        true
    }

    /// Tab click: same-level navigation to `prefix/page`.
    pub fn select_tab(&mut self, page: &str) {
        let path = self.settings.tab_path(page);
        self.set_route(path);
    }

    /// Route requested by a routed descendant. The path is taken verbatim.
    /// A detail without a route is ignored; returns whether it was consumed.
    pub fn apply_location_changed(&mut self, detail: LocationChangedDetail) -> bool {
        match detail.route {
            Some(route) => {
                self.set_route(route.path);
                true
            }
            None => {
                log::warn!("location-changed signal without route ignored");
                false
            }
        }
    }

    /// New route value pushed by the host.
    ///
    /// The host already shows this location, so nothing is navigated. Auxiliary
    /// fields are taken over; the revision only moves when something changed.
    pub fn replace_from_host(&mut self, route: Route) -> bool {
        if route == self.route {
            return false;
        }
        self.route = route;
        self.revision += 1;
        true
    }

    /// Page identifier of the current route below the panel prefix.
    pub fn current_page(&self) -> &str {
        self.settings.page_of(&self.route.path)
    }

    /// Full path of the navigation-bar tab matching the current route, if any.
    pub fn selected_tab_path(&self) -> Option<String> {
        let page = self.current_page();
        crate::shared::settings::TAB_PAGES
            .iter()
            .find(|tab| **tab == page)
            .map(|tab| self.settings.tab_path(tab))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::synchronizer;
    use super::*;

    #[test]
    fn test_root_paths_normalize_with_replace() {
        for initial in ["", "/"] {
            let mut sync = synchronizer(initial);
            assert!(sync.normalize_initial());
            assert_eq!(sync.route().path, "/knx/info");

            let calls = sync.navigator().calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].0, "/knx/info");
            assert!(calls[0].1.replace);
        }
    }

    #[test]
    fn test_non_root_paths_untouched() {
        for initial in ["/knx/monitor", "/knx/info", "/monitor", "/knx/unknown"] {
            let mut sync = synchronizer(initial);
            assert!(!sync.normalize_initial());
            assert_eq!(sync.route().path, initial);
            assert_eq!(sync.revision(), 0);
            assert!(sync.navigator().calls().is_empty());
        }
    }

    #[test]
    fn test_tab_clicks_keep_selection_in_step() {
        let mut sync = synchronizer("/knx/info");
        for (i, tab) in ["info", "monitor", "info", "monitor", "monitor"].iter().enumerate() {
            sync.select_tab(tab);
            let expected = format!("/knx/{}", tab);
            assert_eq!(sync.route().path, expected);
            assert_eq!(sync.selected_tab_path(), Some(expected.clone()));
            assert_eq!(sync.revision(), i as u64 + 1);

            let calls = sync.navigator().calls();
            let last = calls.last().unwrap();
            assert_eq!(last.0, expected);
            assert!(last.1.replace);
        }
    }

    #[test]
    fn test_location_signal_is_verbatim() {
        let mut sync = synchronizer("/knx/info");
        let consumed = sync.apply_location_changed(LocationChangedDetail::new(Route::new(
            "/knx/monitor",
        )));
        assert!(consumed);
        assert_eq!(sync.route().path, "/knx/monitor");
        assert_eq!(sync.selected_tab_path().as_deref(), Some("/knx/monitor"));

        // no prefixing of foreign paths either
        sync.apply_location_changed(LocationChangedDetail::new(Route::new("/config/entries")));
        assert_eq!(sync.route().path, "/config/entries");
        assert_eq!(sync.selected_tab_path(), None);
    }

    #[test]
    fn test_malformed_location_signal_is_noop() {
        let mut sync = synchronizer("/knx/monitor");
        assert!(!sync.apply_location_changed(LocationChangedDetail::default()));
        assert_eq!(sync.route().path, "/knx/monitor");
        assert_eq!(sync.revision(), 0);
        assert!(sync.navigator().calls().is_empty());
    }

    #[test]
    fn test_host_route_does_not_navigate() {
        let mut sync = synchronizer("/knx/info");
        assert!(sync.replace_from_host(Route::new("/knx/monitor")));
        assert!(!sync.replace_from_host(Route::new("/knx/monitor")));
        assert_eq!(sync.revision(), 1);
        assert!(sync.navigator().calls().is_empty());
    }

    #[test]
    fn test_relative_host_path_selects_tab() {
        let sync = synchronizer("/monitor");
        assert_eq!(sync.current_page(), "monitor");
        assert_eq!(sync.selected_tab_path().as_deref(), Some("/knx/monitor"));
    }
}
