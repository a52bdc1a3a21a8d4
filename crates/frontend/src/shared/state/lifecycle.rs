//! Bootstrap gate of the panel as an explicit state machine.
//!
//! The view layer reports what the host has provided (`on_props_changed`) and gets
//! back the next lifecycle value plus the side effects it must run. Nothing here
//! touches the DOM, so the gate is testable on its own.

/// Observable phase of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Unmounted,
    AwaitingSession,
    AwaitingConfig,
    Ready,
}

/// Progress of the single configuration fetch of a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    InFlight,
    Failed,
    Done,
}

/// Work the view layer performs on behalf of a transition, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    FetchConfig,
    RegisterLocationListener,
    InitDialogManager,
    NormalizeRoute,
    ApplyTheme,
}

/// Sequence run exactly once when session and configuration are first both present.
pub const BOOTSTRAP_SEQUENCE: [SideEffect; 4] = [
    SideEffect::RegisterLocationListener,
    SideEffect::InitDialogManager,
    SideEffect::NormalizeRoute,
    SideEffect::ApplyTheme,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Lifecycle,
    pub effects: Vec<SideEffect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    state: PanelState,
    fetch: FetchStatus,
    bootstrapped: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub const fn new() -> Self {
        Self {
            state: PanelState::Unmounted,
            fetch: FetchStatus::Idle,
            bootstrapped: false,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Start of a mount: fresh fetch budget, bootstrap not yet run.
    pub fn mounted(self) -> Self {
        Self {
            state: PanelState::AwaitingSession,
            fetch: FetchStatus::Idle,
            bootstrapped: false,
        }
    }

    pub fn unmounted(self) -> Self {
        Self {
            state: PanelState::Unmounted,
            ..self
        }
    }

    /// Host properties changed; decide the next phase and its side effects.
    pub fn on_props_changed(self, has_session: bool, has_config: bool) -> Transition {
        if self.state == PanelState::Unmounted {
            return Transition {
                next: self,
                effects: Vec::new(),
            };
        }

        let mut next = self;
        let mut effects = Vec::new();

        if !has_session {
            next.state = PanelState::AwaitingSession;
        } else if !has_config {
            next.state = PanelState::AwaitingConfig;
            if next.fetch == FetchStatus::Idle {
                next.fetch = FetchStatus::InFlight;
                effects.push(SideEffect::FetchConfig);
            }
        } else {
            next.state = PanelState::Ready;
            if next.fetch == FetchStatus::InFlight {
                next.fetch = FetchStatus::Done;
            }
            if !next.bootstrapped {
                next.bootstrapped = true;
                effects.extend(BOOTSTRAP_SEQUENCE);
            }
        }

        Transition { next, effects }
    }

    pub fn on_config_loaded(self) -> Self {
        Self {
            fetch: FetchStatus::Done,
            ..self
        }
    }

    /// The fetch failed. The panel stays gated and no retry is issued until the
    /// next mount.
    pub fn on_config_failed(self) -> Self {
        Self {
            fetch: FetchStatus::Failed,
            ..self
        }
    }

    pub fn should_render(&self) -> bool {
        self.state == PanelState::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> Lifecycle {
        Lifecycle::new().mounted()
    }

    #[test]
    fn test_unmounted_ignores_props() {
        let t = Lifecycle::new().on_props_changed(true, true);
        assert_eq!(t.next.state(), PanelState::Unmounted);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_missing_session_does_nothing() {
        for has_config in [false, true] {
            let t = mounted().on_props_changed(false, has_config);
            assert_eq!(t.next.state(), PanelState::AwaitingSession);
            assert!(t.effects.is_empty());
            assert!(!t.next.should_render());
        }
    }

    #[test]
    fn test_session_without_config_fetches_once() {
        let t = mounted().on_props_changed(true, false);
        assert_eq!(t.next.state(), PanelState::AwaitingConfig);
        assert_eq!(t.effects, vec![SideEffect::FetchConfig]);
        assert_eq!(t.next.fetch_status(), FetchStatus::InFlight);

        // spurious re-render while the fetch is pending
        let again = t.next.on_props_changed(true, false);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn test_failed_fetch_is_not_retried() {
        let t = mounted().on_props_changed(true, false);
        let failed = t.next.on_config_failed();
        let t = failed.on_props_changed(true, false);
        assert!(t.effects.is_empty());
        assert_eq!(t.next.state(), PanelState::AwaitingConfig);
        assert!(!t.next.should_render());

        // a fresh mount gets a new fetch
        let t = t.next.unmounted().mounted().on_props_changed(true, false);
        assert_eq!(t.effects, vec![SideEffect::FetchConfig]);
    }

    #[test]
    fn test_ready_runs_bootstrap_sequence_in_order() {
        let t = mounted().on_props_changed(true, false);
        let loaded = t.next.on_config_loaded();
        let t = loaded.on_props_changed(true, true);
        assert_eq!(t.next.state(), PanelState::Ready);
        assert!(t.next.should_render());
        assert_eq!(
            t.effects,
            vec![
                SideEffect::RegisterLocationListener,
                SideEffect::InitDialogManager,
                SideEffect::NormalizeRoute,
                SideEffect::ApplyTheme,
            ]
        );
    }

    #[test]
    fn test_bootstrap_runs_once_per_mount() {
        let first = mounted().on_props_changed(true, true);
        let second = first.next.on_props_changed(true, true);
        assert!(second.effects.is_empty());

        let listeners = [first.effects, second.effects]
            .concat()
            .into_iter()
            .filter(|e| *e == SideEffect::RegisterLocationListener)
            .count();
        assert_eq!(listeners, 1);
    }

    #[test]
    fn test_session_lost_after_ready_hides_without_rebootstrap() {
        let ready = mounted().on_props_changed(true, true).next;
        let lost = ready.on_props_changed(false, true);
        assert!(!lost.next.should_render());
        assert!(lost.next.is_bootstrapped());

        let back = lost.next.on_props_changed(true, true);
        assert!(back.next.should_render());
        assert!(back.effects.is_empty());
    }

    #[test]
    fn test_config_supplied_directly_skips_fetch() {
        let t = mounted().on_props_changed(true, true);
        assert!(!t.effects.contains(&SideEffect::FetchConfig));
        assert_eq!(t.next.fetch_status(), FetchStatus::Idle);
    }
}
