use leptos::prelude::*;
use thaw::*;

/// Dialog shown through the panel's dialog manager.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRequest {
    pub title: String,
    pub body: String,
}

/// Dialog service of the panel.
///
/// Pages ask for dialogs with `show`; nothing is displayed until the bootstrap
/// sequence has registered the manager for the panel's render root.
#[derive(Clone, Copy)]
pub struct DialogManager {
    registered: RwSignal<bool>,
    stack: RwSignal<Vec<DialogRequest>>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self {
            registered: RwSignal::new(false),
            stack: RwSignal::new(Vec::new()),
        }
    }

    /// Register for dialog display. Returns `false` if already registered.
    pub fn register(&self) -> bool {
        if self.registered.get_untracked() {
            log::debug!("dialog manager already registered");
            return false;
        }
        self.registered.set(true);
        true
    }

    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }

    pub fn show(&self, request: DialogRequest) {
        if !self.registered.get_untracked() {
            log::warn!("dialog '{}' requested before registration", request.title);
            return;
        }
        self.stack.update(|s| s.push(request));
    }

    /// Close the topmost dialog.
    pub fn close(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn top(&self) -> Option<DialogRequest> {
        self.stack.with(|s| s.last().cloned())
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the topmost dialog of the [`DialogManager`] in context.
#[component]
pub fn DialogHost(
    /// Label of the close button
    close_label: Signal<String>,
) -> impl IntoView {
    let dialogs = use_context::<DialogManager>().expect("DialogManager not provided in context");
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        open.set(dialogs.is_open());
    });

    // dismissed from the surface (overlay click, escape)
    Effect::new(move |_| {
        if !open.get() && dialogs.stack.with_untracked(|s| !s.is_empty()) {
            dialogs.close();
        }
    });

    view! {
        <Show when=move || dialogs.is_registered()>
            <Dialog open=open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || dialogs.top().map(|d| d.title).unwrap_or_default()}
                        </DialogTitle>
                        <DialogContent>
                            <pre class="knx-dialog__body">
                                {move || dialogs.top().map(|d| d.body).unwrap_or_default()}
                            </pre>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| dialogs.close()
                            >
                                {move || close_label.get()}
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </Show>
    }
}
