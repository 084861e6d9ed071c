use leptos::prelude::*;

use crate::form::Notification;

/// How long a toast stays on screen before it dismisses itself.
const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ToastEntry {
    id: usize,
    notification: Notification,
}

/// The notification sink for the whole app. Provided once from `App` and
/// pulled out of context wherever something needs to raise a toast.
#[derive(Clone, Copy)]
pub struct Toaster {
    entries: RwSignal<Vec<ToastEntry>>,
    counter: StoredValue<usize>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            counter: StoredValue::new(0),
        }
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.counter.with_value(|c| *c);
        self.counter.set_value(id + 1);
        self.entries.update(|entries| {
            entries.push(ToastEntry { id, notification });
        });

        let entries = self.entries;
        leptos::task::spawn_local(async move {
            sleep_ms(TOAST_DURATION_MS).await;
            entries.update(|entries| entries.retain(|t| t.id != id));
        });
    }

    fn dismiss(&self, id: usize) {
        self.entries.update(|entries| entries.retain(|t| t.id != id));
    }
}

pub fn provide_toaster() {
    provide_context(Toaster::new());
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Awaitable delay that works on both sides of the hydrate/ssr split.
pub(super) async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(all(not(target_arch = "wasm32"), feature = "ssr"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
    #[cfg(all(not(target_arch = "wasm32"), not(feature = "ssr")))]
    let _ = ms;
}

#[component]
pub fn ToastTray() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                toaster
                    .entries
                    .get()
                    .into_iter()
                    .map(|entry| {
                        let accent = if entry.notification.kind.is_destructive() {
                            "border-destructive"
                        } else {
                            "border-primary"
                        };
                        view! {
                            <div class=format!(
                                "bg-card border {accent} border-l-4 rounded-lg shadow-lg p-4 flex items-start justify-between gap-3",
                            )>
                                <div>
                                    <p class="font-semibold text-foreground">
                                        {entry.notification.title}
                                    </p>
                                    <p class="text-sm text-muted-foreground">
                                        {entry.notification.body}
                                    </p>
                                </div>
                                <button
                                    class="text-muted-foreground hover:text-foreground"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| toaster.dismiss(entry.id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
