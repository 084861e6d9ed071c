use leptos::prelude::*;

use super::scroll::{scroll_to_section, scroll_to_top};

/// Label and target section id for each nav entry.
static NAV_LINKS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Experience", "experience"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 bg-background/90 backdrop-blur shadow-lg">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex flex-wrap items-center justify-between">
                    <button
                        class="text-xl font-bold text-primary"
                        on:click=move |_| scroll_to_top()
                    >
                        "</Developer>"
                    </button>
                    <nav class="flex items-center gap-4 sm:gap-6">
                        {NAV_LINKS
                            .iter()
                            .copied()
                            .map(|(label, id)| {
                                view! {
                                    <button
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                        on:click=move |_| scroll_to_section(id)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
