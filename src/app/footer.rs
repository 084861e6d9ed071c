use chrono::Datelike;
use leptos::prelude::*;

use super::scroll::{scroll_to_section, scroll_to_top};
use crate::content;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    let build_date = BUILD_TIME.split('T').next().unwrap_or(BUILD_TIME);

    view! {
        <footer class="bg-card text-foreground py-12 relative">
            <button
                class="absolute -top-6 left-1/2 transform -translate-x-1/2 btn-coral rounded-full w-12 h-12 p-0 shadow-lg"
                aria-label="Scroll to top"
                on:click=move |_| scroll_to_top()
            >
                "↑"
            </button>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div class="space-y-4">
                        <h3 class="text-xl font-bold">"</Developer>"</h3>
                        <p class="text-muted-foreground">
                            "Passionate full-stack developer creating innovative solutions that bridge the gap between design and functionality."
                        </p>
                    </div>

                    <div class="space-y-4">
                        <h4 class="font-semibold">"Quick Links"</h4>
                        <div class="space-y-2">
                            {["About", "Projects", "Experience", "Contact"]
                                .into_iter()
                                .map(|link| {
                                    let id = link.to_lowercase();
                                    view! {
                                        <button
                                            class="block text-muted-foreground hover:text-primary transition-colors"
                                            on:click=move |_| scroll_to_section(&id)
                                        >
                                            {link}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h4 class="font-semibold">"Let's Connect"</h4>
                        <div class="space-y-2">
                            <a
                                href=format!("mailto:{}", content::EMAIL)
                                class="flex items-center space-x-2 text-muted-foreground hover:text-primary transition-colors"
                            >
                                <i class="icon-mail"></i>
                                <span>{content::EMAIL}</span>
                            </a>
                        </div>
                        <div class="flex space-x-4 pt-2">
                            {content::SOCIAL_LINKS
                                .iter()
                                .take(2)
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.name
                                            class="text-muted-foreground hover:text-primary transition-colors transform hover:scale-110"
                                        >
                                            <i class=social.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-border pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                        <p class="text-sm text-muted-foreground">
                            {format!("© {year} {}. All rights reserved.", content::FULL_NAME)}
                        </p>
                        <p class="text-sm text-muted-foreground">
                            "Made with ♥ using Rust & Leptos · build " {build_date}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
