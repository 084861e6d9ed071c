use leptos::prelude::*;

use super::scroll::scroll_to_section;
use crate::content;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative min-h-screen flex items-center hero-gradient overflow-hidden">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 animate-fade-in-up">
                        <div class="space-y-4">
                            <span class="text-primary font-medium text-lg">"Hello, I'm"</span>
                            <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-hero-text leading-tight">
                                {content::FULL_NAME}
                            </h1>
                            <div class="space-y-2">
                                <h2 class="text-xl sm:text-2xl lg:text-3xl font-semibold text-hero-text">
                                    {content::ROLE}
                                </h2>
                                <p class="text-lg text-muted-foreground max-w-xl">{content::TAGLINE}</p>
                            </div>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                class="btn-coral group"
                                on:click=move |_| scroll_to_section("projects")
                            >
                                "View Projects"
                                <span class="ml-2 inline-block group-hover:translate-y-1 transition-transform">
                                    "↓"
                                </span>
                            </button>
                            <button
                                class="btn-outline-coral"
                                on:click=move |_| scroll_to_section("contact")
                            >
                                "Get In Touch"
                            </button>
                        </div>

                        <div class="flex space-x-6 pt-4">
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
                                            <i class=format!("{} text-2xl", social.icon)></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=format!("mailto:{}", content::EMAIL)
                                aria-label="Email"
                                class="text-muted-foreground hover:text-primary transition-colors transform hover:scale-110"
                            >
                                <i class="icon-mail text-2xl"></i>
                            </a>
                        </div>
                    </div>

                    <div class="relative lg:flex justify-center animate-fade-in">
                        <div class="relative w-80 h-80 mx-auto">
                            <div class="absolute inset-0 bg-gradient-to-br from-primary to-primary/70 rounded-full p-1">
                                <div class="w-full h-full bg-background rounded-full overflow-hidden">
                                    <img
                                        src="/profile.png"
                                        alt=content::FULL_NAME
                                        class="w-full h-full object-cover scale-110"
                                    />
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <div class="flex flex-col items-center space-y-2">
                        <span class="text-sm text-muted-foreground">"Scroll down"</span>
                        <span class="text-muted-foreground">"↓"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
