use leptos::prelude::*;

use crate::content::{self, EntryKind, TimelineEntry};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 hero-gradient">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-primary mb-4">
                        "Experience & Education"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "My professional journey and educational background in software development"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-semibold text-primary mb-8 flex items-center">
                            <i class="icon-briefcase mr-3"></i>
                            "Work Experience"
                        </h3>
                        <Timeline entries=content::WORK_EXPERIENCE />
                    </div>

                    <div>
                        <h3 class="text-2xl font-semibold text-primary mb-8 flex items-center">
                            <i class="icon-graduation-cap mr-3"></i>
                            "Education"
                        </h3>
                        <Timeline entries=content::EDUCATION />
                    </div>
                </div>

                <Certifications />
            </div>
        </section>
    }
}

#[component]
fn Timeline(entries: &'static [TimelineEntry]) -> impl IntoView {
    let last = entries.len().saturating_sub(1);
    view! {
        <div class="space-y-0">
            {entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let is_last = i == last;
                    view! { <TimelineItem entry is_last /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TimelineItem(entry: &'static TimelineEntry, is_last: bool) -> impl IntoView {
    let marker_icon = match entry.kind {
        EntryKind::Work => "icon-briefcase",
        EntryKind::Education => "icon-graduation-cap",
    };

    view! {
        <div class="relative flex">
            {(!is_last)
                .then(|| {
                    view! { <div class="absolute left-8 top-16 w-0.5 h-full bg-border"></div> }
                })}

            <div class="relative z-10 flex items-center justify-center w-16 h-16 bg-primary rounded-full border-4 border-background shadow-lg">
                <i class=format!("{marker_icon} text-white")></i>
            </div>

            <div class="flex-1 ml-8 pb-12">
                <div class="bg-card border border-border rounded-lg p-6 shadow-lg hover:shadow-xl transition-shadow duration-300">
                    <div class="mb-4">
                        <h3 class="text-xl font-semibold text-foreground mb-1">{entry.title}</h3>
                        <div class="text-primary font-medium mb-2">{entry.organization}</div>
                        <div class="flex flex-wrap items-center gap-4 text-sm text-muted-foreground">
                            <div class="flex items-center gap-1">
                                <i class="icon-calendar"></i>
                                {entry.period}
                            </div>
                            <div class="flex items-center gap-1">
                                <i class="icon-map-pin"></i>
                                {entry.location}
                            </div>
                        </div>
                    </div>

                    <p class="text-muted-foreground mb-4 leading-relaxed">{entry.description}</p>

                    <div class="mb-4">
                        <h4 class="text-sm font-semibold text-foreground mb-2">"Key Achievements:"</h4>
                        <ul class="space-y-1">
                            {entry
                                .achievements
                                .iter()
                                .map(|achievement| {
                                    view! {
                                        <li class="text-sm text-muted-foreground flex items-start">
                                            <span class="text-primary mr-2">"•"</span>
                                            {*achievement}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="flex flex-wrap gap-2">
                        {entry
                            .technologies
                            .iter()
                            .map(|tech| view! { <span class="skill-tag text-xs">{*tech}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    view! {
        <div class="mt-16">
            <h3 class="text-2xl font-semibold text-primary mb-8 text-center">
                "Certifications & Awards"
            </h3>
            <div class="grid md:grid-cols-3 gap-6">
                {content::CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="bg-card border border-border rounded-lg p-6 text-center shadow-lg">
                                <div class="w-16 h-16 bg-primary/10 rounded-full flex items-center justify-center mx-auto mb-4">
                                    <span class="text-2xl">{cert.icon}</span>
                                </div>
                                <h4 class="font-semibold text-foreground mb-2">{cert.title}</h4>
                                <p class="text-sm text-muted-foreground">{cert.issuer}</p>
                                <p class="text-xs text-muted-foreground mt-1">{cert.year}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
