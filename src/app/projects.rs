use leptos::prelude::*;

use crate::content::{self, Project};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 hero-gradient">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-primary mb-4">
                        "Featured Projects"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "A showcase of my recent work, featuring full-stack applications and innovative solutions"
                    </p>
                </div>

                <div class="mb-16">
                    <h3 class="text-2xl font-semibold text-primary mb-8">"Featured Work"</h3>
                    <div class="grid lg:grid-cols-2 gap-8">
                        {content::PROJECTS
                            .iter()
                            .filter(|p| p.featured)
                            .map(|project| view! { <FeaturedCard project /> })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h3 class="text-2xl font-semibold text-primary mb-8">"Other Projects"</h3>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {content::PROJECTS
                            .iter()
                            .filter(|p| !p.featured)
                            .map(|project| view! { <CompactCard project /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="text-center mt-12">
                    <a
                        href="https://github.com"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-outline-coral inline-flex items-center group"
                    >
                        "View All Projects on GitHub"
                        <span class="ml-2 inline-block group-hover:translate-x-1 transition-transform">
                            "→"
                        </span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card group">
            <div class="relative overflow-hidden">
                <img
                    src=project.image_url
                    alt=project.title
                    class="w-full h-64 object-cover transition-transform duration-300 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="absolute bottom-4 left-4 right-4 flex gap-2">
                        <a
                            href=project.code_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-outline-coral text-sm"
                        >
                            "Code"
                        </a>
                        <a
                            href=project.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-coral text-sm"
                        >
                            "Live Demo"
                        </a>
                    </div>
                </div>
            </div>

            <div class="p-6">
                <h4 class="text-xl font-semibold text-foreground mb-2">{project.title}</h4>
                <p class="text-muted-foreground mb-4 leading-relaxed">{project.description}</p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="skill-tag text-xs">{*tech}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn CompactCard(project: &'static Project) -> impl IntoView {
    let overflow = project.technologies.len().saturating_sub(3);

    view! {
        <div class="project-card group">
            <div class="p-5">
                <h4 class="text-lg font-semibold text-foreground mb-2">{project.title}</h4>
                <p class="text-sm text-muted-foreground mb-4 leading-relaxed">
                    {project.description}
                </p>

                <div class="flex flex-wrap gap-1 mb-4">
                    {project
                        .technologies
                        .iter()
                        .take(3)
                        .map(|tech| view! { <span class="skill-tag text-xs">{*tech}</span> })
                        .collect_view()}
                    {(overflow > 0)
                        .then(|| {
                            view! { <span class="skill-tag text-xs">{format!("+{overflow}")}</span> }
                        })}
                </div>

                <div class="flex gap-2">
                    <a
                        href=project.code_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-outline-coral flex-1 text-center text-sm"
                    >
                        "Code"
                    </a>
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-coral flex-1 text-center text-sm"
                    >
                        "Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}
