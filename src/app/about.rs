use leptos::prelude::*;

use crate::content;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 hero-gradient">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-primary mb-4">"About Me"</h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Passionate developer with 5+ years of experience building scalable web applications"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <div class="relative">
                            <img
                                src="/profile.png"
                                alt=format!("About {}", content::FULL_NAME)
                                class="w-full max-w-md mx-auto rounded-2xl shadow-xl object-cover"
                            />
                        </div>
                    </div>

                    <div class="space-y-8">
                        <div class="space-y-4">
                            <h3 class="text-2xl font-semibold text-primary">
                                {format!("Hello! I'm {}", content::FULL_NAME)}
                            </h3>
                            <div class="space-y-4 text-muted-foreground leading-relaxed">
                                <p>
                                    "I'm a passionate full-stack developer and aspiring cybersecurity analyst, eager to build secure and user-focused digital experiences. My journey began with a degree in computer science, where I developed a strong foundation in software development and a growing interest in cybersecurity."
                                </p>
                                <p>
                                    "I enjoy working with technologies like React, TypeScript, and Node.js to create clean, scalable web applications — while always keeping performance and security in mind. I'm especially motivated by projects that solve real-world problems and make technology more accessible and reliable."
                                </p>
                                <p>
                                    "Outside of coding, I love exploring new tools, contributing to open-source, and sharing what I learn through writing and mentoring whenever I can. I'm always looking for opportunities to grow, collaborate, and make an impact."
                                </p>
                            </div>
                        </div>

                        <div class="grid grid-cols-2 gap-6">
                            <div class="text-center p-4 bg-card rounded-lg border border-border">
                                <div class="text-2xl font-bold text-primary">"5+"</div>
                                <div class="text-sm text-muted-foreground">"Projects Completed"</div>
                            </div>
                            <div class="text-center p-4 bg-card rounded-lg border border-border">
                                <div class="text-2xl font-bold text-primary">"6 months"</div>
                                <div class="text-sm text-muted-foreground">"Years Experience"</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="mt-20">
                    <h3 class="text-2xl font-semibold text-center text-primary mb-12">
                        "Skills & Technologies"
                    </h3>

                    <div class="grid md:grid-cols-3 gap-8">
                        {content::SKILL_CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <div class="space-y-4 animate-fade-in-up">
                                        <div class="flex items-center space-x-3 mb-4">
                                            <div class=format!(
                                                "p-2 rounded-lg bg-gradient-to-r {} text-white",
                                                category.color,
                                            )>
                                                <i class=category.icon></i>
                                            </div>
                                            <h4 class="text-lg font-semibold text-foreground">
                                                {category.title}
                                            </h4>
                                        </div>

                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="px-3 py-1 bg-muted text-muted-foreground rounded-full text-sm">
                                                            {*skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
