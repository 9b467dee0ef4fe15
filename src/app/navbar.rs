use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="flex items-center justify-between mb-12 animate-fade-in">
            <A href="/" attr:class="font-bold text-white hover:text-accent transition-colors duration-200">
                "varun.fun"
            </A>
            <div class="flex gap-4 text-sm text-gray-400">
                <A href="/" attr:class="hover:text-accent transition-colors duration-200">
                    "home"
                </A>
                <A href="/projects" attr:class="hover:text-accent transition-colors duration-200">
                    "projects"
                </A>
                <A href="/blog" attr:class="hover:text-accent transition-colors duration-200">
                    "blog"
                </A>
            </div>
        </nav>
    }
}
