use leptos::prelude::*;

use super::scramble::ScrambleText;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="mb-16 space-y-4">
            <h1 class="text-4xl font-bold mb-4 animate-fade-in text-white">
                <span class="inline-block">
                    <ScrambleText text="Varun L".to_string() />
                </span>
            </h1>
            <div class="flex flex-col gap-2 text-gray-400">
                <div class="flex items-center gap-2">
                    <span aria-hidden="true">"⌖"</span>
                    "Mumbai/Bengaluru, india"
                </div>
                <div class="flex items-center gap-2">
                    <span aria-hidden="true">"⚒"</span>
                    "Senior Infrastructure and Protocol Engineer at "
                    <a
                        href="https://spicenet.io"
                        class="hover:text-accent transition-colors duration-200"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Spicenet"
                    </a>
                </div>
            </div>
            <p class="leading-relaxed animate-fade-in-up">
                "21 y/o cs undergrad. I love building random things that serve the most niche usecases and solving problems. I enjoy competitive coding, logic puzzles and cybersecurity. if i'm not coding, i'm probably working on building a NAS or a PC, watching movies or playing poker."
            </p>
        </header>
    }
}
