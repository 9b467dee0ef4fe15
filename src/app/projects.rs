use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::scramble::ScrambleText;

struct Project {
    title: &'static str,
    description: &'static str,
    role: &'static str,
    technologies: &'static [&'static str],
    href: &'static str,
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Solana Indexer",
            description: "A highly efficient and scalable self-hostable and programmable indexer for Solana, Powered by Superteam",
            role: "creator and maintainer",
            technologies: &["typescript", "rust", "solana", "mongoDB", "graphql"],
            href: "https://github.com/Envy-Life/Solana-Indexer",
        },
        Project {
            title: "Scalping Bot",
            description: "A scalping bot for hyperliquid built using indicators from ta-lib",
            role: "creator",
            technologies: &["python", "hyperliquid", "ta-lib", "pandas"],
            href: "https://github.com/Envy-Life",
        },
        Project {
            title: "IOS wallet connect",
            description: "Built a flutter package to support and simplify deeplinks for solana mobile wallets",
            role: "creator and maintainer",
            technologies: &["flutter", "rust", "deeplinks", "solana"],
            href: "https://github.com/Envy-Life/IOS_Wallet_Connect",
        },
        Project {
            title: "Baos world",
            description: "Lead the development for the first meme defi platform on BSC",
            role: "creator",
            technologies: &["node.js", "solidity", "postgresql", "typescript", "substreams"],
            href: "https://github.com/Envy-Life",
        },
    ]
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="projects" />
        <Meta name="description" content="Some of the projects I've worked on." />
        <div class="animate-fade-in-up">
            <h1 class="text-4xl font-bold mb-8 text-white">
                <span class="text-accent mr-2">"*"</span>
                <ScrambleText text="projects".to_string() />
            </h1>

            <p class="text-gray-400 mb-12 leading-relaxed">
                "here are some of the projects i've worked on. i love building tools that make developers' lives easier and exploring new technologies along the way."
            </p>

            <div class="space-y-12">
                {projects().into_iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group">
            <a
                href=project.href
                target="_blank"
                rel="noopener noreferrer"
                class="text-xl text-white font-semibold group-hover:text-accent transition-colors duration-200"
            >
                {project.title}
            </a>
            <div class="text-sm text-gray-400 mt-1">{project.role}</div>
            <p class="text-gray-400 mt-2 leading-relaxed">{project.description}</p>
            <div class="flex flex-wrap gap-2 mt-3">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="text-xs text-gray-400 bg-gray-800 rounded-md px-2 py-1">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
