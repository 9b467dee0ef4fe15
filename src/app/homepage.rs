use leptos::prelude::*;
use leptos_meta::Title;

use super::blog::BlogSection;
use super::header::Header;
use super::sections::{LinksSection, SectionItem, SectionList};

fn work_items() -> Vec<SectionItem> {
    vec![
        SectionItem {
            title: "Spicenet",
            role: "Senior infrastructure and protocol engineer",
            period: Some("June 2024 - present"),
            description: "Building the first omni composability middleware for the global financial internet.",
            href: "https://spicenet.io",
        },
        SectionItem {
            title: "Proto geo",
            role: "Devops Lead",
            period: Some("December 2023 - May 2024"),
            description: "Leading storage and processing infrastructure for a large-scale web3 geospatial data platform",
            href: "https://www.proto-geo.xyz",
        },
        SectionItem {
            title: "Jio",
            role: "full-stack engineer",
            period: Some("May 2023 - June 2023"),
            description: "Designed and implemented all aspects of a full-stack mobile application for the safety team at Jio",
            href: "https://www.jio.com",
        },
        SectionItem {
            title: "Capx",
            role: "Intern/Blockchain engineer",
            period: Some("March 2022 - May 2023"),
            description: "Wrote smart contracts for Capx mint protocol giving users a no code launchpad for their tokens",
            href: "https://www.capx.ai",
        },
    ]
}

fn project_items() -> Vec<SectionItem> {
    vec![
        SectionItem {
            title: "Solana Indexer",
            role: "creator and maintainer",
            period: None,
            description: "A highly efficient and scalable self-hostable and programmable indexer for Solana, Powered by Superteam",
            href: "https://github.com/Envy-Life/Solana-Indexer",
        },
        SectionItem {
            title: "Scalping Bot",
            role: "creator",
            period: None,
            description: "A scalping bot for hyperliquid built using indicators from ta-lib",
            href: "https://github.com/Envy-Life",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="home" />
        <Header />
        <SectionList title="work" items=work_items() />
        <SectionList
            title="projects"
            items=project_items()
            view_all_href="/projects"
            view_all_text="all projects"
        />
        <BlogSection />
        <LinksSection />
    }
}
