mod blog;
mod header;
mod homepage;
mod navbar;
mod projects;
mod scramble;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use blog::{BlogHome, BlogPost, BlogWrapper};
use homepage::HomePage;
use navbar::Navbar;
use projects::ProjectsPage;

const SITE_URL: &str = "https://www.varun.fun";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/varun-fun.css" />
                <MetaTags />
            </head>
            <body class="antialiased min-h-screen font-mono bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Varun L") />
        <Meta name="description" content="Developer" />
        <Meta
            name="robots"
            content="index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        />
        <Meta property="og:site_name" content="Varun L" />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:creator" content="@0x3nvy" />

        <Router>
            <div class="max-w-4xl mx-auto px-4 py-8">
                <Navbar />
                <main>
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <ParentRoute path=path!("/blog") view=BlogWrapper>
                            <Route path=path!("") view=BlogHome />
                            <Route path=path!(":post") view=BlogPost />
                        </ParentRoute>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="404" />
        <div class="py-16 text-center">
            <h1 class="text-4xl font-bold text-white mb-4">"404"</h1>
            <p class="text-gray-400">
                "nothing here. " <a href="/" class="text-accent hover:underline">"go home"</a>
            </p>
        </div>
    }
}
