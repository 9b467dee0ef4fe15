use leptos::prelude::*;

/// One entry in a titled list: a job, a project, anything with a title and a
/// link. `period` is only set for work history.
#[derive(Debug, Clone, Copy)]
pub struct SectionItem {
    pub title: &'static str,
    pub role: &'static str,
    pub period: Option<&'static str>,
    pub description: &'static str,
    pub href: &'static str,
}

#[component]
pub fn SectionList(
    title: &'static str,
    items: Vec<SectionItem>,
    #[prop(optional)] view_all_href: Option<&'static str>,
    #[prop(default = "view all")] view_all_text: &'static str,
) -> impl IntoView {
    view! {
        <section class="mb-16 animate-fade-in-up">
            <h2 class="text-2xl font-bold mb-6 text-white">
                <span class="text-accent mr-2">"*"</span>
                {title}
            </h2>
            <div class="space-y-8">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="group">
                                <a
                                    href=item.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-white font-semibold group-hover:text-accent transition-colors duration-200"
                                >
                                    {item.title}
                                </a>
                                <div class="text-sm text-gray-400">
                                    {item.role}
                                    {item
                                        .period
                                        .map(|period| {
                                            view! {
                                                <span class="text-gray-500">" · " {period}</span>
                                            }
                                        })}
                                </div>
                                <p class="text-gray-400 mt-1 leading-relaxed">{item.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {view_all_href
                .map(|href| {
                    view! {
                        <a
                            href=href
                            class="inline-block mt-6 text-sm text-gray-400 hover:text-accent transition-colors duration-200"
                        >
                            {view_all_text} " →"
                        </a>
                    }
                })}
        </section>
    }
}

#[component]
pub fn LinksSection() -> impl IntoView {
    let links = [
        ("email", "mailto:varun.nyl@gmail.com"),
        ("x.com", "https://x.com/0x3nvy"),
        ("github", "https://github.com/Envy-Life"),
        ("linkedin", "https://www.linkedin.com/in/0x3nvy/"),
        ("book a call", "https://cal.com/0x3nvy"),
    ];

    view! {
        <section class="animate-fade-in-up">
            <h2 class="text-2xl font-bold mb-6 flex items-center text-white">
                <span class="text-accent mr-2">"*"</span>
                "links"
            </h2>
            <div class="flex flex-wrap gap-4 text-sm">
                {links
                    .into_iter()
                    .map(|(title, href)| {
                        view! {
                            <a
                                href=href
                                class="text-gray-400 hover:text-accent transition-colors duration-200"
                            >
                                {title}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="text-xs text-gray-500 mt-8 italic">
                "portfolio inspired by "
                <a
                    href="https://nexxel.dev"
                    class="hover:text-accent transition-colors duration-200"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "nexxel.dev"
                </a>
                " · rewritten in rust/leptos, last built " {env!("BUILD_TIME")}
            </p>
        </section>
    }
}
