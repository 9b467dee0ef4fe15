use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::blog::PostMeta;

const SITE_URL: &str = "https://www.varun.fun";

pub fn build_channel(posts: Vec<PostMeta>) -> Channel {
    let items = posts
        .into_iter()
        .map(|p| {
            let link = format!("{SITE_URL}/blog/{}", p.name);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(p.title)
                .description(p.description)
                .author("varun.nyl@gmail.com (Varun L)".to_string())
                .pub_date(p.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("Varun L's Blog")
        .description("Notes on infrastructure, protocols, and building random things.")
        .link(format!("{SITE_URL}/blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}
