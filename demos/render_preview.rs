//! Assembles a small sample deck and writes the HTML preview next to it.
//!
//! Run with `cargo run --example render_preview`.

use marpdeck::{assemble_deck, render_deck, Layout, Slide};

fn main() {
    env_logger::init();

    let slides = vec![
        Slide {
            title: "Why Rust".to_string(),
            content: "- Memory safety without garbage collection\n- **Fearless** concurrency\n- _Zero-cost_ abstractions".to_string(),
            highlight: Some("Safe and fast are not a trade-off.".to_string()),
            layout: Layout::ImageRight,
            image_prompt: "a crab holding a shield".to_string(),
            image_url: Some("https://picsum.photos/seed/rust/800/600".to_string()),
        },
        Slide {
            title: "Adoption".to_string(),
            content: "- Loved in surveys year after year\n- Growing in infrastructure and tooling".to_string(),
            highlight: None,
            layout: Layout::FullBleed,
            image_prompt: "a rising graph over a city skyline".to_string(),
            image_url: Some("https://picsum.photos/seed/adoption/1280/720".to_string()),
        },
        Slide {
            title: "Questions".to_string(),
            content: "- Thank you!".to_string(),
            highlight: None,
            layout: Layout::ImageLeft,
            image_prompt: "question marks floating".to_string(),
            image_url: None,
        },
    ];

    let deck = assemble_deck(&slides);
    let html = render_deck(&deck);

    std::fs::write("preview.html", &html).expect("Unable to write preview.html");
    println!("{deck}");
    println!("Preview written to preview.html ({} bytes)", html.len());
}
