//! Constants for the HTML preview: the accent palette, pane weight, and the
//! base stylesheet embedded into every rendered document.

/// Background accent colors, cycled by slide ordinal modulo palette size.
pub const ACCENT_PALETTE: [&str; 5] = ["#f7f3ec", "#ecf2f7", "#f2ecf7", "#ecf7f0", "#f7eeec"];

/// Weight of the image pane in sided layouts, as a percentage of slide width.
pub const IMAGE_PANE_PERCENT: u32 = 35;

/// Base document styles. Layout-specific rules key off the `.slide` classes
/// emitted per container; full-bleed backgrounds are inlined per slide since
/// they embed the captured URL.
pub const BASE_STYLES: &str = "html,body{margin:0;padding:0;background:#1c1c1e;font-family:-apple-system,'Segoe UI',sans-serif;}\
.slide{display:flex;align-items:stretch;aspect-ratio:16/9;margin:1.5rem auto;max-width:960px;border-radius:12px;overflow:hidden;color:#2c2c2e;box-shadow:0 4px 18px rgba(0,0,0,0.35);}\
.slide .body{flex:1 1 auto;padding:2.5rem 3rem;}\
.slide .pane{flex:0 0 35%;}\
.slide .pane img{width:100%;height:100%;object-fit:cover;display:block;}\
.slide.image-left{flex-direction:row-reverse;}\
.slide.full-bleed{background-size:cover;background-position:center;color:#ffffff;}\
.slide h1{font-size:2rem;margin:0 0 0.75rem;line-height:1.2;}\
.slide h2{font-size:1.4rem;margin:0.5rem 0;}\
.slide p{margin:0.5rem 0;line-height:1.5;}\
.slide ul{margin:0.5rem 0;padding-left:1.4em;}\
.slide li{margin:0.3em 0;line-height:1.5;}\
.slide blockquote.highlight{border-left:4px solid #e0a438;background:rgba(224,164,56,0.12);margin:0.75rem 0;padding:0.5rem 1rem;font-weight:600;}\
.slide.full-bleed blockquote.highlight{background:rgba(255,255,255,0.15);border-left-color:#ffffff;}";

/// Dark gradient layered over full-bleed background images so light text
/// stays readable.
pub const FULL_BLEED_OVERLAY: &str = "linear-gradient(rgba(0,0,0,0.55),rgba(0,0,0,0.55))";
