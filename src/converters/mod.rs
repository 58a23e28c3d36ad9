pub mod html;
pub mod marp;
