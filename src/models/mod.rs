pub mod record;
pub mod slide;
