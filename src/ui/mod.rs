pub mod messages;
pub mod render;
