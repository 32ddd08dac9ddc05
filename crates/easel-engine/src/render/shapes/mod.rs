mod common;
pub mod sprite;
pub mod text;
pub mod vertices;
