pub mod contact;
pub mod render;
