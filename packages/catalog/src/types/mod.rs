pub mod mirror;
pub mod template;
pub mod tool;
