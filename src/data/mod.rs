pub mod icon;
pub mod loader;
pub mod parser;
