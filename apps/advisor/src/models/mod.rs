pub mod chat;
pub mod content;
pub mod profile;
pub mod roadmap;
