pub mod chat;
pub mod start;
