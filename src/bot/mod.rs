pub mod commands;
pub mod embed;
pub mod handler;
pub mod start;
pub mod theme;
