pub mod command;
pub mod preset;
