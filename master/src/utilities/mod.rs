pub mod args;
pub mod command;
pub mod debug;
pub mod demo;
