mod args;
mod commands;
mod config_cmd;
mod daily;
mod locate;
mod pages;
mod plan;
mod setup;
mod table;
mod util;

pub use args::Cli;
