//! CLI subcommands.

pub mod export;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod list;
pub mod render;
pub mod serve;
