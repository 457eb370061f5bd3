pub mod config;
pub mod init;
pub mod log;
pub mod saved;
pub mod shell;
pub mod show;
pub mod titles;
