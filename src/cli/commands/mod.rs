pub mod adjust;
pub mod config;
pub mod events;
pub mod init;
pub mod invalidate;
pub mod list;
pub mod log;
pub mod monthly;
pub mod punch;
