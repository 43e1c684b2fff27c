pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod demo;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
