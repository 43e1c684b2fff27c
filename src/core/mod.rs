pub mod add;
pub mod aggregator;
pub mod del;
pub mod demo;
pub mod log;
