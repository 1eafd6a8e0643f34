pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod report;
pub mod settings;
