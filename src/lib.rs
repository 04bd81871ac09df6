pub mod cli;
pub mod config;
pub mod containers;
pub mod logging;
pub mod mvi;
