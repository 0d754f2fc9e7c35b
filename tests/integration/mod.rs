//! End-to-end mirror runs over real temporary directories

mod cli;
mod drift;
mod failures;
