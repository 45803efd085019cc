//! Public library modules for the CLI crate
pub mod options;
pub mod paths;
