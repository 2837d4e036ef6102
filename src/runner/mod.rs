//! Running the main application inside the environment.

pub mod process;

pub use process::ProcessRunner;
