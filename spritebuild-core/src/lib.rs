//! Build Driver Core
//!
//! This library selects a per-platform build configuration for the sprite
//! editor and renders it as the command string a user could type into a
//! terminal. The compiler itself is run as a subprocess with discrete
//! arguments rather than through a shell.

pub mod command;
pub mod config;
pub mod error;
pub mod layout;
pub mod platform;
pub mod runner;
pub mod sources;
pub mod toolchain;

pub use command::CompileCommand;
pub use config::BuildConfig;
pub use error::BuildError;
pub use layout::ProjectLayout;
pub use platform::Platform;
