//! Process lifecycle subsystem.

pub mod shutdown;

pub use shutdown::Shutdown;
