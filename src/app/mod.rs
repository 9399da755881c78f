//! Application-Layer: Host-Komponente und Editor-Commands.

pub mod command;
pub mod host;

pub use command::PathCommand;
pub use host::PathHost;
