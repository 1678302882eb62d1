//! hdfsh API - Shared types for the WebHDFS namespace shell.
//!
//! These mirror the JSON payloads a namenode returns (`FileStatus`,
//! `RemoteException`) plus the structured `Value` commands hand back to the
//! front end.

mod entry;
mod remote;
mod value;

pub use entry::*;
pub use remote::*;
pub use value::*;
