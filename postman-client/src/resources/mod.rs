//! One module per API resource. Every public method validates its
//! identifiers before a request descriptor is built, so a malformed id
//! never reaches the transport.

mod collections;
mod comments;
mod environments;
mod forks;
mod specs;
mod tags;
mod users;
mod workspaces;

pub use collections::CollectionFilter;
pub use specs::SpecFilter;
pub use workspaces::WorkspaceFilter;
