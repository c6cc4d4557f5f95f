pub mod container;
pub mod controller;
pub mod router;
pub mod schema;

pub use container::{Container, ContainerConfig};
pub use router::{router, serve};
