mod noop;
mod traits;

pub use noop::{NoOpBackend, NoOpBackendPlugin};
pub use traits::GrapplePhysicsBackend;
