//! Participating media, as seen from a ray.

use std::fmt::Debug;

/// A participating medium a ray travels through.
///
/// The kernel only stores a borrowed reference to a medium; scattering models,
/// lifetime, and synchronization belong to whoever created it.
pub trait Medium: Debug + Send + Sync {}
