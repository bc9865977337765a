/// Identifier for a body in a [`crate::simulation::Simulation`].
///
/// This is an index into the body set, and is only meaningful within
/// the lifetime of a given `Simulation` instance. Bodies are never added
/// or removed after construction, so an id stays valid for the whole run.
pub type BodyId = usize;
