//! The EPA algorithm for penetration depth computation.

pub use self::epa::{penetration, EpaStatus, Penetration};
pub use self::polytope::{Edge, EdgeBuffer, Face, Polytope, EPA_MAX_EDGES, EPA_MAX_FACES};

mod epa;
mod polytope;
