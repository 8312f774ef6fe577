//! Collaborators injected into the engine from the outside world.
//!
//! Currently this is only randomness; everything else an encounter needs is
//! carried by the rosters and the [`crate::EngineConfig`].

mod rng;

pub use rng::{CombatRng, RngOracle, from_entropy, seeded};
