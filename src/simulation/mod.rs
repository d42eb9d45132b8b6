pub mod states;
pub mod error;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
