// src/models/mod.rs
pub mod deterministic;
pub mod drw;
pub mod flare;
pub mod gp;
pub mod model;
pub mod sine;
pub mod stochastic;
pub mod white_noise;

pub use deterministic::DeterministicModel;
pub use drw::DampedRandomWalk;
pub use flare::FlarePeak;
pub use gp::SimpleGp;
pub use model::{DeterministicFlux, LightCurve, StochasticProcess};
pub use sine::SineWave;
pub use stochastic::StochasticModel;
pub use white_noise::WhiteNoise;
