//! Playing whole games: the agent seam and the turn driver.

mod agent;
mod controller;

pub use agent::{Agent, RandomAgent, ScriptedAgent};
pub use controller::{GameController, GameResult, GameSummary};
