// Engine modules: fixed timestep, input, physics

pub mod game_loop;
pub mod input;
pub mod physics;
