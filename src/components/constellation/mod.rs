mod component;
mod controller;
mod fetch;
mod layout;
mod render;
mod state;
mod types;

pub use component::ConstellationCanvas;
