mod client;
mod controller;

pub use client::{NewsClient, NewsSource};
pub use controller::{ControllerState, NewsController};
