//! Reusable UI components.

mod backdrop_blobs;
mod button;
mod floating_hearts;
mod icon;

pub use backdrop_blobs::*;
pub use button::*;
pub use floating_hearts::*;
pub use icon::*;
