//! Card-specific components.

mod announcer;
mod letter_overlay;
mod memory_gallery;
mod reveal_tile;

pub use announcer::Announcer;
pub use letter_overlay::LetterOverlay;
pub use memory_gallery::MemoryGallery;
pub use reveal_tile::RevealTile;
