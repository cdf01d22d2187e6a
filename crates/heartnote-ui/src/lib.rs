//! Heartnote UI Components
//!
//! Dioxus building blocks for the apology card: soft pastel buttons,
//! decorative glyphs, and the ambient background layers.
//!
//! ## Palette
//!
//! - **Blush (#f9a8d4)**: primary actions, hearts
//! - **Lilac (#d8b4fe)**: secondary actions
//! - **Rose (#fca5a5)**: the gated "my message" action
//! - **Cream (#fcf5f2)**: page background

pub mod components;

pub use components::*;
