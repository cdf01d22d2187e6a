//! Decorative motion: drifting hearts and per-card enter animations.
//!
//! None of this reads or writes flow state. Layouts are generated once and
//! handed to the renderer, which loops them with CSS.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::flow::Step;

pub const DEFAULT_HEART_COUNT: usize = 15;

const LEFT_VW: Range<f32> = 0.0..100.0;
const SIZE_PX: Range<f32> = 10.0..40.0;
const DURATION_SECS: Range<f32> = 10.0..20.0;
const DELAY_SECS: Range<f32> = 0.0..20.0;

/// One heart rising from below the viewport to above it, forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingHeart {
    /// Horizontal position as a percentage of viewport width
    pub left_vw: f32,
    pub size_px: f32,
    /// Time for one bottom-to-top pass
    pub duration_secs: f32,
    /// Delay before the first pass
    pub delay_secs: f32,
}

impl FloatingHeart {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.random_range(LEFT_VW),
            size_px: rng.random_range(SIZE_PX),
            duration_secs: rng.random_range(DURATION_SECS),
            delay_secs: rng.random_range(DELAY_SECS),
        }
    }

    /// Inline style for the heart's wrapper element.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}vw; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_vw, self.duration_secs, self.delay_secs
        )
    }
}

/// A fixed set of floating hearts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeartField {
    hearts: Vec<FloatingHeart>,
}

impl HeartField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let hearts = (0..count)
            .map(|_| FloatingHeart::random(&mut *rng))
            .collect();
        Self { hearts }
    }

    /// Same seed, same layout.
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::generate(count, &mut StdRng::seed_from_u64(seed))
    }

    pub fn random(count: usize) -> Self {
        Self::generate(count, &mut rand::rng())
    }

    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}

/// Enter animation played when a card mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Fade in from 90% scale
    ScaleIn,
    /// Fade in sliding from the right
    SlideIn,
    /// Fade in rising slightly
    LiftIn,
}

impl Motion {
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Intro | Step::Reveal => Motion::ScaleIn,
            Step::Sadness => Motion::SlideIn,
            Step::Letter => Motion::LiftIn,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Motion::ScaleIn => "motion-scale-in",
            Motion::SlideIn => "motion-slide-in",
            Motion::LiftIn => "motion-lift-in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_hearts_stay_in_bounds() {
        let field = HeartField::seeded(200, 7);
        assert_eq!(field.len(), 200);
        for heart in field.hearts() {
            assert!(LEFT_VW.contains(&heart.left_vw));
            assert!(SIZE_PX.contains(&heart.size_px));
            assert!(DURATION_SECS.contains(&heart.duration_secs));
            assert!(DELAY_SECS.contains(&heart.delay_secs));
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        assert_eq!(HeartField::seeded(15, 42), HeartField::seeded(15, 42));
        assert_ne!(HeartField::seeded(15, 1), HeartField::seeded(15, 2));
    }

    #[test]
    fn zero_hearts() {
        let field = HeartField::random(0);
        assert!(field.is_empty());
    }

    #[test]
    fn style_mentions_timing() {
        let heart = FloatingHeart {
            left_vw: 12.5,
            size_px: 20.0,
            duration_secs: 14.0,
            delay_secs: 3.25,
        };
        assert_eq!(
            heart.style(),
            "left: 12.50vw; animation-duration: 14.00s; animation-delay: 3.25s;"
        );
    }

    #[test]
    fn motion_per_step() {
        assert_eq!(Motion::for_step(Step::Intro), Motion::ScaleIn);
        assert_eq!(Motion::for_step(Step::Sadness), Motion::SlideIn);
        assert_eq!(Motion::for_step(Step::Reveal), Motion::ScaleIn);
        assert_eq!(Motion::for_step(Step::Letter).class(), "motion-lift-in");
    }
}
