//! Card copy and asset locators.
//!
//! [`CardContent::default`] is the built-in card. A JSON file can override
//! any part of it; sections left out of the file keep their defaults.
//!
//! ```json
//! { "intro": { "title": "Hey you" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};
use crate::flow::REVEAL_SLOTS;

/// Static image locator. Handed to the renderer as-is, never fetched here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Background tint of a hidden message tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Orange,
    Pink,
    Purple,
}

impl Tint {
    pub fn class(&self) -> &'static str {
        match self {
            Tint::Orange => "tint-orange",
            Tint::Pink => "tint-pink",
            Tint::Purple => "tint-purple",
        }
    }
}

/// One of the hidden messages on the reveal card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealMessage {
    pub tint: Tint,
    pub text: String,
}

/// An entry in the letter's memory gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Memory {
    Photo { image: ImageRef },
    /// Thumbnail with a play glyph; playback is out of scope
    Video { thumbnail: ImageRef, caption: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroCard {
    pub title: String,
    pub body: String,
    pub image: ImageRef,
    pub button_label: String,
}

impl Default for IntroCard {
    fn default() -> Self {
        Self {
            title: "Hey Cutiepie".to_string(),
            body: "Can we talk for a moment? There's something important I want to tell you."
                .to_string(),
            image: ImageRef::new(
                "https://media.tenor.com/On7msF9e1rIAAAAj/mochi-cat-mochi.gif",
                "Cute Bunny",
            ),
            button_label: "Continue".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SadnessCard {
    pub body: String,
    pub image: ImageRef,
    pub button_label: String,
}

impl Default for SadnessCard {
    fn default() -> Self {
        Self {
            body: "I know I hurt you... and I've been feeling really bad about it.".to_string(),
            image: ImageRef::new(
                "https://media.tenor.com/bX6t4H8X5GkAAAAj/sad-cat.gif",
                "Sad Cat",
            ),
            button_label: "Next".to_string(),
        }
    }
}

/// The reveal card. Exactly [`REVEAL_SLOTS`] messages, enforced by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealCard {
    pub title: String,
    pub hint: String,
    pub messages: [RevealMessage; REVEAL_SLOTS],
    pub button_label: String,
}

impl Default for RevealCard {
    fn default() -> Self {
        Self {
            title: "Little things I want to tell you...".to_string(),
            hint: "Tap each one".to_string(),
            messages: [
                RevealMessage {
                    tint: Tint::Orange,
                    text: "I messed up... and I'm really sorry for that.".to_string(),
                },
                RevealMessage {
                    tint: Tint::Pink,
                    text: "I promise I'll be better for you.".to_string(),
                },
                RevealMessage {
                    tint: Tint::Purple,
                    text: "Please forgive me... You mean so much to me.".to_string(),
                },
            ],
            button_label: "My message".to_string(),
        }
    }
}

/// Body of the sliding letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letter {
    pub title: String,
    pub paragraphs: Vec<String>,
    /// Rendered emphasised after the paragraphs
    pub closing: String,
    pub gallery_title: String,
    pub memories: Vec<Memory>,
}

impl Default for Letter {
    fn default() -> Self {
        Self {
            title: "I'm Sorry".to_string(),
            paragraphs: vec![
                "For hurting you and making you feel upset, I'm truly sorry. I never wanted to be \
                 the reason behind your tears or your silence. You matter to me more than I \
                 always manage to show, and I hate that I let you down."
                    .to_string(),
                "I promise to grow, to listen, and to be better for you every single day. Thank \
                 you for staying, for caring, and for being you."
                    .to_string(),
            ],
            closing: "I'm really trying... and I hope you can forgive me.".to_string(),
            gallery_title: "Our Memories".to_string(),
            memories: vec![
                Memory::Photo {
                    image: ImageRef::new(
                        "https://images.unsplash.com/photo-1518568814500-bf0f8d125f46?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
                        "Memory 1",
                    ),
                },
                Memory::Video {
                    thumbnail: ImageRef::new(
                        "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
                        "Video Thumbnail",
                    ),
                    caption: "Click to play video".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinaleCard {
    pub title: String,
    pub portraits: [ImageRef; 2],
    pub hint: String,
    pub trigger_label: String,
    pub letter: Letter,
}

impl Default for FinaleCard {
    fn default() -> Self {
        Self {
            title: "From my heart...".to_string(),
            portraits: [
                ImageRef::new(
                    "https://media.tenor.com/uR2c9c_BvOIAAAAj/cat-meow.gif",
                    "Cat 1",
                ),
                ImageRef::new(
                    "https://media.tenor.com/0i1r9Zc2KkMAAAAj/cat-love.gif",
                    "Cat 2",
                ),
            ],
            hint: "\u{2193} Tap to see message \u{2193}".to_string(),
            trigger_label: "I'm Sorry".to_string(),
            letter: Letter::default(),
        }
    }
}

/// Everything the four cards display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    pub intro: IntroCard,
    pub sadness: SadnessCard,
    pub reveal: RevealCard,
    pub finale: FinaleCard,
}

impl CardContent {
    /// Parse and validate a JSON content file.
    pub fn from_path(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), "loaded card content");
        Ok(content)
    }

    pub fn from_json(raw: &str) -> ContentResult<Self> {
        let content: CardContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Reject content that would render an empty card.
    pub fn validate(&self) -> ContentResult<()> {
        let required = [
            ("intro.title", &self.intro.title),
            ("intro.button_label", &self.intro.button_label),
            ("sadness.button_label", &self.sadness.button_label),
            ("reveal.title", &self.reveal.title),
            ("reveal.button_label", &self.reveal.button_label),
            ("finale.title", &self.finale.title),
            ("finale.trigger_label", &self.finale.trigger_label),
            ("finale.letter.title", &self.finale.letter.title),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::Invalid(format!("{} is empty", field)));
            }
        }

        if let Some(i) = self
            .reveal
            .messages
            .iter()
            .position(|m| m.text.trim().is_empty())
        {
            return Err(ContentError::Invalid(format!("reveal.messages[{}] has no text", i)));
        }

        if self.finale.letter.paragraphs.is_empty() {
            return Err(ContentError::Invalid(
                "finale.letter needs at least one paragraph".to_string(),
            ));
        }

        Ok(())
    }
}
