//! Line-art glyphs drawn as inline SVG.

use dioxus::prelude::*;

/// Available glyphs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Heart,
    ArrowRight,
    Play,
    Sparkles,
    Close,
}

impl Glyph {
    /// SVG path data on a 24x24 grid
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::Play => &["M6 3l14 9-14 9V3z"],
            Glyph::Sparkles => &[
                "M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z",
                "M20 3v4",
                "M22 5h-4",
            ],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub glyph: Glyph,
    #[props(default = 16)]
    pub size: u32,
    /// Fill with the current text colour instead of outlining
    #[props(default = false)]
    pub filled: bool,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let fill = if props.filled { "currentColor" } else { "none" };
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in props.glyph.paths().iter() {
                path { key: "{d}", d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_paths() {
        for glyph in [
            Glyph::Heart,
            Glyph::ArrowRight,
            Glyph::Play,
            Glyph::Sparkles,
            Glyph::Close,
        ] {
            assert!(!glyph.paths().is_empty(), "{:?} has no paths", glyph);
        }
    }
}
