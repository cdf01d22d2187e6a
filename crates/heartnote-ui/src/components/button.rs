//! Button Components
//!
//! Pill buttons in the card palette plus a small round close button.

use dioxus::prelude::*;

use super::icon::{Glyph, Icon};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Pink pill, used on the opening card
    #[default]
    Blush,
    /// Purple pill
    Lilac,
    /// Full-width rose pill; greys out while disabled
    Rose,
    /// Large white panel button with a cursive label
    Letter,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Blush => "btn-blush",
            ButtonVariant::Lilac => "btn-lilac",
            ButtonVariant::Rose => "btn-rose",
            ButtonVariant::Letter => "btn-letter",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Disabled buttons render greyed out and never call `onclick`
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled pill button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Rose,
///         disabled: !flow.read().can_advance(),
///         onclick: move |_| advance(),
///         "My message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());
    let disabled = props.disabled;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: disabled,
            "aria-disabled": "{disabled}",
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    }
}

/// Round "x" button in the corner of the letter panel
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(());
            },
            Icon { glyph: Glyph::Close, size: 20 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Blush.class(), "btn-blush");
        assert_eq!(ButtonVariant::Lilac.class(), "btn-lilac");
        assert_eq!(ButtonVariant::Rose.class(), "btn-rose");
        assert_eq!(ButtonVariant::Letter.class(), "btn-letter");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Blush);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(button_class(ButtonVariant::Rose, None), "btn-rose");
        assert_eq!(button_class(ButtonVariant::Rose, Some("")), "btn-rose");
        assert_eq!(
            button_class(ButtonVariant::Lilac, Some("wide")),
            "btn-lilac wide"
        );
    }
}
