use crate::{NormalizerOptions, Viewport};

/// A recognized navigation key.
///
/// This is the closed set of codes that produce a [`crate::KeyGesture`]; anything else fails
/// [`NavKey::parse`] and is dropped before reaching the normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavKey {
    Tab,
    ArrowDown,
    ArrowRight,
    ArrowUp,
    ArrowLeft,
    Space,
    PageDown,
    PageUp,
}

impl NavKey {
    /// Parses a DOM-style `code` string.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "Tab" => Some(Self::Tab),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "Space" => Some(Self::Space),
            "PageDown" => Some(Self::PageDown),
            "PageUp" => Some(Self::PageUp),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Tab => "Tab",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowRight => "ArrowRight",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowLeft => "ArrowLeft",
            Self::Space => "Space",
            Self::PageDown => "PageDown",
            Self::PageUp => "PageUp",
        }
    }
}

/// Resolves a key press into a signed scroll distance in pixels.
///
/// Tab yields 0 (a "reset to top" signal computed by consumers, not here). Space honors the
/// configured `space_step` and flips sign while shift is held; Page keys always step by the
/// viewport height.
pub(crate) fn nav_step(
    key: NavKey,
    shift: bool,
    options: &NormalizerOptions,
    viewport: Viewport,
) -> f64 {
    match key {
        NavKey::Tab => 0.0,
        NavKey::ArrowDown | NavKey::ArrowRight => options.arrow_step,
        NavKey::ArrowUp | NavKey::ArrowLeft => -options.arrow_step,
        NavKey::Space => {
            let step = options.space_step.resolve(viewport);
            if shift { -step } else { step }
        }
        NavKey::PageDown => viewport.height,
        NavKey::PageUp => -viewport.height,
    }
}
