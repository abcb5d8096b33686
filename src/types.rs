use crate::NavKey;

/// Unit of a raw wheel delta, mirroring the `deltaMode` reported by browsers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

/// The device class a pointer event originated from.
///
/// Unknown devices are accepted and treated with a neutral multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerDevice {
    Mouse,
    Touch,
    Pen,
    Unknown,
}

/// Host viewport geometry in pixels.
///
/// Used for page-mode wheel conversion and Space/Page keyboard steps. Your adapter should keep
/// this current via [`crate::InputNormalizer::set_viewport`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A raw wheel event as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
}

/// A raw pointer event as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    /// Button that changed state (0 = primary). Meaningful for down/up events.
    pub button: i16,
    /// Bitmask of buttons currently held. Meaningful for move events.
    pub buttons: u16,
    pub device: PointerDevice,
}

/// A raw keyboard event carrying an already-recognized navigation key.
///
/// Adapters working from string key codes go through [`NavKey::parse`] first; codes it rejects
/// never reach the normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyInput {
    pub code: NavKey,
    pub shift: bool,
}

/// A tagged raw event for the single [`crate::InputNormalizer::dispatch`] entry point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    Wheel(WheelInput),
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    Keydown(KeyInput),
}
