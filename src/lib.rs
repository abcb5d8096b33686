//! Headless input normalization for virtual scrolling.
//!
//! Raw wheel, pointer, and keyboard events differ per device and browser: wheel deltas arrive
//! in pixels, lines, or pages; drags come from mice and touch screens with different feels;
//! keyboards scroll by arrows, Space, and Page keys. This crate folds all of that into a small
//! set of canonical gesture events so scroll consumers never branch on the device.
//!
//! It is UI-agnostic. A DOM/winit/TUI adapter is expected to provide:
//! - raw input records ([`WheelInput`], [`PointerInput`], [`KeyInput`])
//! - viewport geometry (width/height)
//!
//! and to react to the published [`GestureEvent`]s, typically by driving a scroll engine.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bus;
mod config;
mod events;
mod keyboard;
mod normalizer;
mod types;
mod wheel;


pub use bus::{EventBus, GestureCallback, HandlerId};
pub use config::{NormalizerOptions, SpaceStep};
pub use events::{
    DragGesture, GestureEvent, GestureKind, KeyGesture, PointerGesture, WheelGesture,
};
pub use keyboard::NavKey;
pub use normalizer::{InputNormalizer, ListenerSet};
pub use types::{
    DeltaMode, InputEvent, KeyInput, PointerDevice, PointerInput, Viewport, WheelInput,
};
pub use wheel::{FALLBACK_PAGE_HEIGHT, LINE_HEIGHT, WheelDelta, normalize_wheel};
