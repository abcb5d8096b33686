use crate::{DeltaMode, Viewport, WheelInput};

/// Pixels per line-mode delta unit.
pub const LINE_HEIGHT: f64 = 34.0;

/// Page height used when the viewport has not been reported yet.
pub const FALLBACK_PAGE_HEIGHT: f64 = 800.0;

/// A wheel delta converted to common units, before any multiplier is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelDelta {
    pub spin_x: f64,
    pub spin_y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

/// Converts a raw wheel delta into pixel and spin units.
///
/// Browsers disagree on wheel units: most report pixels, Firefox reports lines, and page-wise
/// scrolling reports whole pages. Pixel deltas pass through 1:1, line deltas are scaled by
/// [`LINE_HEIGHT`], and page deltas by the current viewport height (or
/// [`FALLBACK_PAGE_HEIGHT`] when the viewport is unset).
///
/// Spin is the notch/step count. Line and page events carry it directly; for pixel events only
/// the direction is known, so spin degrades to the sign of the pixel delta.
pub fn normalize_wheel(input: WheelInput, viewport: Viewport) -> WheelDelta {
    let mut spin_x = 0.0;
    let mut spin_y = 0.0;
    let mut pixel_x = input.delta_x;
    let mut pixel_y = input.delta_y;

    match input.mode {
        DeltaMode::Pixel => {}
        DeltaMode::Line => {
            spin_x = input.delta_x;
            spin_y = input.delta_y;
            pixel_x *= LINE_HEIGHT;
            pixel_y *= LINE_HEIGHT;
        }
        DeltaMode::Page => {
            spin_x = input.delta_x;
            spin_y = input.delta_y;
            let page = if viewport.height > 0.0 {
                viewport.height
            } else {
                FALLBACK_PAGE_HEIGHT
            };
            pixel_x *= page;
            pixel_y *= page;
        }
    }

    if spin_x == 0.0 {
        spin_x = sign(pixel_x);
    }
    if spin_y == 0.0 {
        spin_y = sign(pixel_y);
    }

    WheelDelta {
        spin_x,
        spin_y,
        pixel_x,
        pixel_y,
    }
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
