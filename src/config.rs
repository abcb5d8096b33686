use crate::Viewport;

/// Scroll distance for the Space key.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpaceStep {
    /// Step by the current viewport height.
    Viewport,
    /// A fixed step in pixels.
    Value(f64),
}

impl SpaceStep {
    pub(crate) fn resolve(&self, viewport: Viewport) -> f64 {
        match self {
            Self::Viewport => viewport.height,
            Self::Value(v) => *v,
        }
    }
}

impl Default for SpaceStep {
    fn default() -> Self {
        Self::Viewport
    }
}

/// Configuration for [`crate::InputNormalizer`].
///
/// Options are captured by `enable` and are immutable while the normalizer is active. Every
/// field has a documented default; unknown keys are a compile error here and, with
/// `feature = "serde"`, a deserialization error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct NormalizerOptions {
    /// Scales normalized wheel pixel deltas. Default 1.0.
    pub wheel_multiplier: f64,
    /// Scales drag deltas from touch devices. Default 1.0.
    pub touch_multiplier: f64,
    /// Scales drag deltas from mice. Default 1.0.
    pub drag_multiplier: f64,

    /// Attach the wheel listener. Default true.
    pub enable_wheel: bool,
    /// Accept touch pointer gestures. Default true.
    pub enable_touch: bool,
    /// Accept mouse drag gestures. Default true.
    pub enable_drag: bool,
    /// Attach the keyboard listener. Default true.
    pub enable_keyboard: bool,

    /// Publish raw mouse positions on every move, independent of drags. Default false.
    pub track_pointer: bool,

    /// Space key step. Default [`SpaceStep::Viewport`].
    pub space_step: SpaceStep,
    /// Arrow key step in pixels. Default 120.0.
    pub arrow_step: f64,

    /// Viewport applied at enable time; later updates go through
    /// [`crate::InputNormalizer::set_viewport`].
    pub initial_viewport: Option<Viewport>,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            wheel_multiplier: 1.0,
            touch_multiplier: 1.0,
            drag_multiplier: 1.0,
            enable_wheel: true,
            enable_touch: true,
            enable_drag: true,
            enable_keyboard: true,
            track_pointer: false,
            space_step: SpaceStep::default(),
            arrow_step: 120.0,
            initial_viewport: None,
        }
    }
}

impl NormalizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wheel_multiplier(mut self, wheel_multiplier: f64) -> Self {
        self.wheel_multiplier = wheel_multiplier;
        self
    }

    pub fn with_touch_multiplier(mut self, touch_multiplier: f64) -> Self {
        self.touch_multiplier = touch_multiplier;
        self
    }

    pub fn with_drag_multiplier(mut self, drag_multiplier: f64) -> Self {
        self.drag_multiplier = drag_multiplier;
        self
    }

    pub fn with_wheel(mut self, enable_wheel: bool) -> Self {
        self.enable_wheel = enable_wheel;
        self
    }

    pub fn with_touch(mut self, enable_touch: bool) -> Self {
        self.enable_touch = enable_touch;
        self
    }

    pub fn with_drag(mut self, enable_drag: bool) -> Self {
        self.enable_drag = enable_drag;
        self
    }

    pub fn with_keyboard(mut self, enable_keyboard: bool) -> Self {
        self.enable_keyboard = enable_keyboard;
        self
    }

    pub fn with_track_pointer(mut self, track_pointer: bool) -> Self {
        self.track_pointer = track_pointer;
        self
    }

    pub fn with_space_step(mut self, space_step: SpaceStep) -> Self {
        self.space_step = space_step;
        self
    }

    pub fn with_arrow_step(mut self, arrow_step: f64) -> Self {
        self.arrow_step = arrow_step;
        self
    }

    /// Sets the viewport applied when the normalizer is enabled.
    pub fn with_initial_viewport(mut self, initial_viewport: Option<Viewport>) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    /// Replaces out-of-range numeric fields with their defaults.
    ///
    /// Multipliers and steps must be finite and non-negative; anything else is reported and
    /// reset so a bad value cannot silently zero out or invert every gesture.
    pub(crate) fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !valid_scale(self.wheel_multiplier) {
            vwarn!(
                wheel_multiplier = self.wheel_multiplier,
                "invalid wheel_multiplier, using default"
            );
            self.wheel_multiplier = defaults.wheel_multiplier;
        }
        if !valid_scale(self.touch_multiplier) {
            vwarn!(
                touch_multiplier = self.touch_multiplier,
                "invalid touch_multiplier, using default"
            );
            self.touch_multiplier = defaults.touch_multiplier;
        }
        if !valid_scale(self.drag_multiplier) {
            vwarn!(
                drag_multiplier = self.drag_multiplier,
                "invalid drag_multiplier, using default"
            );
            self.drag_multiplier = defaults.drag_multiplier;
        }
        if !valid_scale(self.arrow_step) {
            vwarn!(arrow_step = self.arrow_step, "invalid arrow_step, using default");
            self.arrow_step = defaults.arrow_step;
        }
        if let SpaceStep::Value(v) = self.space_step {
            if !valid_scale(v) {
                vwarn!(space_step = v, "invalid space_step, using default");
                self.space_step = defaults.space_step;
            }
        }
        self
    }
}

fn valid_scale(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
