use alloc::sync::Arc;

use crate::keyboard::nav_step;
use crate::wheel::normalize_wheel;
use crate::{
    DragGesture, EventBus, GestureEvent, GestureKind, HandlerId, InputEvent, KeyGesture, KeyInput,
    NormalizerOptions, PointerDevice, PointerGesture, PointerInput, Viewport, WheelGesture,
    WheelInput,
};

/// Which native listener groups are currently attached.
///
/// Snapshotted from the options when `enable` runs; flipping option flags afterwards does not
/// attach or detach anything until the next enable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerSet {
    pub wheel: bool,
    pub pointer: bool,
    pub keyboard: bool,
}

impl ListenerSet {
    fn from_options(options: &NormalizerOptions) -> Self {
        Self {
            wheel: options.enable_wheel,
            pointer: options.enable_touch || options.enable_drag,
            keyboard: options.enable_keyboard,
        }
    }
}

/// A headless input normalizer.
///
/// This type listens to nothing by itself: your adapter forwards raw wheel, pointer, and
/// keyboard events (plus viewport geometry), and the normalizer translates each into a
/// canonical [`GestureEvent`] published synchronously to subscribers. Consumers get
/// device-agnostic scroll gestures without per-device branching.
///
/// Instances are independent; create as many as you need. Multi-threaded hosts should wrap an
/// instance in their own lock, as all mutation goes through `&mut self`.
#[derive(Clone, Debug)]
pub struct InputNormalizer {
    options: NormalizerOptions,
    active: bool,
    listeners: ListenerSet,
    viewport: Viewport,
    origin_x: f64,
    origin_y: f64,
    bus: EventBus,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputNormalizer {
    /// Creates an inert normalizer with default options.
    ///
    /// Nothing is published until [`enable`](Self::enable) runs.
    pub fn new() -> Self {
        Self {
            options: NormalizerOptions::default(),
            active: false,
            listeners: ListenerSet::default(),
            viewport: Viewport::default(),
            origin_x: 0.0,
            origin_y: 0.0,
            bus: EventBus::new(),
        }
    }

    /// Activates the normalizer with `options`.
    ///
    /// Attaches exactly the listener groups implied by the option flags. If the normalizer is
    /// already active the call is ignored (a warning is reported) and the previous options stay
    /// in effect; returns whether activation happened.
    pub fn enable(&mut self, options: NormalizerOptions) -> bool {
        if self.active {
            vwarn!(options = ?self.options, "enable called while already active; keeping current options");
            return false;
        }

        let options = options.sanitized();
        if let Some(viewport) = options.initial_viewport {
            self.viewport = viewport;
        }
        self.listeners = ListenerSet::from_options(&options);
        vdebug!(
            wheel = self.listeners.wheel,
            pointer = self.listeners.pointer,
            keyboard = self.listeners.keyboard,
            "enable"
        );
        self.options = options;
        self.active = true;
        true
    }

    /// Deactivates the normalizer and detaches every listener group.
    ///
    /// Safe to call repeatedly; returns whether the state changed.
    pub fn disable(&mut self) -> bool {
        if !self.active {
            return false;
        }
        vdebug!("disable");
        self.active = false;
        self.listeners = ListenerSet::default();
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Call this when the host viewport resizes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Last recorded pointer-down/up position, the reference point for drag deltas.
    pub fn tracking_origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Subscribes `callback` to one gesture kind; returns the token for [`detach`](Self::detach).
    pub fn handle(
        &mut self,
        kind: GestureKind,
        callback: impl Fn(&GestureEvent) + Send + Sync + 'static,
    ) -> HandlerId {
        self.bus.on(kind, Arc::new(callback))
    }

    /// Unsubscribes a callback registered with [`handle`](Self::handle).
    pub fn detach(&mut self, kind: GestureKind, id: HandlerId) -> bool {
        self.bus.off(kind, id)
    }

    pub fn handler_count(&self, kind: GestureKind) -> usize {
        self.bus.handler_count(kind)
    }

    /// Routes a tagged raw event to the matching translation.
    ///
    /// Returns true when the host's default reaction should be suppressed (currently only drag
    /// moves ask for that).
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Wheel(input) => {
                self.on_wheel(input);
                false
            }
            InputEvent::PointerDown(input) => {
                self.on_pointer_down(input);
                false
            }
            InputEvent::PointerMove(input) => self.on_pointer_move(input),
            InputEvent::PointerUp(input) => {
                self.on_pointer_up(input);
                false
            }
            InputEvent::Keydown(input) => {
                self.on_key_down(input);
                false
            }
        }
    }

    /// Translates a raw wheel event and publishes [`GestureKind::Wheel`].
    ///
    /// Returns whether a gesture was published.
    pub fn on_wheel(&mut self, input: WheelInput) -> bool {
        if !self.active || !self.listeners.wheel {
            return false;
        }

        let mut delta = normalize_wheel(input, self.viewport);
        delta.pixel_x *= self.options.wheel_multiplier;
        delta.pixel_y *= self.options.wheel_multiplier;

        vtrace!(
            pixel_x = delta.pixel_x,
            pixel_y = delta.pixel_y,
            "wheel"
        );
        self.publish(GestureEvent::Wheel(WheelGesture {
            spin_x: delta.spin_x,
            spin_y: delta.spin_y,
            pixel_x: delta.pixel_x,
            pixel_y: delta.pixel_y,
            raw: input,
        }));
        true
    }

    /// Translates a raw pointer-down and publishes [`GestureKind::PointerDown`].
    ///
    /// Only the primary button is accepted, and only for devices whose gesture is enabled. The
    /// accepted position becomes the drag tracking origin. Returns whether a gesture was
    /// published.
    pub fn on_pointer_down(&mut self, input: PointerInput) -> bool {
        if !self.active || !self.listeners.pointer {
            return false;
        }
        if input.button != 0 || self.gesture_disabled(input.device) {
            return false;
        }

        self.origin_x = finite_or_zero(input.x);
        self.origin_y = finite_or_zero(input.y);

        self.publish(GestureEvent::PointerDown(PointerGesture {
            x: self.origin_x,
            y: self.origin_y,
            device: input.device,
            raw: input,
        }));
        true
    }

    /// Translates a raw pointer-move.
    ///
    /// Two independent gestures can come out of one move:
    /// - [`GestureKind::PointerMove`] with the raw position, when `track_pointer` is set and
    ///   the device is a mouse, regardless of button state;
    /// - [`GestureKind::Drag`] with the multiplied displacement from the tracking origin, when
    ///   the primary button is held and the device's gesture is enabled.
    ///
    /// Returns true only for the drag case, as the cue to suppress the host's default
    /// scrolling.
    pub fn on_pointer_move(&mut self, input: PointerInput) -> bool {
        if !self.active || !self.listeners.pointer {
            return false;
        }

        let x = finite_or_zero(input.x);
        let y = finite_or_zero(input.y);

        if self.options.track_pointer && input.device == PointerDevice::Mouse {
            self.publish(GestureEvent::PointerMove(PointerGesture {
                x,
                y,
                device: input.device,
                raw: input,
            }));
        }

        if input.buttons != 1 || self.gesture_disabled(input.device) {
            return false;
        }

        let multiplier = match input.device {
            PointerDevice::Mouse => self.options.drag_multiplier,
            PointerDevice::Touch => self.options.touch_multiplier,
            _ => 1.0,
        };

        let dx = (x - self.origin_x) * multiplier;
        let dy = (y - self.origin_y) * multiplier;
        vtrace!(dx, dy, device = ?input.device, "drag");
        self.publish(GestureEvent::Drag(DragGesture {
            dx,
            dy,
            device: input.device,
            raw: input,
        }));
        true
    }

    /// Translates a raw pointer-up and publishes [`GestureKind::PointerUp`].
    ///
    /// Same gating as pointer-down; the accepted position becomes the new tracking origin.
    /// Returns whether a gesture was published.
    pub fn on_pointer_up(&mut self, input: PointerInput) -> bool {
        if !self.active || !self.listeners.pointer {
            return false;
        }
        if input.button != 0 || self.gesture_disabled(input.device) {
            return false;
        }

        self.origin_x = finite_or_zero(input.x);
        self.origin_y = finite_or_zero(input.y);

        self.publish(GestureEvent::PointerUp(PointerGesture {
            x: self.origin_x,
            y: self.origin_y,
            device: input.device,
            raw: input,
        }));
        true
    }

    /// Translates a recognized key press and publishes [`GestureKind::Keydown`].
    ///
    /// Returns whether a gesture was published.
    pub fn on_key_down(&mut self, input: KeyInput) -> bool {
        if !self.active || !self.listeners.keyboard {
            return false;
        }

        let value = nav_step(input.code, input.shift, &self.options, self.viewport);
        self.publish(GestureEvent::Keydown(KeyGesture {
            code: input.code,
            shift: input.shift,
            value,
            raw: input,
        }));
        true
    }

    fn gesture_disabled(&self, device: PointerDevice) -> bool {
        match device {
            PointerDevice::Mouse => !self.options.enable_drag,
            PointerDevice::Touch => !self.options.enable_touch,
            _ => false,
        }
    }

    fn publish(&self, event: GestureEvent) {
        self.bus.emit(&event);
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
