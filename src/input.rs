//! Per-tick control input.
//!
//! Input arrives as a continuous 2D axis and a held button. The button is
//! turned into a one-shot jump request on its rising edge; the physics tick
//! consumes the request whether or not a jump actually happens.

use glam::Vec2;

/// Input consumed by one physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Raw movement axis; `y` is forward, `x` is right.
    pub move_axis: Vec2,
    /// Pending one-shot jump request.
    pub jump_requested: bool,
}

impl InputSample {
    /// Marks a jump as requested.
    pub const fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Returns and clears the pending jump request.
    ///
    /// # Examples
    /// ```
    /// use roller::InputSample;
    /// let mut input = InputSample::default();
    /// input.request_jump();
    /// assert!(input.take_jump());
    /// assert!(!input.take_jump());
    /// ```
    pub const fn take_jump(&mut self) -> bool {
        let requested = self.jump_requested;
        self.jump_requested = false;
        requested
    }

    /// Drops both movement and any pending jump.
    pub const fn clear(&mut self) {
        self.move_axis = Vec2::ZERO;
        self.jump_requested = false;
    }
}

/// Rising-edge detector for a held button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    was_down: bool,
}

impl ButtonEdge {
    /// Feeds the current button state, returning `true` only on the frame it
    /// goes from released to pressed.
    ///
    /// # Examples
    /// ```
    /// use roller::ButtonEdge;
    /// let mut edge = ButtonEdge::default();
    /// assert!(edge.rising(true));
    /// assert!(!edge.rising(true));
    /// assert!(!edge.rising(false));
    /// assert!(edge.rising(true));
    /// ```
    pub const fn rising(&mut self, down: bool) -> bool {
        let rose = down && !self.was_down;
        self.was_down = down;
        rose
    }
}
