//! A single active-animation slot per animated surface.
//!
//! Every animation that wants to drive a surface (e.g. the window's scroll
//! offset) first calls [`AnimationSlot::start`] and receives a [`Token`]. Each
//! frame step checks [`AnimationSlot::is_current`] before writing; starting a
//! new animation invalidates every older token, so at most one animation
//! writes to the surface at a time.

/// Cancellation token handed to the frame steps of one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(u64);

impl Token {
    /// Generation number of this token.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Slot state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotState {
    /// Nothing is animating.
    #[default]
    Idle,
    /// The animation holding this token owns the surface.
    Animating(Token),
}

/// Owner of the single in-flight animation for a surface.
#[derive(Debug, Clone, Default)]
pub struct AnimationSlot {
    state: SlotState,
    generation: u64,
}

impl AnimationSlot {
    /// Creates an idle slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SlotState {
        self.state
    }

    /// True when no animation owns the slot.
    pub fn is_idle(&self) -> bool {
        self.state == SlotState::Idle
    }

    /// Begins a new animation, cancelling whichever one was running.
    pub fn start(&mut self) -> Token {
        self.generation = self.generation.wrapping_add(1);
        let token = Token(self.generation);
        self.state = SlotState::Animating(token);
        token
    }

    /// True if `token` still owns the slot.
    pub fn is_current(&self, token: Token) -> bool {
        self.state == SlotState::Animating(token)
    }

    /// Releases the slot if `token` owns it. Returns whether it did.
    pub fn finish(&mut self, token: Token) -> bool {
        if self.is_current(token) {
            self.state = SlotState::Idle;
            true
        } else {
            false
        }
    }

    /// Cancels the running animation, if any.
    pub fn cancel(&mut self) {
        self.state = SlotState::Idle;
    }
}
