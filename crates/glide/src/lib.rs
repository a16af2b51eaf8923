#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for timing math readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]

//! # Glide
//!
//! Timing math for page animations.
//!
//! Glide provides:
//! - **Easing**: the cubic ease-in-out curve (and a linear fallback)
//! - **Tween**: a duration-bounded interpolation driven by frame timestamps
//! - **AnimationSlot**: one active animation per surface, with cancellation tokens
//!
//! Nothing here touches a browser. The `pagefx` crate drives these types from
//! `requestAnimationFrame` callbacks.
//!
//! ## Tween Example
//!
//! ```rust
//! use glide::{Clock, Tween};
//!
//! // Scroll from 0 to 1200 pixels over one second
//! let tween = Tween::new(0.0, 1200.0, 1000.0);
//! let mut clock = Clock::new();
//!
//! // Frame timestamps as reported by the browser
//! let first = tween.sample(clock.elapsed(16_000.0));
//! assert_eq!(first.value, 0.0);
//! assert!(!first.done);
//!
//! let last = tween.sample(clock.elapsed(17_000.0));
//! assert_eq!(last.value, 1200.0);
//! assert!(last.done);
//! ```
//!
//! ## Slot Example
//!
//! ```rust
//! use glide::AnimationSlot;
//!
//! let mut slot = AnimationSlot::new();
//! let first = slot.start();
//! let second = slot.start(); // cancels `first`
//!
//! assert!(!slot.is_current(first));
//! assert!(slot.is_current(second));
//! assert!(slot.finish(second));
//! assert!(slot.is_idle());
//! ```

mod easing;
mod slot;
mod tween;

pub use easing::{Easing, ease_in_out_cubic};
pub use slot::{AnimationSlot, SlotState, Token};
pub use tween::{Clock, Sample, Tween};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::easing::{Easing, ease_in_out_cubic};
    pub use crate::slot::{AnimationSlot, SlotState, Token};
    pub use crate::tween::{Clock, Sample, Tween};
}
