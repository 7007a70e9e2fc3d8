//! bezanim animation driver.
//!
//! A [`CurveAnimator`] moves a point along a [`Bezier`](bezanim_curve::Bezier)
//! curve over a fixed duration. It does no scheduling of its own: the host
//! supplies a [`TickSource`] and the animator subscribes to it for the length
//! of each run.

pub mod animator;
pub mod config;
pub mod ticker;

pub use animator::{CompletionCallback, CurveAnimator};
pub use config::AnimatorConfig;
pub use ticker::{ManualTicker, SubscriptionId, TickHandler, TickSource};
