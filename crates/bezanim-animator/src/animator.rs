//! Tick-driven playback along a Bezier curve.
//!
//! A run starts with [`CurveAnimator::play`] and ends either naturally, on the
//! tick where progress reaches `1.0`, or by request, on the first tick after
//! [`CurveAnimator::stop`]. That terminating tick still moves the position;
//! stopping never freezes the point mid-frame.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bezanim_core::traits::Validate;
use bezanim_core::Result;
use bezanim_curve::{Bezier, Curve, CurvePositions};
use bezanim_math::Point3;
use tracing::{debug, trace, warn};

use crate::config::AnimatorConfig;
use crate::ticker::{SubscriptionId, TickHandler, TickSource};

/// Invoked once when a run ends. The argument is `true` if the curve was
/// traversed to the end and `false` if the run was stopped.
pub type CompletionCallback = Box<dyn FnOnce(bool)>;

/// Moves a point along a fixed curve over a fixed duration.
///
/// The animator shares its state with the tick handler it registers, so all
/// methods take `&self`. It is neither `Send` nor `Sync`; drive it from the
/// thread that owns the tick source.
pub struct CurveAnimator {
    playback: Rc<RefCell<Playback>>,
    ticker: Rc<dyn TickSource>,
}

struct Playback {
    curve: Bezier,
    duration: f64,
    t: f64,
    position: Point3,
    subscription: Option<SubscriptionId>,
    stop_requested: bool,
    on_complete: Option<CompletionCallback>,
}

/// A run that ended on the current tick.
struct RunEnd {
    subscription: SubscriptionId,
    on_complete: Option<CompletionCallback>,
    ended_naturally: bool,
}

impl Playback {
    fn advance(&mut self, dt: f64) -> Option<RunEnd> {
        let subscription = self.subscription?;
        // clamp passes NaN through; infinities saturate like any large delta
        if dt.is_nan() {
            warn!("ignoring NaN tick delta");
        } else {
            self.t = (self.t + dt / self.duration).clamp(0.0, 1.0);
        }
        self.position = self.curve.point_at(self.t);
        trace!(t = self.t, position = ?self.position, "animator tick");

        if self.t < 1.0 && !self.stop_requested {
            return None;
        }
        let ended_naturally = !self.stop_requested;
        self.subscription = None;
        self.stop_requested = false;
        Some(RunEnd {
            subscription,
            on_complete: self.on_complete.take(),
            ended_naturally,
        })
    }
}

impl CurveAnimator {
    /// Create an idle animator positioned at `positions.p0`.
    ///
    /// Fails with `InvalidArgument` if `duration` is not a positive finite
    /// number, or if `positions` has `p3` without `p2`.
    pub fn new(
        duration: f64,
        positions: CurvePositions,
        ticker: Rc<dyn TickSource>,
    ) -> Result<Self> {
        Self::from_config(&AnimatorConfig::new(duration, positions), ticker)
    }

    pub fn from_config(config: &AnimatorConfig, ticker: Rc<dyn TickSource>) -> Result<Self> {
        config.validate()?;
        let curve = Bezier::try_from(config.positions)?;
        Ok(Self {
            playback: Rc::new(RefCell::new(Playback {
                curve,
                duration: config.duration,
                t: 0.0,
                position: curve.start(),
                subscription: None,
                stop_requested: false,
                on_complete: None,
            })),
            ticker,
        })
    }

    /// The most recently computed point, or `p0` before the first tick.
    pub fn position(&self) -> Point3 {
        self.playback.borrow().position
    }

    /// Curve parameter of the current or last run, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.playback.borrow().t
    }

    pub fn is_running(&self) -> bool {
        self.playback.borrow().subscription.is_some()
    }

    /// Whether the current run will end on its next tick. Always `false`
    /// while idle.
    pub fn is_stop_requested(&self) -> bool {
        self.playback.borrow().stop_requested
    }

    pub fn duration(&self) -> f64 {
        self.playback.borrow().duration
    }

    pub fn curve(&self) -> Bezier {
        self.playback.borrow().curve
    }

    /// Start a run without a completion callback. Ignored while running.
    pub fn play(&self) {
        self.start(None);
    }

    /// Start a run and call `on_complete` on the tick that ends it.
    ///
    /// Ignored while running: the pending callback is kept and `on_complete`
    /// is dropped without being called.
    pub fn play_with(&self, on_complete: impl FnOnce(bool) + 'static) {
        self.start(Some(Box::new(on_complete)));
    }

    /// Request the current run to end on the next tick.
    ///
    /// Has no effect while idle; the next `play` clears the request.
    pub fn stop(&self) {
        let mut playback = self.playback.borrow_mut();
        if playback.subscription.is_some() {
            playback.stop_requested = true;
            debug!(t = playback.t, "stop requested");
        }
    }

    fn start(&self, on_complete: Option<CompletionCallback>) {
        {
            let mut playback = self.playback.borrow_mut();
            if playback.subscription.is_some() {
                debug!(t = playback.t, "play ignored, animator already running");
                return;
            }
            playback.t = 0.0;
            playback.stop_requested = false;
            playback.on_complete = on_complete;
        }

        let id = self.ticker.subscribe(self.tick_handler());
        self.playback.borrow_mut().subscription = Some(id);
        debug!(duration = self.duration(), "animation started");
    }

    fn tick_handler(&self) -> TickHandler {
        let playback: Weak<RefCell<Playback>> = Rc::downgrade(&self.playback);
        let ticker: Weak<dyn TickSource> = Rc::downgrade(&self.ticker);
        Box::new(move |dt: f64| {
            let Some(playback) = playback.upgrade() else {
                return;
            };
            let run_end = playback.borrow_mut().advance(dt);
            let Some(run_end) = run_end else {
                return;
            };

            // Release the subscription before user code runs
            if let Some(ticker) = ticker.upgrade() {
                ticker.unsubscribe(run_end.subscription);
            }
            debug!(ended_naturally = run_end.ended_naturally, "animation finished");
            if let Some(on_complete) = run_end.on_complete {
                on_complete(run_end.ended_naturally);
            }
        })
    }
}

impl Drop for CurveAnimator {
    fn drop(&mut self) {
        let subscription = self.playback.borrow_mut().subscription.take();
        if let Some(id) = subscription {
            self.ticker.unsubscribe(id);
        }
    }
}

impl std::fmt::Debug for CurveAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let playback = self.playback.borrow();
        f.debug_struct("CurveAnimator")
            .field("curve", &playback.curve)
            .field("duration", &playback.duration)
            .field("t", &playback.t)
            .field("position", &playback.position)
            .field("running", &playback.subscription.is_some())
            .field("stop_requested", &playback.stop_requested)
            .finish()
    }
}
