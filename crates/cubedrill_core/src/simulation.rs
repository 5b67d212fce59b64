//! Cube state with twist animation.

use std::time::Duration;

use cgmath::{Matrix3, Vector3};

use crate::interpolate::{self, InterpolateFn};
use crate::lattice::to_f32;
use crate::{CubieId, CubieSet, Lattice, MoveDescriptor};

const TWIST_INTERPOLATION_FN: InterpolateFn = interpolate::EASE_OUT_CUBIC;

/// Twist being animated.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    token: String,
    descriptor: MoveDescriptor,
    cubies: CubieSet,
    duration: Duration,
    /// Progress of the animation, from 0.0 to 1.0.
    progress: f32,
}
impl TwistAnimation {
    /// Returns the move token being animated.
    pub fn token(&self) -> &str {
        &self.token
    }
    /// Returns the resolved move.
    pub fn descriptor(&self) -> &MoveDescriptor {
        &self.descriptor
    }
    /// Returns the cubies turned by the twist.
    pub fn cubies(&self) -> CubieSet {
        self.cubies
    }
    /// Returns the total duration of the animation.
    pub fn duration(&self) -> Duration {
        self.duration
    }
    /// Returns the linear progress of the animation, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        self.progress
    }
    /// Returns the eased progress of the animation, from 0.0 to 1.0.
    pub fn eased_progress(&self) -> f32 {
        if self.is_complete() {
            1.0
        } else {
            TWIST_INTERPOLATION_FN(self.progress)
        }
    }
    /// Returns the current rotation of the turning cubies.
    pub fn rotation(&self) -> Matrix3<f32> {
        self.descriptor.rotation(self.eased_progress())
    }
    /// Returns whether the animation has reached its end.
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    fn proceed(&mut self, delta: Duration) {
        let twist_delta = delta.as_secs_f32() / self.duration.as_secs_f32();
        // Handle division by zero or other weirdness by completing the twist.
        self.progress = if twist_delta.is_finite() {
            (self.progress + twist_delta).min(1.0)
        } else {
            1.0
        };
    }
}

/// Result of requesting an animated twist.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistRequest {
    /// The twist started animating.
    Started,
    /// The token turns nothing, so no animation was started.
    NoOp,
    /// Another twist is already in flight, so the request was dropped.
    Rejected,
}
impl TwistRequest {
    /// Returns whether a twist started animating.
    pub fn is_started(self) -> bool {
        self == TwistRequest::Started
    }
}

/// Result of advancing the animation.
#[derive(Debug, Clone, PartialEq)]
pub enum TwistProgress {
    /// No twist is in flight.
    Idle,
    /// A twist is in flight, with the given eased progress.
    InProgress(f32),
    /// A twist finished during this step and has been applied to the
    /// lattice.
    Completed(String),
}

/// Snapshot of a twist in flight, for drawing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationFrame {
    /// Cubies that are turning.
    pub cubies: CubieSet,
    /// Current rotation of the turning cubies around the center of the cube.
    pub rotation: Matrix3<f32>,
    /// Eased progress of the twist, from 0.0 to 1.0.
    pub eased_progress: f32,
}

/// Transform of a cubie for drawing, possibly mid-twist.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieTransform {
    /// Identity of the cubie.
    pub id: CubieId,
    /// Position of the cubie's center.
    pub position: Vector3<f32>,
    /// Orientation of the cubie.
    pub orientation: Matrix3<f32>,
}

/// Cube that owns its lattice and animates at most one twist at a time.
///
/// The lattice only changes when a twist completes, so it is always at rest
/// on the lattice points.
#[derive(Debug, Default, Clone)]
pub struct CubeSimulation {
    lattice: Lattice,
    twist_anim: Option<TwistAnimation>,
}
impl CubeSimulation {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the at-rest lattice, which excludes any twist in flight.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }
    /// Returns the twist in flight, if any.
    pub fn current_twist(&self) -> Option<&TwistAnimation> {
        self.twist_anim.as_ref()
    }
    /// Returns whether a twist is in flight.
    pub fn is_animating(&self) -> bool {
        self.twist_anim.is_some()
    }

    /// Starts animating a twist that will take `duration` to complete.
    ///
    /// At most one twist may be in flight; further requests are rejected,
    /// not queued.
    pub fn start_twist(&mut self, token: &str, duration: Duration) -> TwistRequest {
        if let Some(anim) = &self.twist_anim {
            log::debug!(
                "rejecting twist {token:?} while {:?} is in flight",
                anim.token,
            );
            return TwistRequest::Rejected;
        }

        let descriptor = MoveDescriptor::resolve(token);
        let cubies = self.lattice.affected_by(&descriptor);
        if cubies.is_empty() {
            log::trace!("ignoring unrecognized move {token:?}");
            return TwistRequest::NoOp;
        }

        log::trace!("starting twist {token:?} over {duration:?}");
        self.twist_anim = Some(TwistAnimation {
            token: token.to_owned(),
            descriptor,
            cubies,
            duration,
            progress: 0.0,
        });
        TwistRequest::Started
    }

    /// Steps the animation forward by `delta`.
    pub fn step(&mut self, delta: Duration) -> TwistProgress {
        match &mut self.twist_anim {
            None => TwistProgress::Idle,
            Some(anim) => {
                anim.proceed(delta);
                self.finish_if_complete()
            }
        }
    }

    /// Sets the linear progress of the twist in flight directly. `progress`
    /// is clamped to the range 0.0 to 1.0.
    pub fn set_progress(&mut self, progress: f32) -> TwistProgress {
        match &mut self.twist_anim {
            None => TwistProgress::Idle,
            Some(anim) => {
                anim.progress = if progress.is_nan() {
                    1.0
                } else {
                    progress.clamp(0.0, 1.0)
                };
                self.finish_if_complete()
            }
        }
    }

    /// Instantly completes the twist in flight, if any. Returns its token.
    pub fn catch_up(&mut self) -> Option<String> {
        match self.set_progress(1.0) {
            TwistProgress::Completed(token) => Some(token),
            _ => None,
        }
    }

    fn finish_if_complete(&mut self) -> TwistProgress {
        match self.twist_anim.take_if(|anim| anim.is_complete()) {
            Some(anim) => {
                self.lattice.rotate(anim.cubies, anim.descriptor.rotation(1.0));
                log::trace!("completed twist {:?}", anim.token);
                TwistProgress::Completed(anim.token)
            }
            None => match &self.twist_anim {
                Some(anim) => TwistProgress::InProgress(anim.eased_progress()),
                None => TwistProgress::Idle,
            },
        }
    }

    /// Applies a sequence of moves instantly, after completing any twist in
    /// flight.
    pub fn apply_instant<S: AsRef<str>>(&mut self, tokens: impl IntoIterator<Item = S>) {
        self.catch_up();
        self.lattice.apply_all(tokens);
    }

    /// Resets to solved and then applies a sequence of moves instantly. Any
    /// twist in flight is discarded.
    pub fn jump_to<S: AsRef<str>>(&mut self, tokens: impl IntoIterator<Item = S>) {
        self.reset();
        self.lattice.apply_all(tokens);
    }

    /// Resets to solved. Any twist in flight is discarded.
    pub fn reset(&mut self) {
        self.twist_anim = None;
        self.lattice.reset();
    }

    /// Returns the twist in flight for drawing, if any.
    pub fn frame(&self) -> Option<AnimationFrame> {
        let anim = self.twist_anim.as_ref()?;
        Some(AnimationFrame {
            cubies: anim.cubies,
            rotation: anim.rotation(),
            eased_progress: anim.eased_progress(),
        })
    }

    /// Returns the transform of every cubie for drawing, including the
    /// partial rotation of any twist in flight.
    pub fn cubie_transforms(&self) -> Vec<CubieTransform> {
        let frame = self.frame();
        self.lattice
            .cubies()
            .iter()
            .map(|cubie| {
                let position = to_f32(cubie.position);
                let orientation = cubie.orientation.matrix();
                match frame {
                    Some(f) if f.cubies.contains(cubie.id) => CubieTransform {
                        id: cubie.id,
                        position: f.rotation * position,
                        orientation: f.rotation * orientation,
                    },
                    _ => CubieTransform {
                        id: cubie.id,
                        position,
                        orientation,
                    },
                }
            })
            .collect()
    }
}
