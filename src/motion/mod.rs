//! Motion engine.
//!
//! - [`tween`]: frame-driven eased interpolation primitives
//! - [`sequencer`]: the command queue that composes tweens into semantic
//!   robot actions (walk, jump, pose, wait) with cooperative cancellation

pub mod sequencer;
pub mod tween;

pub use sequencer::{
    BodySide, CommandId, CompletedCommand, MotionSequencer, SequencerState, SequencerStatus,
    WalkDirection,
};
pub use tween::{Interpolatable, JumpTween, Tween, ease_in_out_quad};
