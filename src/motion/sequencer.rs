//! Motion sequencer.
//!
//! One operation per semantic robot action, driven by the command
//! interpreter. Operations are queued; the host's frame callback calls
//! [`MotionSequencer::update`] with the frame delta and receives the
//! outcomes of commands that finished that frame.
//!
//! Each operation builds its target from the *current* pose at activation
//! time (not a snapshot taken at enqueue), so sequential calls compose
//! correctly under variable frame timing. Cancellation is cooperative:
//! [`MotionSequencer::stop`] finalizes everything in flight with the
//! distinguished cancellation signal, and a [`MotionSequencer::reset`] is
//! required before new commands run, so a stale tween can never write state
//! after a user-initiated stop.

use std::collections::VecDeque;

use glam::Vec3;

use crate::errors::{MarionetteError, Result};
use crate::motion::tween::{JumpTween, Tween};
use crate::rig::{JointAngles, JointKey, PresetPose};

/// Distance covered by one walk step, in meters.
pub const STEP_LENGTH_M: f32 = 0.5;

// Base durations in seconds, scaled by the speed factor at activation.
const JOINT_TWEEN_SECS: f32 = 1.0;
const GRIPPER_TWEEN_SECS: f32 = 0.5;
const WALK_STEP_SECS: f32 = 0.3;
const STANCE_RECOVERY_SECS: f32 = 0.2;
const JUMP_SECS: f32 = 0.8;

/// Left or right limb selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySide {
    Left,
    Right,
}

impl BodySide {
    #[must_use]
    pub fn grip_joint(self) -> JointKey {
        match self {
            BodySide::Left => JointKey::LeftGrip,
            BodySide::Right => JointKey::RightGrip,
        }
    }

    /// (shoulder pitch, shoulder yaw, elbow, wrist)
    #[must_use]
    pub fn arm_joints(self) -> [JointKey; 4] {
        match self {
            BodySide::Left => [
                JointKey::LeftShoulderPitch,
                JointKey::LeftShoulderYaw,
                JointKey::LeftElbow,
                JointKey::LeftWrist,
            ],
            BodySide::Right => [
                JointKey::RightShoulderPitch,
                JointKey::RightShoulderYaw,
                JointKey::RightElbow,
                JointKey::RightWrist,
            ],
        }
    }

    /// (hip pitch, hip yaw, knee, ankle)
    #[must_use]
    pub fn leg_joints(self) -> [JointKey; 4] {
        match self {
            BodySide::Left => [
                JointKey::LeftHipPitch,
                JointKey::LeftHipYaw,
                JointKey::LeftKnee,
                JointKey::LeftAnkle,
            ],
            BodySide::Right => [
                JointKey::RightHipPitch,
                JointKey::RightHipYaw,
                JointKey::RightKnee,
                JointKey::RightAnkle,
            ],
        }
    }
}

/// Cardinal walk direction in the rig's ground plane. Forward is −Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl WalkDirection {
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            WalkDirection::Forward => Vec3::NEG_Z,
            WalkDirection::Backward => Vec3::Z,
            WalkDirection::Left => Vec3::NEG_X,
            WalkDirection::Right => Vec3::X,
        }
    }
}

/// The one-foot-forward pose of a walk step, built over the current pose.
#[must_use]
pub fn walk_step_pose(current: &JointAngles, lead: BodySide) -> JointAngles {
    let mut pose = *current;
    let (lead_leg, trail_leg) = match lead {
        BodySide::Left => (BodySide::Left, BodySide::Right),
        BodySide::Right => (BodySide::Right, BodySide::Left),
    };

    let [lead_hip, _, lead_knee, lead_ankle] = lead_leg.leg_joints();
    pose.set(lead_hip, 25.0);
    pose.set(lead_knee, 35.0);
    pose.set(lead_ankle, -10.0);

    let [trail_hip, _, trail_knee, trail_ankle] = trail_leg.leg_joints();
    pose.set(trail_hip, -15.0);
    pose.set(trail_knee, 5.0);
    pose.set(trail_ankle, 5.0);

    // Arm swing.
    let [lead_shoulder, ..] = lead_leg.arm_joints();
    let [trail_shoulder, ..] = trail_leg.arm_joints();
    pose.set(lead_shoulder, -20.0);
    pose.set(trail_shoulder, 20.0);
    pose.left_shoulder_yaw = 10.0;
    pose.right_shoulder_yaw = -10.0;

    pose
}

/// The neutral stance a walk relaxes into after its last step.
#[must_use]
pub fn stance_recovery_pose(current: &JointAngles) -> JointAngles {
    let mut pose = *current;
    for side in [BodySide::Left, BodySide::Right] {
        let [hip, _, knee, ankle] = side.leg_joints();
        pose.set(hip, 0.0);
        pose.set(knee, 0.0);
        pose.set(ankle, 0.0);
        let [shoulder, ..] = side.arm_joints();
        pose.set(shoulder, 0.0);
    }
    pose.left_shoulder_yaw = 10.0;
    pose.right_shoulder_yaw = -10.0;
    pose
}

/// Identifier of an enqueued command, echoed back in its outcome.
pub type CommandId = u64;

/// Outcome of a command that left the queue.
///
/// `result` is `Ok` on normal completion and the cancellation signal when
/// the command was swept out by [`MotionSequencer::stop`]; callers match
/// on [`MarionetteError::is_cancelled`] to tell the two apart from real
/// failures.
#[derive(Debug)]
pub struct CompletedCommand {
    pub id: CommandId,
    pub result: Result<()>,
}

/// Sequencer lifecycle.
///
/// Idle → Running on the first operation, back to Idle when the queue
/// drains. Stopped is reachable from anywhere via [`MotionSequencer::stop`]
/// and is sticky until an explicit [`MotionSequencer::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Running,
    Stopped,
}

/// Snapshot of the sequencer for host UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerStatus {
    pub state: SequencerState,
    pub paused: bool,
    pub queued: usize,
    pub busy: bool,
}

/// Command intent, stored until activation.
#[derive(Debug, Clone)]
enum Command {
    Rotate { joint: JointKey, angle: f32 },
    Gripper { side: BodySide, value: f32 },
    Head { yaw: f32, pitch: f32 },
    Arm { side: BodySide, angles: [f32; 4] },
    Leg { side: BodySide, angles: [f32; 4] },
    Preset(PresetPose),
    ResetPose,
    Wait { seconds: f32 },
    Walk { direction: WalkDirection, distance: f32 },
    Jump { height: f32 },
    ResetPosition,
}

enum WalkPhase {
    /// Pose tween and translation tween run concurrently; both must finish
    /// before the next step begins.
    Step {
        pose: Tween<JointAngles>,
        translate: Tween<Vec3>,
    },
    Recovery(Tween<JointAngles>),
}

struct WalkState {
    dir: Vec3,
    steps_total: u32,
    step_index: u32,
    step_length: f32,
    phase: WalkPhase,
}

enum Active {
    Pose(Tween<JointAngles>),
    Position(Tween<Vec3>),
    Wait { remaining: f32 },
    Jump(JumpTween),
    Walk(WalkState),
}

/// The command queue driving the robot.
///
/// Owns the published joint vector and rig position. All mutation happens
/// inside [`MotionSequencer::update`], called from the host's single
/// animation-frame context; everything else only reads.
pub struct MotionSequencer {
    queue: VecDeque<(CommandId, Command)>,
    active: Option<(CommandId, Active)>,
    pending: Vec<CompletedCommand>,

    state: SequencerState,
    paused: bool,
    speed: f32,
    next_id: CommandId,

    pose: JointAngles,
    position: Vec3,
}

impl Default for MotionSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            active: None,
            pending: Vec::new(),
            state: SequencerState::Idle,
            paused: false,
            speed: 1.0,
            next_id: 0,
            pose: JointAngles::DEFAULT,
            position: Vec3::ZERO,
        }
    }

    // ========================================================================
    // Operations (the interpreter-facing surface)
    // ========================================================================

    /// Tweens a single joint to `angle` (degrees, or [0, 1] for grips).
    pub fn rotate_joint(&mut self, joint: JointKey, angle: f32) -> Result<CommandId> {
        check_joint("rotate_joint", joint, angle)?;
        self.enqueue(Command::Rotate { joint, angle })
    }

    /// Opens/closes one gripper; `value` in [0, 1].
    pub fn set_gripper(&mut self, side: BodySide, value: f32) -> Result<CommandId> {
        check_joint("set_gripper", side.grip_joint(), value)?;
        self.enqueue(Command::Gripper { side, value })
    }

    /// Tweens neck yaw and pitch together (degrees).
    pub fn set_head_pose(&mut self, yaw: f32, pitch: f32) -> Result<CommandId> {
        check_joint("set_head_pose", JointKey::NeckYaw, yaw)?;
        check_joint("set_head_pose", JointKey::NeckPitch, pitch)?;
        self.enqueue(Command::Head { yaw, pitch })
    }

    /// Tweens one arm's four degrees of freedom (degrees):
    /// shoulder pitch, shoulder yaw, elbow, wrist.
    pub fn set_arm_pose(&mut self, side: BodySide, angles: [f32; 4]) -> Result<CommandId> {
        for (joint, angle) in side.arm_joints().into_iter().zip(angles) {
            check_joint("set_arm_pose", joint, angle)?;
        }
        self.enqueue(Command::Arm { side, angles })
    }

    /// Tweens one leg's four degrees of freedom (degrees):
    /// hip pitch, hip yaw, knee, ankle.
    pub fn set_leg_pose(&mut self, side: BodySide, angles: [f32; 4]) -> Result<CommandId> {
        for (joint, angle) in side.leg_joints().into_iter().zip(angles) {
            check_joint("set_leg_pose", joint, angle)?;
        }
        self.enqueue(Command::Leg { side, angles })
    }

    /// Tweens to a named preset pose.
    pub fn apply_preset(&mut self, preset: PresetPose) -> Result<CommandId> {
        self.enqueue(Command::Preset(preset))
    }

    /// Tweens back to the default pose.
    pub fn reset_pose(&mut self) -> Result<CommandId> {
        self.enqueue(Command::ResetPose)
    }

    /// Holds the current pose for `seconds` (scaled by the speed factor).
    pub fn wait(&mut self, seconds: f32) -> Result<CommandId> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(invalid("wait", "seconds", seconds));
        }
        self.enqueue(Command::Wait { seconds })
    }

    /// Walks `distance` meters in a cardinal direction, in alternating
    /// ~0.5 m steps, finishing with a stance recovery.
    pub fn walk(&mut self, direction: WalkDirection, distance: f32) -> Result<CommandId> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(invalid("walk", "distance", distance));
        }
        self.enqueue(Command::Walk {
            direction,
            distance,
        })
    }

    /// Jumps in place to `height` meters at the arc's peak.
    pub fn jump(&mut self, height: f32) -> Result<CommandId> {
        if !height.is_finite() || height <= 0.0 {
            return Err(invalid("jump", "height", height));
        }
        self.enqueue(Command::Jump { height })
    }

    /// Tweens the rig position back to the origin.
    pub fn reset_position(&mut self) -> Result<CommandId> {
        self.enqueue(Command::ResetPosition)
    }

    // ========================================================================
    // Direct state (control panels, saved-program initial pose)
    // ========================================================================

    /// Sets one joint immediately, without a tween. An in-flight command
    /// will overwrite it on its next frame.
    pub fn set_joint_immediate(&mut self, joint: JointKey, value: f32) -> Result<()> {
        check_joint("set_joint_immediate", joint, value)?;
        self.pose.set(joint, value);
        Ok(())
    }

    /// Replaces the whole pose immediately, e.g. from a saved program's
    /// initial pose.
    pub fn set_pose_immediate(&mut self, pose: JointAngles) {
        self.pose = pose;
    }

    pub fn set_position_immediate(&mut self, position: Vec3) {
        self.position = position;
    }

    // ========================================================================
    // Execution control
    // ========================================================================

    /// Uniform speed multiplier applied to every duration at activation:
    /// `effective = base / factor`.
    pub fn set_speed(&mut self, factor: f32) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(invalid("set_speed", "factor", factor));
        }
        self.speed = factor;
        Ok(())
    }

    /// Freezes time. Progress does not advance while paused; resuming
    /// continues from the exact pause instant.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Cancels the in-flight command and everything queued behind it; each
    /// reports the cancellation signal from the next [`Self::update`].
    /// The sequencer stays Stopped until [`Self::reset`].
    pub fn stop(&mut self) {
        self.paused = false;
        self.state = SequencerState::Stopped;
        self.cancel_in_flight();
    }

    /// Clears the stopped state (and anything still in flight), returning
    /// the sequencer to Idle so new commands may run.
    pub fn reset(&mut self) {
        self.cancel_in_flight();
        self.paused = false;
        self.state = SequencerState::Idle;
    }

    fn cancel_in_flight(&mut self) {
        if let Some((id, _)) = self.active.take() {
            self.pending.push(CompletedCommand {
                id,
                result: Err(MarionetteError::Cancelled),
            });
        }
        for (id, _) in self.queue.drain(..) {
            self.pending.push(CompletedCommand {
                id,
                result: Err(MarionetteError::Cancelled),
            });
        }
    }

    // ========================================================================
    // Frame driver
    // ========================================================================

    /// Advances the active command by `dt` seconds and returns the outcomes
    /// of commands that left the queue since the last call.
    pub fn update(&mut self, dt: f32) -> Vec<CompletedCommand> {
        let completed = std::mem::take(&mut self.pending);

        if self.state == SequencerState::Stopped || self.paused {
            return completed;
        }
        let mut completed = completed;

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if self.active.is_none()
            && let Some((id, cmd)) = self.queue.pop_front()
        {
            let active = self.activate(&cmd);
            self.active = Some((id, active));
        }

        if let Some((id, mut active)) = self.active.take() {
            if self.advance_active(&mut active, dt) {
                completed.push(CompletedCommand { id, result: Ok(()) });
            } else {
                self.active = Some((id, active));
            }
        }

        if self.active.is_none() && self.queue.is_empty() {
            self.state = SequencerState::Idle;
        }

        completed
    }

    /// Builds the runtime state of a command from the *current* pose and
    /// position, scaling its base duration by the speed factor.
    fn activate(&self, cmd: &Command) -> Active {
        let speed = self.speed;
        let pose_tween = |target: JointAngles, secs: f32| {
            Active::Pose(Tween::new(self.pose, target, secs / speed))
        };

        match *cmd {
            Command::Rotate { joint, angle } => {
                pose_tween(self.pose.with(joint, angle), JOINT_TWEEN_SECS)
            }
            Command::Gripper { side, value } => {
                pose_tween(self.pose.with(side.grip_joint(), value), GRIPPER_TWEEN_SECS)
            }
            Command::Head { yaw, pitch } => pose_tween(
                self.pose
                    .with(JointKey::NeckYaw, yaw)
                    .with(JointKey::NeckPitch, pitch),
                JOINT_TWEEN_SECS,
            ),
            Command::Arm { side, angles } => {
                let mut target = self.pose;
                for (joint, angle) in side.arm_joints().into_iter().zip(angles) {
                    target.set(joint, angle);
                }
                pose_tween(target, JOINT_TWEEN_SECS)
            }
            Command::Leg { side, angles } => {
                let mut target = self.pose;
                for (joint, angle) in side.leg_joints().into_iter().zip(angles) {
                    target.set(joint, angle);
                }
                pose_tween(target, JOINT_TWEEN_SECS)
            }
            Command::Preset(preset) => pose_tween(preset.angles(), JOINT_TWEEN_SECS),
            Command::ResetPose => pose_tween(JointAngles::DEFAULT, JOINT_TWEEN_SECS),
            Command::Wait { seconds } => Active::Wait {
                remaining: seconds / speed,
            },
            Command::Walk {
                direction,
                distance,
            } => {
                let steps_total = (distance / STEP_LENGTH_M).ceil().max(1.0) as u32;
                let step_length = distance / steps_total as f32;
                let dir = direction.unit();
                Active::Walk(WalkState {
                    dir,
                    steps_total,
                    step_index: 0,
                    step_length,
                    phase: self.walk_step_phase(dir, step_length, 0),
                })
            }
            Command::Jump { height } => {
                Active::Jump(JumpTween::new(self.position, height, JUMP_SECS / speed))
            }
            Command::ResetPosition => Active::Position(Tween::new(
                self.position,
                Vec3::ZERO,
                JOINT_TWEEN_SECS / speed,
            )),
        }
    }

    fn walk_step_phase(&self, dir: Vec3, step_length: f32, step_index: u32) -> WalkPhase {
        let lead = if step_index % 2 == 0 {
            BodySide::Left
        } else {
            BodySide::Right
        };
        let secs = WALK_STEP_SECS / self.speed;
        WalkPhase::Step {
            pose: Tween::new(self.pose, walk_step_pose(&self.pose, lead), secs),
            translate: Tween::new(self.position, self.position + dir * step_length, secs),
        }
    }

    /// Returns whether the command finished this frame.
    fn advance_active(&mut self, active: &mut Active, dt: f32) -> bool {
        match active {
            Active::Pose(tween) => {
                self.pose = tween.advance(dt);
                tween.is_finished()
            }
            Active::Position(tween) => {
                self.position = tween.advance(dt);
                tween.is_finished()
            }
            Active::Wait { remaining } => {
                *remaining -= dt;
                *remaining <= 0.0
            }
            Active::Jump(jump) => {
                self.position = jump.advance(dt);
                jump.is_finished()
            }
            Active::Walk(walk) => match &mut walk.phase {
                WalkPhase::Step { pose, translate } => {
                    self.pose = pose.advance(dt);
                    self.position = translate.advance(dt);

                    if pose.is_finished() && translate.is_finished() {
                        walk.step_index += 1;
                        walk.phase = if walk.step_index < walk.steps_total {
                            self.walk_step_phase(walk.dir, walk.step_length, walk.step_index)
                        } else {
                            WalkPhase::Recovery(Tween::new(
                                self.pose,
                                stance_recovery_pose(&self.pose),
                                STANCE_RECOVERY_SECS / self.speed,
                            ))
                        };
                    }
                    false
                }
                WalkPhase::Recovery(tween) => {
                    self.pose = tween.advance(dt);
                    tween.is_finished()
                }
            },
        }
    }

    // ========================================================================
    // Read-only state
    // ========================================================================

    /// The latest published joint vector.
    #[inline]
    #[must_use]
    pub fn pose(&self) -> JointAngles {
        self.pose
    }

    /// The latest published rig position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn status(&self) -> SequencerStatus {
        SequencerStatus {
            state: self.state,
            paused: self.paused,
            queued: self.queue.len(),
            busy: self.active.is_some(),
        }
    }

    fn enqueue(&mut self, cmd: Command) -> Result<CommandId> {
        if self.state == SequencerState::Stopped {
            return Err(MarionetteError::Stopped);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push_back((id, cmd));
        self.state = SequencerState::Running;
        Ok(id)
    }
}

fn check_joint(op: &str, joint: JointKey, value: f32) -> Result<()> {
    let limit = joint.limit();
    if limit.contains(value) {
        Ok(())
    } else {
        Err(MarionetteError::InvalidCommand(format!(
            "{op}: {joint} = {value} outside [{}, {}]",
            limit.min, limit.max
        )))
    }
}

fn invalid(op: &str, arg: &str, value: f32) -> MarionetteError {
    MarionetteError::InvalidCommand(format!("{op}: {arg} = {value} is not a valid value"))
}
