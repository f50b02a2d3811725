// Step coordinator
//
// Wraps the driver's `step` / `step_frame` so the memory view follows the
// instruction that was just executed. The anchor is taken from the PC read
// *before* the step, not after it.

use super::port::{EmulatorSnapshot, IntrospectionPort, StepDriver};
use super::view_state::ViewState;

/// Which driver action a step control triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Execute one CPU instruction
    Instruction,
    /// Execute until the next frame is complete
    Frame,
}

/// Run one step of the given kind and re-anchor the memory view
///
/// # Returns
///
/// The snapshot taken before the step
pub fn run_step<H>(state: &mut ViewState, host: &mut H, kind: StepKind) -> EmulatorSnapshot
where
    H: IntrospectionPort + StepDriver + ?Sized,
{
    let before = host.snapshot();

    match kind {
        StepKind::Instruction => host.step(),
        StepKind::Frame => host.step_frame(),
    }

    tracing::debug!(?kind, pc = before.pc, "stepped");
    state.track(before.pc);
    before
}

/// Execute one instruction, keeping the executed instruction in view
pub fn do_step<H>(state: &mut ViewState, host: &mut H) -> EmulatorSnapshot
where
    H: IntrospectionPort + StepDriver + ?Sized,
{
    run_step(state, host, StepKind::Instruction)
}

/// Execute one frame, keeping the instruction the frame started at in view
pub fn do_step_frame<H>(state: &mut ViewState, host: &mut H) -> EmulatorSnapshot
where
    H: IntrospectionPort + StepDriver + ?Sized,
{
    run_step(state, host, StepKind::Frame)
}
