//! Two-phase cadence
//!
//! timer fires ──► request frame ──► frame callback: step + paint ──► arm timer
//!
//! The automaton advances on the fixed timer period, but the work itself
//! always runs inside a frame callback so painting lines up with the host's
//! repaint. The two primitives are supplied by the host through `Scheduler`.

use super::surface::Surface;
use super::BackgroundCore;

pub trait Scheduler {
    /// One-shot timer; the host calls `BackgroundCore::on_tick` when it fires.
    fn schedule_tick(&mut self, delay_ms: u32);

    /// Run-before-next-repaint; the host calls `BackgroundCore::on_frame`.
    fn request_frame(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    /// Not started.
    Idle,
    /// Timer armed.
    AwaitingTick,
    /// Frame requested.
    AwaitingFrame,
}

pub(super) fn start<S, T>(core: &mut BackgroundCore, surface: &mut S, scheduler: &mut T) -> bool
where
    S: Surface + ?Sized,
    T: Scheduler + ?Sized,
{
    if core.phase != LoopPhase::Idle {
        return false;
    }
    core.run_frame(surface);
    arm_timer(core, scheduler);
    true
}

pub(super) fn on_tick<T: Scheduler + ?Sized>(core: &mut BackgroundCore, scheduler: &mut T) -> bool {
    if core.phase != LoopPhase::AwaitingTick {
        return false;
    }
    core.phase = LoopPhase::AwaitingFrame;
    scheduler.request_frame();
    true
}

pub(super) fn on_frame<S, T>(core: &mut BackgroundCore, surface: &mut S, scheduler: &mut T) -> bool
where
    S: Surface + ?Sized,
    T: Scheduler + ?Sized,
{
    if core.phase != LoopPhase::AwaitingFrame {
        return false;
    }
    core.run_frame(surface);
    arm_timer(core, scheduler);
    true
}

fn arm_timer<T: Scheduler + ?Sized>(core: &mut BackgroundCore, scheduler: &mut T) {
    core.phase = LoopPhase::AwaitingTick;
    scheduler.schedule_tick(core.settings.cadence_ms);
}
