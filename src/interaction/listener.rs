//! Move notifications.
//!
//! Presentation code (animations, move log, network relay) implements
//! `MoveListener`. `on_move_started` fires when a move is accepted and input
//! locks; `on_move_ended` fires after the logical transition was applied.
//! The board must not be touched from inside either callback.

use super::descriptor::MoveDescriptor;

/// Receiver of move start/end notifications.
pub trait MoveListener {
    /// A move was accepted and input is now locked.
    fn on_move_started(&mut self, _descriptor: &MoveDescriptor) {}

    /// The move was applied and input is unlocked again.
    fn on_move_ended(&mut self, _descriptor: &MoveDescriptor) {}
}

impl MoveListener for () {}

/// Listener that records every notification.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    pub started: Vec<MoveDescriptor>,
    pub ended: Vec<MoveDescriptor>,
}

impl MoveListener for RecordingListener {
    fn on_move_started(&mut self, descriptor: &MoveDescriptor) {
        self.started.push(*descriptor);
    }

    fn on_move_ended(&mut self, descriptor: &MoveDescriptor) {
        self.ended.push(*descriptor);
    }
}
