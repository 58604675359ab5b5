//! Confirm/cancel guard for destructive commands

/// Gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Idle,
    Confirming,
}

/// Two-state guard in front of a destructive command.
///
/// `confirm` and `cancel` are no-ops while idle, so a duplicated dismiss
/// event can never fire the command twice.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationGate {
    state: GateState,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_confirming(&self) -> bool {
        self.state == GateState::Confirming
    }

    /// `idle -> confirming`
    pub fn request_confirm(&mut self) -> bool {
        if self.is_confirming() {
            return false;
        }
        self.state = GateState::Confirming;
        true
    }

    /// `confirming -> idle`, nothing else
    pub fn cancel(&mut self) -> bool {
        if !self.is_confirming() {
            return false;
        }
        self.state = GateState::Idle;
        true
    }

    /// `confirming -> idle`, then run `command` exactly once.
    ///
    /// Returns `None` without running `command` when the gate is idle.
    pub fn confirm<F, R>(&mut self, command: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        if !self.is_confirming() {
            return None;
        }
        self.state = GateState::Idle;
        Some(command())
    }
}
