//! Runtime control state written by the external layers
//!
//! Holds the run/pause state machine and the currently selected body.
//! The only transition is the toggle between `Paused` and `Running`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

impl From<bool> for RunState {
    fn from(running: bool) -> Self {
        if running { RunState::Running } else { RunState::Paused }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub state: RunState, // paused or running
    pub selected: usize, // body shown in the diagnostics panel
}
