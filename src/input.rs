/// Input events and the per-tick handoff between the event reader and the
/// simulation loop.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeftDown,
    MoveLeftUp,
    MoveRightDown,
    MoveRightUp,
    Fire,
    Restart,
}

/// What the simulation sees at the start of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Fire events received since the previous tick.
    pub fires: u32,
    pub restart: bool,
}

/// Movement flags are last-write-wins and persist across ticks; fire and
/// restart requests queue up until the next `drain`.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    left: bool,
    right: bool,
    fires: u32,
    restart: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeftDown => self.left = true,
            InputEvent::MoveLeftUp => self.left = false,
            InputEvent::MoveRightDown => self.right = true,
            InputEvent::MoveRightUp => self.right = false,
            InputEvent::Fire => self.fires += 1,
            InputEvent::Restart => self.restart = true,
        }
    }

    pub fn drain(&mut self) -> FrameInput {
        let frame = FrameInput {
            left: self.left,
            right: self.right,
            fires: self.fires,
            restart: self.restart,
        };
        self.fires = 0;
        self.restart = false;
        frame
    }
}
