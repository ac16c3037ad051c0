use bevy::prelude::*;

/// How long a notice stays on screen, in seconds.
pub const NOTICE_SECONDS: f32 = 3.0;

/// Short user-visible notice (e.g. "Nothing to export").
#[derive(Resource, Debug, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = NOTICE_SECONDS;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}
