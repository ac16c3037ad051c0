use bevy::prelude::*;

use crate::app_state::SceneState;
use crate::config::IDLE_SECONDS;

/// Any user input. Sent by the input layer, resets the idle timer.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UserActivity;

#[derive(Resource, Debug, Clone)]
pub struct IdleTracker {
    pub since_input: f32,
    pub threshold: f32,
}

impl Default for IdleTracker {
    fn default() -> Self {
        Self {
            since_input: 0.0,
            threshold: IDLE_SECONDS,
        }
    }
}

impl IdleTracker {
    /// Advance by `dt`; `true` once the threshold has passed without input.
    pub fn tick(&mut self, dt: f32, active: bool) -> bool {
        if active {
            self.since_input = 0.0;
        } else {
            self.since_input += dt;
        }
        self.since_input >= self.threshold
    }
}

pub fn track_idle(
    time: Res<Time>,
    mut activity: EventReader<UserActivity>,
    mut tracker: ResMut<IdleTracker>,
    mut state: ResMut<SceneState>,
) {
    let active = activity.read().count() > 0 || state.animation_in_flight;
    let idle = tracker.tick(time.delta_secs(), active);
    if idle != state.idle {
        state.set_idle(idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_reaches_threshold_and_resets() {
        let mut tracker = IdleTracker {
            since_input: 0.0,
            threshold: 1.0,
        };
        assert!(!tracker.tick(0.6, false));
        assert!(tracker.tick(0.6, false));
        assert!(!tracker.tick(0.1, true));
        assert_eq!(tracker.since_input, 0.0);
    }
}
