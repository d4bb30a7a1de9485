use crate::constants::FOLLOWER_DELAY_MS;
use glam::Vec2;
use std::time::Duration;

pub const FOLLOWER_DELAY: Duration = Duration::from_millis(FOLLOWER_DELAY_MS);

/// Orders the delayed follower updates.
///
/// Each pointer move issues a sequence number and schedules its own one-shot
/// timer. Timers may fire out of order, so an update is applied only when it
/// is newer than the last one applied.
#[derive(Debug, Default, Clone)]
pub struct TrailSequencer {
    issued: u64,
    applied: u64,
}

impl TrailSequencer {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn accept(&mut self, seq: u64) -> bool {
        if seq > self.applied && seq <= self.issued {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}

/// CSS `left`/`top` values for an element centred by stylesheet transform.
pub fn css_position(pos: Vec2) -> (String, String) {
    (format!("{}px", pos.x), format!("{}px", pos.y))
}
