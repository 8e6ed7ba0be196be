use std::collections::HashMap;

use crate::AvatarId;

/// Operator tuning applied on top of authored data without a data rebuild.
#[derive(Clone, Debug)]
pub struct LiveTuning {
    avatar_enabled: HashMap<AvatarId, bool>,
    credits_rate: f32,
    xp_rate: f32,
}

impl Default for LiveTuning {
    fn default() -> Self {
        Self {
            avatar_enabled: HashMap::new(),
            credits_rate: 1.0,
            xp_rate: 1.0,
        }
    }
}

impl LiveTuning {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_avatar_enabled(&mut self, avatar: AvatarId, enabled: bool) {
        self.avatar_enabled.insert(avatar, enabled);
    }

    /// Avatars without an override are enabled.
    pub fn is_avatar_enabled(&self, avatar: AvatarId) -> bool {
        self.avatar_enabled.get(&avatar).copied().unwrap_or(true)
    }

    pub fn set_credits_rate(&mut self, rate: f32) {
        self.credits_rate = rate;
    }

    pub fn credits_rate(&self) -> f32 {
        self.credits_rate
    }

    pub fn set_xp_rate(&mut self, rate: f32) {
        self.xp_rate = rate;
    }

    pub fn xp_rate(&self) -> f32 {
        self.xp_rate
    }
}
