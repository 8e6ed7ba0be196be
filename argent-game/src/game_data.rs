use std::sync::Arc;

use argent_data::{AvatarDatabase, CooldownDatabase, CurveDatabase, LiveTuning, LootTableDatabase};

/// Shared, read-only data every roll runs against.
pub struct LootGameData {
    pub avatars: Arc<AvatarDatabase>,
    pub cooldowns: Arc<CooldownDatabase>,
    pub curves: Arc<CurveDatabase>,
    pub loot_tables: Arc<LootTableDatabase>,
    pub tuning: Arc<LiveTuning>,
}
