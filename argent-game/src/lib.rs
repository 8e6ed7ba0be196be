mod cooldown;
mod game_data;
mod location;
mod outcome;
mod picker;
mod resolver;
mod restriction;
mod select;
mod settings;
mod visitor;

pub use cooldown::{
    cooldown_channel_allows, cooldown_is_eligible, cooldown_is_eligible_vendor,
    next_rollover_time, previous_rollover_time, CooldownStatus,
};
pub use game_data::LootGameData;
pub use location::{apply_location_modifier, loot_location_roll, LootLocationRecord};
pub use outcome::LootOutcome;
pub use picker::WeightedPicker;
pub use resolver::{LootResolver, LootReward};
pub use restriction::{loot_restriction_permits, loot_restrictions_permit};
pub use select::{
    loot_node_select, loot_table_location_roll, loot_table_roll, LootRollParameters,
};
pub use settings::{
    LootRollFlags, LootRollSettings, LootRollSettingsPool, PooledLootRollSettings,
};
pub use visitor::{
    loot_location_visit, loot_node_visit, loot_restriction_visit, LocationWeightAudit,
    LootVisitor, RestrictionCounter,
};
