macro_rules! id_wrapper_impl {
    ($name:ident, $inner_type:ty, $value_type:ty) => {
        impl $name {
            #[allow(dead_code)]
            pub fn new(value: $value_type) -> Option<Self> {
                <$inner_type>::new(value).map($name)
            }

            #[allow(dead_code)]
            pub fn get(&self) -> $value_type {
                self.0.get()
            }
        }

        #[allow(dead_code)]
        impl FromStr for $name {
            type Err = <$inner_type as std::str::FromStr>::Err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name(s.parse::<$inner_type>()?))
            }
        }
    };
}

mod avatar_database;
mod cooldown_database;
mod curve_database;
mod data_decoder;
mod item;
mod live_tuning;
mod loot_location;
mod loot_node;
mod loot_restriction;
mod loot_table_database;

pub use avatar_database::{AvatarData, AvatarDatabase, AvatarId};
pub use cooldown_database::{
    CooldownChannel, CooldownChannelId, CooldownDatabase, CooldownHierarchyEntry, CooldownRecord,
    CooldownRef, RolloverEntry,
};
pub use curve_database::{Curve, CurveDatabase, CurveId};
pub use data_decoder::{
    decode_affix_position, decode_chat_message_scope, decode_equipment_slot, decode_item_rarity,
    decode_loot_context_type, decode_weekday,
};
pub use item::{
    rank_mask_contains, AffixPosition, EquipmentSlot, ItemId, ItemRarity, ItemTypeId, MutationId,
};
pub use live_tuning::LiveTuning;
pub use loot_location::{
    LootLocationModifier, LootLocationNode, LootLocationNodeData, LootLocationTableData,
};
pub use loot_node::{
    AgentId, BannerMessageId, ChatMessageId, ChatMessageScope, DropAgentData, DropBannerData,
    DropCharacterTokenData, DropChatMessageData, DropCloneData, DropCreditsData,
    DropEnduranceBonusData, DropHealthBonusData, DropItemData, DropItemFilterData,
    DropPowerPointsData, DropRealMoneyData, DropUsePowerData, DropVanityTitleData, DropVendorXpData,
    DropVisualEffectData, DropXpData, EffectId, LootActionData, LootNode, PowerId, VanityTitleId,
    VendorTypeId,
};
pub use loot_restriction::{ConditionalRestrictionData, LootContextType, LootRestriction};
pub use loot_table_database::{LootTableData, LootTableDatabase, LootTableError, LootTableId};
