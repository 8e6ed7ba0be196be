use arrayvec::ArrayVec;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::{AffixPosition, AvatarId, EquipmentSlot, ItemRarity, ItemTypeId};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, FromPrimitive, Serialize, Deserialize)]
pub enum LootContextType {
    Drop,
    VendorPurchase,
    MissionReward,
    Crafting,
    Gift,
}

#[derive(Debug)]
pub struct ConditionalRestrictionData {
    pub apply_for: ArrayVec<LootContextType, 8>,
    pub apply: Vec<LootRestriction>,
    pub otherwise: Vec<LootRestriction>,
}

#[derive(Debug)]
pub enum LootRestriction {
    /// Branches on roll context, then evaluates one of the two child lists.
    Conditional(ConditionalRestrictionData),
    Context {
        allowed: ArrayVec<LootContextType, 8>,
    },
    ItemType {
        allowed: Vec<ItemTypeId>,
    },
    ItemParent {
        allowed: Vec<ItemTypeId>,
    },
    HasAffixInPosition {
        position: AffixPosition,
        require_present: bool,
    },
    HasVisualAffix {
        must_have_none: bool,
        must_have_some: bool,
    },
    /// Permits levels in `min ..= min + range`.
    Level {
        min: u32,
        range: u32,
    },
    OutputLevel {
        value: u32,
        use_as_filter: bool,
    },
    OutputRank {
        value: u32,
        use_as_filter: bool,
    },
    OutputRarity {
        value: ItemRarity,
        use_as_filter: bool,
    },
    Rarity {
        allowed: ArrayVec<ItemRarity, 6>,
    },
    Rank {
        allowed_ranks: u32,
    },
    List {
        children: Vec<LootRestriction>,
    },
    Slot {
        allowed: ArrayVec<EquipmentSlot, 8>,
    },
    UsableBy {
        avatars: Vec<AvatarId>,
    },
    /// Delegates to the host, which knows where the participants are.
    Distance,
}
