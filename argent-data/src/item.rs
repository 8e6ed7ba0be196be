use enum_map::Enum;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::{num::NonZeroU32, str::FromStr};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemId(NonZeroU32);
id_wrapper_impl!(ItemId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTypeId(NonZeroU32);
id_wrapper_impl!(ItemTypeId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationId(NonZeroU32);
id_wrapper_impl!(MutationId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, FromPrimitive, Serialize, Deserialize)]
pub enum ItemRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Unique,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Enum, FromPrimitive, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Costume,
    Weapon,
    Gadget,
    Emblem,
    Relic,
    Ring,
    Charm,
    Artifact,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Enum, FromPrimitive, Serialize, Deserialize)]
pub enum AffixPosition {
    Prefix1,
    Prefix2,
    Suffix1,
    Suffix2,
    Visual,
    Cosmic,
    Blessing,
}

/// Item ranks are encoded as bit positions in a u32 mask.
pub fn rank_mask_contains(mask: u32, rank: u32) -> bool {
    rank < 32 && (mask & (1 << rank)) != 0
}
