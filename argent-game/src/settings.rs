use std::{
    ops::{Deref, DerefMut},
    sync::Mutex,
};

use enum_map::EnumMap;

use argent_data::{
    AffixPosition, AgentId, AvatarId, EquipmentSlot, ItemRarity, ItemTypeId, LootContextType,
    VendorTypeId,
};

bitflags::bitflags! {
    #[repr(transparent)]
    pub struct LootRollFlags : u32 {
        const NONE       = 0;
        const FIRST_TIME = 1 << 0;
    }
}

/// Mutable context for one roll, shared by every node visited during it.
///
/// Restrictions read the candidate fields and may write the output fields,
/// filter nodes accumulate into the filter fields. Nothing here survives the
/// roll, hosts read what they need from the copy handed to `grant`.
#[derive(Clone, Debug)]
pub struct LootRollSettings {
    pub flags: LootRollFlags,
    pub loot_context: LootContextType,

    pub level: u32,
    pub usable_avatar: Option<AvatarId>,
    pub force_usable: bool,
    pub dropper: Option<AgentId>,
    pub vendor_type: Option<VendorTypeId>,

    pub item_type: Option<ItemTypeId>,
    pub item_parent: Option<ItemTypeId>,
    pub rarity: ItemRarity,
    pub rank: u32,
    pub slot: Option<EquipmentSlot>,
    pub affixes: EnumMap<AffixPosition, bool>,
    pub visual_affix_count: u32,

    pub filter_ranks: u32,
    pub filter_slots: EnumMap<EquipmentSlot, bool>,

    pub output_level: Option<u32>,
    pub output_rank: Option<u32>,
    pub output_rarity: Option<ItemRarity>,
}

impl Default for LootRollSettings {
    fn default() -> Self {
        Self {
            flags: LootRollFlags::NONE,
            loot_context: LootContextType::Drop,
            level: 1,
            usable_avatar: None,
            force_usable: false,
            dropper: None,
            vendor_type: None,
            item_type: None,
            item_parent: None,
            rarity: ItemRarity::Common,
            rank: 0,
            slot: None,
            affixes: EnumMap::default(),
            visual_affix_count: 0,
            filter_ranks: 0,
            filter_slots: EnumMap::default(),
            output_level: None,
            output_rank: None,
            output_rarity: None,
        }
    }
}

impl LootRollSettings {
    pub fn new(loot_context: LootContextType) -> Self {
        Self {
            loot_context,
            ..Default::default()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn copy_from(&mut self, other: &LootRollSettings) {
        self.clone_from(other);
    }
}

/// Recycles settings allocations across rolls. Nested selections acquire
/// their own copy so sibling and parent contexts stay untouched.
#[derive(Default)]
pub struct LootRollSettingsPool {
    pool: Mutex<Vec<Box<LootRollSettings>>>,
}

impl LootRollSettingsPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> PooledLootRollSettings {
        let mut settings = self
            .pool
            .lock()
            .ok()
            .and_then(|mut pool| pool.pop())
            .unwrap_or_default();
        settings.reset();
        PooledLootRollSettings {
            pool: self,
            settings: Some(settings),
        }
    }

    pub fn pooled_count(&self) -> usize {
        self.pool.lock().map(|pool| pool.len()).unwrap_or(0)
    }
}

pub struct PooledLootRollSettings<'a> {
    pool: &'a LootRollSettingsPool,
    settings: Option<Box<LootRollSettings>>,
}

impl Deref for PooledLootRollSettings<'_> {
    type Target = LootRollSettings;

    fn deref(&self) -> &Self::Target {
        self.settings.as_ref().unwrap()
    }
}

impl DerefMut for PooledLootRollSettings<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.settings.as_mut().unwrap()
    }
}

impl Drop for PooledLootRollSettings<'_> {
    fn drop(&mut self) {
        if let (Some(settings), Ok(mut pool)) = (self.settings.take(), self.pool.pool.lock()) {
            pool.push(settings);
        }
    }
}
