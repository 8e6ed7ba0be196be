use chrono::Weekday;
use num_traits::FromPrimitive;

use crate::{AffixPosition, ChatMessageScope, EquipmentSlot, ItemRarity, LootContextType};

pub fn decode_item_rarity(value: usize) -> Option<ItemRarity> {
    FromPrimitive::from_usize(value)
}

pub fn decode_equipment_slot(value: usize) -> Option<EquipmentSlot> {
    FromPrimitive::from_usize(value)
}

pub fn decode_affix_position(value: usize) -> Option<AffixPosition> {
    FromPrimitive::from_usize(value)
}

pub fn decode_loot_context_type(value: usize) -> Option<LootContextType> {
    FromPrimitive::from_usize(value)
}

pub fn decode_chat_message_scope(value: usize) -> Option<ChatMessageScope> {
    FromPrimitive::from_usize(value)
}

/// Authored weekdays count from 0 = Sunday.
pub fn decode_weekday(value: usize) -> Option<Weekday> {
    match value {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_out_of_range_values() {
        assert_eq!(decode_item_rarity(5), Some(ItemRarity::Unique));
        assert_eq!(decode_item_rarity(6), None);
        assert_eq!(decode_equipment_slot(7), Some(EquipmentSlot::Artifact));
        assert_eq!(decode_equipment_slot(8), None);
        assert_eq!(decode_affix_position(6), Some(AffixPosition::Blessing));
        assert_eq!(decode_affix_position(7), None);
        assert_eq!(decode_loot_context_type(4), Some(LootContextType::Gift));
        assert_eq!(decode_loot_context_type(5), None);
        assert_eq!(decode_chat_message_scope(2), Some(ChatMessageScope::Region));
        assert_eq!(decode_chat_message_scope(3), None);
    }

    #[test]
    fn decode_weekday_counts_from_sunday() {
        assert_eq!(decode_weekday(0), Some(Weekday::Sun));
        assert_eq!(decode_weekday(4), Some(Weekday::Thu));
        assert_eq!(decode_weekday(6), Some(Weekday::Sat));
        assert_eq!(decode_weekday(7), None);
    }
}
