use argent_data::{rank_mask_contains, LootRestriction};

use crate::{resolver::LootResolver, settings::LootRollSettings};

/// A restriction list is a conjunction, one failure rejects the node.
pub fn loot_restrictions_permit(
    restrictions: &[LootRestriction],
    resolver: &dyn LootResolver,
    settings: &mut LootRollSettings,
) -> bool {
    restrictions
        .iter()
        .all(|restriction| loot_restriction_permits(restriction, resolver, settings))
}

pub fn loot_restriction_permits(
    restriction: &LootRestriction,
    resolver: &dyn LootResolver,
    settings: &mut LootRollSettings,
) -> bool {
    match restriction {
        LootRestriction::Conditional(conditional) => {
            let branch = if conditional.apply_for.contains(&settings.loot_context) {
                &conditional.apply
            } else {
                &conditional.otherwise
            };
            loot_restrictions_permit(branch, resolver, settings)
        }
        LootRestriction::Context { allowed } => allowed.contains(&settings.loot_context),
        LootRestriction::ItemType { allowed } => settings
            .item_type
            .map_or(false, |item_type| allowed.contains(&item_type)),
        LootRestriction::ItemParent { allowed } => settings
            .item_parent
            .map_or(false, |item_parent| allowed.contains(&item_parent)),
        LootRestriction::HasAffixInPosition {
            position,
            require_present,
        } => settings.affixes[*position] == *require_present,
        LootRestriction::HasVisualAffix {
            must_have_none,
            must_have_some,
        } => {
            (!*must_have_none || settings.visual_affix_count == 0)
                && (!*must_have_some || settings.visual_affix_count > 0)
        }
        LootRestriction::Level { min, range } => {
            (*min..=min.saturating_add(*range)).contains(&settings.level)
        }
        LootRestriction::OutputLevel {
            value,
            use_as_filter,
        } => {
            if *use_as_filter {
                settings.level == *value
            } else {
                settings.output_level = Some(*value);
                true
            }
        }
        LootRestriction::OutputRank {
            value,
            use_as_filter,
        } => {
            if *use_as_filter {
                settings.rank == *value
            } else {
                settings.output_rank = Some(*value);
                true
            }
        }
        LootRestriction::OutputRarity {
            value,
            use_as_filter,
        } => {
            if *use_as_filter {
                settings.rarity == *value
            } else {
                settings.output_rarity = Some(*value);
                true
            }
        }
        LootRestriction::Rarity { allowed } => allowed.contains(&settings.rarity),
        LootRestriction::Rank { allowed_ranks } => {
            rank_mask_contains(*allowed_ranks, settings.rank)
        }
        LootRestriction::List { children } => {
            loot_restrictions_permit(children, resolver, settings)
        }
        LootRestriction::Slot { allowed } => settings
            .slot
            .map_or(false, |slot| allowed.contains(&slot)),
        LootRestriction::UsableBy { avatars } => {
            settings.force_usable
                || settings
                    .usable_avatar
                    .map_or(false, |avatar| avatars.contains(&avatar))
        }
        LootRestriction::Distance => resolver.check_distance(settings),
    }
}

#[cfg(test)]
mod tests {
    use arrayvec::ArrayVec;

    use argent_data::{
        AffixPosition, AvatarId, ConditionalRestrictionData, CooldownRef, EquipmentSlot,
        ItemRarity, ItemTypeId, LootContextType, LootRestriction,
    };

    use super::*;
    use crate::{cooldown::CooldownStatus, resolver::LootReward};

    struct StubResolver {
        distance_ok: bool,
    }

    impl LootResolver for StubResolver {
        fn grant(&mut self, _reward: LootReward, _settings: &LootRollSettings) {}

        fn cooldown_status(&self, _cooldown_ref: CooldownRef) -> Option<CooldownStatus> {
            None
        }

        fn character_token_available(&self, _avatar: AvatarId) -> bool {
            true
        }

        fn check_distance(&self, _settings: &LootRollSettings) -> bool {
            self.distance_ok
        }
    }

    fn permits(restriction: &LootRestriction, settings: &mut LootRollSettings) -> bool {
        let resolver = StubResolver { distance_ok: true };
        loot_restriction_permits(restriction, &resolver, settings)
    }

    #[test]
    fn level_range_is_inclusive_on_both_ends() {
        let restriction = LootRestriction::Level { min: 10, range: 5 };
        let mut settings = LootRollSettings::default();

        settings.level = 9;
        assert!(!permits(&restriction, &mut settings));
        settings.level = 10;
        assert!(permits(&restriction, &mut settings));
        settings.level = 15;
        assert!(permits(&restriction, &mut settings));
        settings.level = 16;
        assert!(!permits(&restriction, &mut settings));
    }

    #[test]
    fn context_restriction_matches_roll_context() {
        let mut allowed = ArrayVec::new();
        allowed.push(LootContextType::VendorPurchase);
        allowed.push(LootContextType::Crafting);
        let restriction = LootRestriction::Context { allowed };

        let mut settings = LootRollSettings::new(LootContextType::Crafting);
        assert!(permits(&restriction, &mut settings));

        let mut settings = LootRollSettings::new(LootContextType::Drop);
        assert!(!permits(&restriction, &mut settings));
    }

    #[test]
    fn conditional_branches_on_context_membership() {
        let mut apply_for = ArrayVec::new();
        apply_for.push(LootContextType::VendorPurchase);
        let restriction = LootRestriction::Conditional(ConditionalRestrictionData {
            apply_for,
            apply: vec![LootRestriction::Level { min: 50, range: 0 }],
            otherwise: vec![LootRestriction::Level { min: 1, range: 9 }],
        });

        let mut settings = LootRollSettings::new(LootContextType::VendorPurchase);
        settings.level = 50;
        assert!(permits(&restriction, &mut settings));
        settings.level = 5;
        assert!(!permits(&restriction, &mut settings));

        let mut settings = LootRollSettings::new(LootContextType::Drop);
        settings.level = 5;
        assert!(permits(&restriction, &mut settings));
        settings.level = 50;
        assert!(!permits(&restriction, &mut settings));
    }

    #[test]
    fn conditional_empty_branch_permits() {
        let mut apply_for = ArrayVec::new();
        apply_for.push(LootContextType::Drop);
        let restriction = LootRestriction::Conditional(ConditionalRestrictionData {
            apply_for,
            apply: Vec::new(),
            otherwise: vec![LootRestriction::Level { min: 99, range: 0 }],
        });

        let mut settings = LootRollSettings::new(LootContextType::Drop);
        settings.level = 1;
        assert!(permits(&restriction, &mut settings));
    }

    #[test]
    fn item_type_requires_a_candidate_item() {
        let restriction = LootRestriction::ItemType {
            allowed: vec![ItemTypeId::new(7).unwrap()],
        };
        let mut settings = LootRollSettings::default();
        assert!(!permits(&restriction, &mut settings));

        settings.item_type = Some(ItemTypeId::new(7).unwrap());
        assert!(permits(&restriction, &mut settings));

        settings.item_type = Some(ItemTypeId::new(8).unwrap());
        assert!(!permits(&restriction, &mut settings));
    }

    #[test]
    fn affix_presence_must_match_expectation() {
        let present = LootRestriction::HasAffixInPosition {
            position: AffixPosition::Cosmic,
            require_present: true,
        };
        let absent = LootRestriction::HasAffixInPosition {
            position: AffixPosition::Cosmic,
            require_present: false,
        };
        let mut settings = LootRollSettings::default();

        assert!(!permits(&present, &mut settings));
        assert!(permits(&absent, &mut settings));

        settings.affixes[AffixPosition::Cosmic] = true;
        assert!(permits(&present, &mut settings));
        assert!(!permits(&absent, &mut settings));
    }

    #[test]
    fn visual_affix_counts_gate_both_directions() {
        let none = LootRestriction::HasVisualAffix {
            must_have_none: true,
            must_have_some: false,
        };
        let some = LootRestriction::HasVisualAffix {
            must_have_none: false,
            must_have_some: true,
        };
        let mut settings = LootRollSettings::default();

        assert!(permits(&none, &mut settings));
        assert!(!permits(&some, &mut settings));

        settings.visual_affix_count = 2;
        assert!(!permits(&none, &mut settings));
        assert!(permits(&some, &mut settings));
    }

    #[test]
    fn rarity_and_rank_restrictions_match_candidate() {
        let mut allowed = ArrayVec::new();
        allowed.push(ItemRarity::Epic);
        allowed.push(ItemRarity::Legendary);
        let rarity = LootRestriction::Rarity { allowed };
        let rank = LootRestriction::Rank {
            allowed_ranks: (1 << 2) | (1 << 4),
        };

        let mut settings = LootRollSettings::default();
        settings.rarity = ItemRarity::Epic;
        settings.rank = 4;
        assert!(permits(&rarity, &mut settings));
        assert!(permits(&rank, &mut settings));

        settings.rarity = ItemRarity::Common;
        settings.rank = 3;
        assert!(!permits(&rarity, &mut settings));
        assert!(!permits(&rank, &mut settings));
    }

    #[test]
    fn slot_restriction_matches_candidate_slot() {
        let mut allowed = ArrayVec::new();
        allowed.push(EquipmentSlot::Weapon);
        let restriction = LootRestriction::Slot { allowed };

        let mut settings = LootRollSettings::default();
        assert!(!permits(&restriction, &mut settings));
        settings.slot = Some(EquipmentSlot::Weapon);
        assert!(permits(&restriction, &mut settings));
        settings.slot = Some(EquipmentSlot::Ring);
        assert!(!permits(&restriction, &mut settings));
    }

    #[test]
    fn usable_by_honours_force_usable() {
        let restriction = LootRestriction::UsableBy {
            avatars: vec![AvatarId::new(3).unwrap()],
        };
        let mut settings = LootRollSettings::default();

        assert!(!permits(&restriction, &mut settings));

        settings.usable_avatar = Some(AvatarId::new(3).unwrap());
        assert!(permits(&restriction, &mut settings));

        settings.usable_avatar = Some(AvatarId::new(4).unwrap());
        assert!(!permits(&restriction, &mut settings));

        settings.force_usable = true;
        assert!(permits(&restriction, &mut settings));
    }

    #[test]
    fn output_restrictions_write_or_filter() {
        let set_level = LootRestriction::OutputLevel {
            value: 30,
            use_as_filter: false,
        };
        let filter_level = LootRestriction::OutputLevel {
            value: 30,
            use_as_filter: true,
        };

        let mut settings = LootRollSettings::default();
        settings.level = 12;
        assert!(permits(&set_level, &mut settings));
        assert_eq!(settings.output_level, Some(30));

        assert!(!permits(&filter_level, &mut settings));
        settings.level = 30;
        assert!(permits(&filter_level, &mut settings));
    }

    #[test]
    fn output_rarity_writes_or_filters() {
        let set_rarity = LootRestriction::OutputRarity {
            value: ItemRarity::Rare,
            use_as_filter: false,
        };
        let filter_rarity = LootRestriction::OutputRarity {
            value: ItemRarity::Rare,
            use_as_filter: true,
        };

        let mut settings = LootRollSettings::default();
        assert!(permits(&set_rarity, &mut settings));
        assert_eq!(settings.output_rarity, Some(ItemRarity::Rare));

        assert!(!permits(&filter_rarity, &mut settings));
        settings.rarity = ItemRarity::Rare;
        assert!(permits(&filter_rarity, &mut settings));
    }

    #[test]
    fn list_is_a_conjunction() {
        let restriction = LootRestriction::List {
            children: vec![
                LootRestriction::Level { min: 1, range: 20 },
                LootRestriction::Rank { allowed_ranks: 1 << 0 },
            ],
        };
        let mut settings = LootRollSettings::default();
        settings.level = 10;
        settings.rank = 0;
        assert!(permits(&restriction, &mut settings));

        settings.rank = 1;
        assert!(!permits(&restriction, &mut settings));
    }

    #[test]
    fn distance_delegates_to_the_resolver() {
        let restriction = LootRestriction::Distance;
        let mut settings = LootRollSettings::default();

        let near = StubResolver { distance_ok: true };
        assert!(loot_restriction_permits(&restriction, &near, &mut settings));

        let far = StubResolver { distance_ok: false };
        assert!(!loot_restriction_permits(&restriction, &far, &mut settings));
    }
}
