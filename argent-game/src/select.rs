use chrono::NaiveDateTime;
use log::warn;
use rand::RngCore;

use argent_data::{LootActionData, LootNode, LootRestriction, LootTableData};

use crate::{
    cooldown::{cooldown_is_eligible, cooldown_is_eligible_vendor},
    game_data::LootGameData,
    location::{loot_location_roll, LootLocationRecord},
    outcome::LootOutcome,
    resolver::{LootResolver, LootReward},
    restriction::loot_restrictions_permit,
    settings::{LootRollFlags, LootRollSettings, LootRollSettingsPool},
};

/// Everything one roll needs beyond the tree itself. `now` is passed in
/// rather than read from a clock so rolls stay replayable.
pub struct LootRollParameters<'a> {
    pub data: &'a LootGameData,
    pub resolver: &'a mut dyn LootResolver,
    pub settings_pool: &'a LootRollSettingsPool,
    pub rng: &'a mut dyn RngCore,
    pub now: NaiveDateTime,
}

/// Entry point for one roll of a loot table's rule tree.
pub fn loot_table_roll(
    table: &LootTableData,
    params: &mut LootRollParameters,
    settings: &mut LootRollSettings,
) -> LootOutcome {
    loot_node_select(&table.root, params, settings)
}

/// Rolls a table's placement tree into `record`, if it has one.
pub fn loot_table_location_roll(
    table: &LootTableData,
    params: &mut LootRollParameters,
    record: &mut LootLocationRecord,
) {
    if let Some(location) = &table.location {
        loot_location_roll(location, record, params.rng);
    }
}

/// Dispatches one node. Action nodes route the roll onwards, drop nodes
/// test their restrictions and cooldowns and then commit through the
/// resolver. Data problems degrade to `NO_ROLL` with a warning.
pub fn loot_node_select(
    node: &LootNode,
    params: &mut LootRollParameters,
    settings: &mut LootRollSettings,
) -> LootOutcome {
    match node {
        LootNode::Give(action) => select_action_target(action, params, settings),
        LootNode::GiveFirstTime(action) => {
            if settings.flags.contains(LootRollFlags::FIRST_TIME) {
                select_action_target(action, params, settings)
            } else {
                LootOutcome::NO_ROLL
            }
        }
        LootNode::GiveForAllAvatars(action) => select_for_all_avatars(action, params, settings),
        LootNode::DropAgent(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params
                .resolver
                .grant(LootReward::Agent { agent: drop.agent }, settings);
            LootOutcome::SUCCESS
        }
        LootNode::DropCharacterToken(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            if params.resolver.character_token_available(drop.avatar) {
                params.resolver.grant(
                    LootReward::CharacterToken {
                        avatar: drop.avatar,
                    },
                    settings,
                );
                LootOutcome::SUCCESS
            } else if let Some(fallback) = &drop.fallback {
                loot_node_select(fallback, params, settings)
            } else {
                LootOutcome::NO_ROLL
            }
        }
        LootNode::DropClone(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::Clone {
                    source_index: drop.source_index,
                    mutations: drop.mutations.clone(),
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropCredits(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            let curve = match params.data.curves.get_curve(drop.amount_curve) {
                Some(curve) => curve,
                None => {
                    warn!(
                        "credits drop references unknown curve {}",
                        drop.amount_curve.get()
                    );
                    return LootOutcome::NO_ROLL;
                }
            };
            let amount = (curve.value_at(settings.level as i32) as f32
                * params.data.tuning.credits_rate()) as i64;
            params
                .resolver
                .grant(LootReward::Credits { amount }, settings);
            LootOutcome::SUCCESS
        }
        LootNode::DropItem(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::Item {
                    item: drop.item,
                    mutations: drop.mutations.clone(),
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropItemFilter(drop) => {
            // Filters only narrow what later item selection may produce,
            // they never commit a grant or consume the roll.
            if loot_restrictions_permit(&drop.restrictions, &*params.resolver, settings) {
                settings.filter_ranks |= drop.allowed_ranks;
                for slot in &drop.slots {
                    settings.filter_slots[*slot] = true;
                }
            }
            LootOutcome::NO_ROLL
        }
        LootNode::DropPowerPoints(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::PowerPoints {
                    amount: drop.amount,
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropHealthBonus(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::HealthBonus {
                    amount: drop.amount,
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropEnduranceBonus(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::EnduranceBonus {
                    amount: drop.amount,
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropXp(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            let curve = match params.data.curves.get_curve(drop.amount_curve) {
                Some(curve) => curve,
                None => {
                    warn!(
                        "xp drop references unknown curve {}",
                        drop.amount_curve.get()
                    );
                    return LootOutcome::NO_ROLL;
                }
            };
            let amount = ((curve.value_at(settings.level as i32) as f32
                * params.data.tuning.xp_rate()) as i64)
                .max(0) as u64;
            params.resolver.grant(LootReward::Xp { amount }, settings);
            LootOutcome::SUCCESS
        }
        LootNode::DropRealMoney(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::RealMoney {
                    coupon_code: drop.coupon_code.clone(),
                    transaction_context: drop.transaction_context.clone(),
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropBanner(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::Banner {
                    message: drop.message,
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropUsePower(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params
                .resolver
                .grant(LootReward::UsePower { power: drop.power }, settings);
            LootOutcome::SUCCESS
        }
        LootNode::DropVisualEffect(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::VisualEffect {
                    recipient_effect: drop.recipient_effect,
                    dropper_effect: drop.dropper_effect,
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropChatMessage(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::ChatMessage {
                    message: drop.message,
                    scope: drop.scope,
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
        LootNode::DropVanityTitle(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params
                .resolver
                .grant(LootReward::VanityTitle { title: drop.title }, settings);
            LootOutcome::SUCCESS
        }
        LootNode::DropVendorXp(drop) => {
            if !drop_commit_allowed(&drop.restrictions, params, settings) {
                return LootOutcome::NO_ROLL;
            }
            params.resolver.grant(
                LootReward::VendorXp {
                    vendor_type: drop.vendor_type,
                    amount: drop.amount,
                },
                settings,
            );
            LootOutcome::SUCCESS
        }
    }
}

fn select_action_target(
    action: &LootActionData,
    params: &mut LootRollParameters,
    settings: &mut LootRollSettings,
) -> LootOutcome {
    match &action.target {
        Some(target) => loot_node_select(target, params, settings),
        None => LootOutcome::NO_ROLL,
    }
}

/// Runs the target once per eligible avatar with a pooled copy of the
/// caller's settings, so per-avatar mutation never leaks back out.
fn select_for_all_avatars(
    action: &LootActionData,
    params: &mut LootRollParameters,
    settings: &mut LootRollSettings,
) -> LootOutcome {
    let target = match &action.target {
        Some(target) => target,
        None => return LootOutcome::NO_ROLL,
    };

    let data = params.data;
    let mut outcome = LootOutcome::NO_ROLL;
    for avatar_id in data.avatars.iter_ids() {
        let avatar = match data.avatars.get_avatar(avatar_id) {
            Some(avatar) => avatar,
            None => {
                warn!("avatar roster has no definition for id {}", avatar_id.get());
                continue;
            }
        };
        if !avatar.approved || !avatar.show_in_roster {
            continue;
        }
        if !data.tuning.is_avatar_enabled(avatar_id) {
            continue;
        }

        let mut avatar_settings = params.settings_pool.acquire();
        avatar_settings.copy_from(settings);
        avatar_settings.usable_avatar = Some(avatar_id);
        avatar_settings.force_usable = true;
        outcome |= loot_node_select(target, params, &mut avatar_settings);
    }
    outcome
}

/// A drop may commit only when its restrictions pass and neither the
/// dropping entity nor the vendor type is on cooldown.
fn drop_commit_allowed(
    restrictions: &[LootRestriction],
    params: &mut LootRollParameters,
    settings: &mut LootRollSettings,
) -> bool {
    if !loot_restrictions_permit(restrictions, &*params.resolver, settings) {
        return false;
    }
    if let Some(dropper) = settings.dropper {
        if !cooldown_is_eligible(&params.data.cooldowns, &*params.resolver, dropper, params.now) {
            return false;
        }
    }
    if let Some(vendor_type) = settings.vendor_type {
        if !cooldown_is_eligible_vendor(
            &params.data.cooldowns,
            &*params.resolver,
            vendor_type,
            params.now,
        ) {
            return false;
        }
    }
    true
}
