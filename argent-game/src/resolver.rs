use argent_data::{
    AgentId, AvatarId, BannerMessageId, ChatMessageId, ChatMessageScope, CooldownRef, EffectId,
    ItemId, MutationId, PowerId, VanityTitleId, VendorTypeId,
};

use crate::{cooldown::CooldownStatus, settings::LootRollSettings};

/// One committed grant, described in data terms. The host decides what
/// spawning an agent or paying out credits actually means.
#[derive(Clone, Debug, PartialEq)]
pub enum LootReward {
    Agent {
        agent: AgentId,
    },
    CharacterToken {
        avatar: AvatarId,
    },
    Clone {
        source_index: i32,
        mutations: Vec<MutationId>,
    },
    Credits {
        amount: i64,
    },
    Item {
        item: ItemId,
        mutations: Vec<MutationId>,
    },
    PowerPoints {
        amount: u32,
    },
    HealthBonus {
        amount: u32,
    },
    EnduranceBonus {
        amount: u32,
    },
    Xp {
        amount: u64,
    },
    RealMoney {
        coupon_code: String,
        transaction_context: String,
    },
    Banner {
        message: BannerMessageId,
    },
    UsePower {
        power: PowerId,
    },
    VisualEffect {
        recipient_effect: Option<EffectId>,
        dropper_effect: Option<EffectId>,
    },
    ChatMessage {
        message: ChatMessageId,
        scope: ChatMessageScope,
    },
    VanityTitle {
        title: VanityTitleId,
    },
    VendorXp {
        vendor_type: VendorTypeId,
        amount: u32,
    },
}

/// Host side of a roll. The rollers stay pure over data and randomness,
/// everything that touches world or account state goes through here.
pub trait LootResolver {
    /// Commit one reward. Settings carry the context the node was rolled in.
    fn grant(&mut self, reward: LootReward, settings: &LootRollSettings);

    /// Grant history for a cooldown record, `None` when nothing was granted yet.
    fn cooldown_status(&self, cooldown_ref: CooldownRef) -> Option<CooldownStatus>;

    /// Whether the recipient can still receive this avatar's character token.
    fn character_token_available(&self, avatar: AvatarId) -> bool;

    /// Hook for the distance restriction, which needs world positions.
    fn check_distance(&self, settings: &LootRollSettings) -> bool;
}
