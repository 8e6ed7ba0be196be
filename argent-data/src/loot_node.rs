use arrayvec::ArrayVec;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::{num::NonZeroU32, str::FromStr};

use crate::{AvatarId, CurveId, EquipmentSlot, ItemId, LootRestriction, MutationId};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentId(NonZeroU32);
id_wrapper_impl!(AgentId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerId(NonZeroU32);
id_wrapper_impl!(PowerId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectId(NonZeroU32);
id_wrapper_impl!(EffectId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerMessageId(NonZeroU32);
id_wrapper_impl!(BannerMessageId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageId(NonZeroU32);
id_wrapper_impl!(ChatMessageId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct VanityTitleId(NonZeroU32);
id_wrapper_impl!(VanityTitleId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorTypeId(NonZeroU32);
id_wrapper_impl!(VendorTypeId, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, FromPrimitive, Serialize, Deserialize)]
pub enum ChatMessageScope {
    Recipient,
    Party,
    Region,
}

#[derive(Debug)]
pub struct LootActionData {
    pub target: Option<Box<LootNode>>,
}

#[derive(Debug)]
pub struct DropAgentData {
    pub agent: AgentId,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropCharacterTokenData {
    pub avatar: AvatarId,
    pub fallback: Option<Box<LootNode>>,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropCloneData {
    pub source_index: i32,
    pub mutations: Vec<MutationId>,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropCreditsData {
    pub amount_curve: CurveId,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropItemData {
    pub item: ItemId,
    pub mutations: Vec<MutationId>,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropItemFilterData {
    pub allowed_ranks: u32,
    pub slots: ArrayVec<EquipmentSlot, 8>,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropPowerPointsData {
    pub amount: u32,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropHealthBonusData {
    pub amount: u32,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropEnduranceBonusData {
    pub amount: u32,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropXpData {
    pub amount_curve: CurveId,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropRealMoneyData {
    pub coupon_code: String,
    pub transaction_context: String,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropBannerData {
    pub message: BannerMessageId,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropUsePowerData {
    pub power: PowerId,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropVisualEffectData {
    pub recipient_effect: Option<EffectId>,
    pub dropper_effect: Option<EffectId>,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropChatMessageData {
    pub message: ChatMessageId,
    pub scope: ChatMessageScope,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropVanityTitleData {
    pub title: VanityTitleId,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub struct DropVendorXpData {
    pub vendor_type: VendorTypeId,
    pub amount: u32,
    pub restrictions: Vec<LootRestriction>,
}

#[derive(Debug)]
pub enum LootNode {
    Give(LootActionData),
    GiveFirstTime(LootActionData),
    GiveForAllAvatars(LootActionData),
    DropAgent(DropAgentData),
    DropCharacterToken(DropCharacterTokenData),
    DropClone(DropCloneData),
    DropCredits(DropCreditsData),
    DropItem(DropItemData),
    DropItemFilter(DropItemFilterData),
    DropPowerPoints(DropPowerPointsData),
    DropHealthBonus(DropHealthBonusData),
    DropEnduranceBonus(DropEnduranceBonusData),
    DropXp(DropXpData),
    DropRealMoney(DropRealMoneyData),
    DropBanner(DropBannerData),
    DropUsePower(DropUsePowerData),
    DropVisualEffect(DropVisualEffectData),
    DropChatMessage(DropChatMessageData),
    DropVanityTitle(DropVanityTitleData),
    DropVendorXp(DropVendorXpData),
}

impl LootNode {
    /// Action nodes carry no restrictions of their own.
    pub fn restrictions(&self) -> &[LootRestriction] {
        match self {
            LootNode::Give(_) | LootNode::GiveFirstTime(_) | LootNode::GiveForAllAvatars(_) => &[],
            LootNode::DropAgent(drop) => &drop.restrictions,
            LootNode::DropCharacterToken(drop) => &drop.restrictions,
            LootNode::DropClone(drop) => &drop.restrictions,
            LootNode::DropCredits(drop) => &drop.restrictions,
            LootNode::DropItem(drop) => &drop.restrictions,
            LootNode::DropItemFilter(drop) => &drop.restrictions,
            LootNode::DropPowerPoints(drop) => &drop.restrictions,
            LootNode::DropHealthBonus(drop) => &drop.restrictions,
            LootNode::DropEnduranceBonus(drop) => &drop.restrictions,
            LootNode::DropXp(drop) => &drop.restrictions,
            LootNode::DropRealMoney(drop) => &drop.restrictions,
            LootNode::DropBanner(drop) => &drop.restrictions,
            LootNode::DropUsePower(drop) => &drop.restrictions,
            LootNode::DropVisualEffect(drop) => &drop.restrictions,
            LootNode::DropChatMessage(drop) => &drop.restrictions,
            LootNode::DropVanityTitle(drop) => &drop.restrictions,
            LootNode::DropVendorXp(drop) => &drop.restrictions,
        }
    }
}
