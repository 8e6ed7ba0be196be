use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::{num::NonZeroU32, str::FromStr};

use crate::{AgentId, VendorTypeId};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownChannelId(NonZeroU32);
id_wrapper_impl!(CooldownChannelId, NonZeroU32, u32);

/// Key under which a host persists grant history for one cooldown record.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownRef(NonZeroU32);
id_wrapper_impl!(CooldownRef, NonZeroU32, u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloverEntry {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CooldownChannel {
    /// One grant per window between scheduled weekly reset points.
    Rollover { entries: Vec<RolloverEntry> },
    /// One grant per fixed interval after the previous grant.
    Duration { minutes: u32 },
    /// Up to `max_drops` grants per window between scheduled weekly reset points.
    CountRollover {
        entries: Vec<RolloverEntry>,
        max_drops: u32,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CooldownRecord {
    Entity {
        entity: AgentId,
        channel: CooldownChannelId,
        cooldown_ref: CooldownRef,
    },
    VendorType {
        vendor_type: VendorTypeId,
        channel: CooldownChannelId,
        cooldown_ref: CooldownRef,
    },
}

impl CooldownRecord {
    pub fn channel(&self) -> CooldownChannelId {
        match self {
            CooldownRecord::Entity { channel, .. } => *channel,
            CooldownRecord::VendorType { channel, .. } => *channel,
        }
    }

    pub fn cooldown_ref(&self) -> CooldownRef {
        match self {
            CooldownRecord::Entity { cooldown_ref, .. } => *cooldown_ref,
            CooldownRecord::VendorType { cooldown_ref, .. } => *cooldown_ref,
        }
    }
}

/// An entity whose cooldown records also gate drops from the listed entities.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CooldownHierarchyEntry {
    pub entity: AgentId,
    pub locked_out: Vec<AgentId>,
}

pub struct CooldownDatabase {
    channels: Vec<Option<CooldownChannel>>,
    records: Vec<CooldownRecord>,
    hierarchy: Vec<CooldownHierarchyEntry>,
}

impl CooldownDatabase {
    pub fn new(
        channels: Vec<Option<CooldownChannel>>,
        records: Vec<CooldownRecord>,
        hierarchy: Vec<CooldownHierarchyEntry>,
    ) -> Self {
        Self {
            channels,
            records,
            hierarchy,
        }
    }

    pub fn get_channel(&self, id: CooldownChannelId) -> Option<&CooldownChannel> {
        self.channels.get(id.get() as usize).and_then(|x| x.as_ref())
    }

    pub fn entity_records(&self, entity: AgentId) -> impl Iterator<Item = &CooldownRecord> {
        self.records.iter().filter(move |record| {
            matches!(record, CooldownRecord::Entity { entity: record_entity, .. } if *record_entity == entity)
        })
    }

    pub fn vendor_records(&self, vendor_type: VendorTypeId) -> impl Iterator<Item = &CooldownRecord> {
        self.records.iter().filter(move |record| {
            matches!(record, CooldownRecord::VendorType { vendor_type: record_vendor, .. } if *record_vendor == vendor_type)
        })
    }

    /// Entities whose own records additionally gate drops from `entity`.
    pub fn lockout_owners(&self, entity: AgentId) -> impl Iterator<Item = AgentId> + '_ {
        self.hierarchy
            .iter()
            .filter(move |entry| entry.locked_out.contains(&entity))
            .map(|entry| entry.entity)
    }
}
