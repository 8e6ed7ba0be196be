use chrono::{Datelike, Duration, NaiveDateTime};
use log::warn;

use argent_data::{
    AgentId, CooldownChannel, CooldownDatabase, CooldownRecord, RolloverEntry, VendorTypeId,
};

use crate::resolver::LootResolver;

/// Grant history a host persists per cooldown ref.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CooldownStatus {
    pub last_grant_time: NaiveDateTime,
    pub drops_since_reset: u32,
}

/// Earliest scheduled reset strictly after `now`. Scans the coming week, so
/// entries later in the week than any remaining slot wrap to next week.
pub fn next_rollover_time(entries: &[RolloverEntry], now: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut next: Option<NaiveDateTime> = None;
    for day_offset in 0..=7 {
        let date = now.date() + Duration::days(day_offset);
        for entry in entries {
            if date.weekday() != entry.weekday {
                continue;
            }
            let candidate = date.and_time(entry.time);
            if candidate <= now {
                continue;
            }
            if next.map_or(true, |current| candidate < current) {
                next = Some(candidate);
            }
        }
    }
    next
}

/// Latest scheduled reset at or before `now`, the start of the current window.
pub fn previous_rollover_time(
    entries: &[RolloverEntry],
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let mut previous: Option<NaiveDateTime> = None;
    for day_offset in 0..=7 {
        let date = now.date() - Duration::days(day_offset);
        for entry in entries {
            if date.weekday() != entry.weekday {
                continue;
            }
            let candidate = date.and_time(entry.time);
            if candidate > now {
                continue;
            }
            if previous.map_or(true, |current| candidate > current) {
                previous = Some(candidate);
            }
        }
    }
    previous
}

/// Whether a channel permits another grant given the recorded history.
/// Missing history always permits.
pub fn cooldown_channel_allows(
    channel: &CooldownChannel,
    status: Option<&CooldownStatus>,
    now: NaiveDateTime,
) -> bool {
    let status = match status {
        Some(status) => status,
        None => return true,
    };

    match channel {
        CooldownChannel::Rollover { entries } => {
            match previous_rollover_time(entries, now) {
                Some(window_start) => status.last_grant_time < window_start,
                None => {
                    warn!("rollover cooldown channel has no schedule entries");
                    true
                }
            }
        }
        CooldownChannel::Duration { minutes } => {
            now >= status.last_grant_time + Duration::minutes(*minutes as i64)
        }
        CooldownChannel::CountRollover { entries, max_drops } => {
            match previous_rollover_time(entries, now) {
                Some(window_start) => {
                    if status.last_grant_time < window_start {
                        true
                    } else {
                        status.drops_since_reset < *max_drops
                    }
                }
                None => {
                    warn!("count rollover cooldown channel has no schedule entries");
                    true
                }
            }
        }
    }
}

fn record_allows(
    data: &CooldownDatabase,
    resolver: &dyn LootResolver,
    record: &CooldownRecord,
    now: NaiveDateTime,
) -> bool {
    let channel = match data.get_channel(record.channel()) {
        Some(channel) => channel,
        None => {
            warn!(
                "cooldown record references unknown channel {}",
                record.channel().get()
            );
            return true;
        }
    };
    let status = resolver.cooldown_status(record.cooldown_ref());
    cooldown_channel_allows(channel, status.as_ref(), now)
}

fn entity_records_allow(
    data: &CooldownDatabase,
    resolver: &dyn LootResolver,
    entity: AgentId,
    now: NaiveDateTime,
) -> bool {
    data.entity_records(entity)
        .all(|record| record_allows(data, resolver, record, now))
}

/// An entity may drop when its own records and the records of every
/// hierarchy owner that locks it out all permit a grant.
pub fn cooldown_is_eligible(
    data: &CooldownDatabase,
    resolver: &dyn LootResolver,
    entity: AgentId,
    now: NaiveDateTime,
) -> bool {
    if !entity_records_allow(data, resolver, entity, now) {
        return false;
    }
    data.lockout_owners(entity)
        .all(|owner| entity_records_allow(data, resolver, owner, now))
}

pub fn cooldown_is_eligible_vendor(
    data: &CooldownDatabase,
    resolver: &dyn LootResolver,
    vendor_type: VendorTypeId,
    now: NaiveDateTime,
) -> bool {
    data.vendor_records(vendor_type)
        .all(|record| record_allows(data, resolver, record, now))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

    use argent_data::{
        AgentId, AvatarId, CooldownChannel, CooldownChannelId, CooldownDatabase,
        CooldownHierarchyEntry, CooldownRecord, CooldownRef, RolloverEntry, VendorTypeId,
    };

    use super::*;
    use crate::{resolver::LootReward, settings::LootRollSettings};

    fn time_of(weekday_date: u32, hour: u32, minute: u32) -> NaiveDateTime {
        // January 2024 starts on a Monday, so day 1 = Mon, 2 = Tue and so on.
        NaiveDate::from_ymd_opt(2024, 1, weekday_date)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn weekly_entries() -> Vec<RolloverEntry> {
        vec![
            RolloverEntry {
                weekday: Weekday::Mon,
                time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            },
            RolloverEntry {
                weekday: Weekday::Thu,
                time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            },
        ]
    }

    #[test]
    fn next_rollover_picks_earliest_future_entry() {
        let entries = weekly_entries();
        // Tuesday 10:00 rolls forward to Thursday 20:00.
        assert_eq!(
            next_rollover_time(&entries, time_of(2, 10, 0)),
            Some(time_of(4, 20, 0))
        );
    }

    #[test]
    fn next_rollover_wraps_to_next_week() {
        let entries = weekly_entries();
        // Friday 00:00 has passed both entries, so we wrap to Monday 08:00.
        assert_eq!(
            next_rollover_time(&entries, time_of(5, 0, 0)),
            Some(time_of(8, 8, 0))
        );
    }

    #[test]
    fn next_rollover_at_exact_entry_time_moves_on() {
        let entries = weekly_entries();
        assert_eq!(
            next_rollover_time(&entries, time_of(4, 20, 0)),
            Some(time_of(8, 8, 0))
        );
    }

    #[test]
    fn previous_rollover_finds_current_window_start() {
        let entries = weekly_entries();
        assert_eq!(
            previous_rollover_time(&entries, time_of(2, 10, 0)),
            Some(time_of(1, 8, 0))
        );
        assert_eq!(
            previous_rollover_time(&entries, time_of(5, 0, 0)),
            Some(time_of(4, 20, 0))
        );
    }

    #[test]
    fn empty_entries_have_no_rollover() {
        assert_eq!(next_rollover_time(&[], time_of(2, 10, 0)), None);
        assert_eq!(previous_rollover_time(&[], time_of(2, 10, 0)), None);
    }

    #[test]
    fn rollover_channel_allows_once_per_window() {
        let channel = CooldownChannel::Rollover {
            entries: weekly_entries(),
        };
        let status = CooldownStatus {
            last_grant_time: time_of(2, 9, 0),
            drops_since_reset: 1,
        };

        assert!(!cooldown_channel_allows(
            &channel,
            Some(&status),
            time_of(2, 10, 0)
        ));
        // Thursday 20:00 reset makes the Tuesday grant stale.
        assert!(cooldown_channel_allows(
            &channel,
            Some(&status),
            time_of(4, 20, 30)
        ));
        assert!(cooldown_channel_allows(&channel, None, time_of(2, 10, 0)));
    }

    #[test]
    fn duration_channel_allows_after_interval() {
        let channel = CooldownChannel::Duration { minutes: 30 };
        let status = CooldownStatus {
            last_grant_time: time_of(2, 10, 0),
            drops_since_reset: 1,
        };

        assert!(!cooldown_channel_allows(
            &channel,
            Some(&status),
            time_of(2, 10, 29)
        ));
        assert!(cooldown_channel_allows(
            &channel,
            Some(&status),
            time_of(2, 10, 30)
        ));
    }

    #[test]
    fn count_rollover_channel_allows_up_to_max_per_window() {
        let channel = CooldownChannel::CountRollover {
            entries: weekly_entries(),
            max_drops: 2,
        };
        let now = time_of(2, 10, 0);

        let one_drop = CooldownStatus {
            last_grant_time: time_of(2, 9, 0),
            drops_since_reset: 1,
        };
        assert!(cooldown_channel_allows(&channel, Some(&one_drop), now));

        let two_drops = CooldownStatus {
            last_grant_time: time_of(2, 9, 30),
            drops_since_reset: 2,
        };
        assert!(!cooldown_channel_allows(&channel, Some(&two_drops), now));

        // Count from before the window start no longer matters.
        let stale = CooldownStatus {
            last_grant_time: time_of(1, 7, 0),
            drops_since_reset: 99,
        };
        assert!(cooldown_channel_allows(&channel, Some(&stale), now));
    }

    #[test]
    fn empty_schedule_channel_always_allows() {
        let channel = CooldownChannel::Rollover {
            entries: Vec::new(),
        };
        let status = CooldownStatus {
            last_grant_time: time_of(2, 9, 0),
            drops_since_reset: 1,
        };
        assert!(cooldown_channel_allows(
            &channel,
            Some(&status),
            time_of(2, 10, 0)
        ));
    }

    struct HistoryResolver {
        statuses: Vec<(CooldownRef, CooldownStatus)>,
    }

    impl LootResolver for HistoryResolver {
        fn grant(&mut self, _reward: LootReward, _settings: &LootRollSettings) {}

        fn cooldown_status(&self, cooldown_ref: CooldownRef) -> Option<CooldownStatus> {
            self.statuses
                .iter()
                .find(|(status_ref, _)| *status_ref == cooldown_ref)
                .map(|(_, status)| *status)
        }

        fn character_token_available(&self, _avatar: AvatarId) -> bool {
            true
        }

        fn check_distance(&self, _settings: &LootRollSettings) -> bool {
            true
        }
    }

    fn lockout_database() -> CooldownDatabase {
        let channels = vec![None, Some(CooldownChannel::Duration { minutes: 60 })];
        let records = vec![
            CooldownRecord::Entity {
                entity: AgentId::new(1).unwrap(),
                channel: CooldownChannelId::new(1).unwrap(),
                cooldown_ref: CooldownRef::new(1).unwrap(),
            },
            CooldownRecord::Entity {
                entity: AgentId::new(2).unwrap(),
                channel: CooldownChannelId::new(1).unwrap(),
                cooldown_ref: CooldownRef::new(2).unwrap(),
            },
            CooldownRecord::VendorType {
                vendor_type: VendorTypeId::new(1).unwrap(),
                channel: CooldownChannelId::new(1).unwrap(),
                cooldown_ref: CooldownRef::new(3).unwrap(),
            },
        ];
        let hierarchy = vec![CooldownHierarchyEntry {
            entity: AgentId::new(2).unwrap(),
            locked_out: vec![AgentId::new(1).unwrap()],
        }];
        CooldownDatabase::new(channels, records, hierarchy)
    }

    #[test]
    fn entity_with_no_history_is_eligible() {
        let data = lockout_database();
        let resolver = HistoryResolver {
            statuses: Vec::new(),
        };
        assert!(cooldown_is_eligible(
            &data,
            &resolver,
            AgentId::new(1).unwrap(),
            time_of(2, 10, 0)
        ));
    }

    #[test]
    fn entity_blocked_by_own_record() {
        let data = lockout_database();
        let resolver = HistoryResolver {
            statuses: vec![(
                CooldownRef::new(1).unwrap(),
                CooldownStatus {
                    last_grant_time: time_of(2, 9, 30),
                    drops_since_reset: 1,
                },
            )],
        };
        assert!(!cooldown_is_eligible(
            &data,
            &resolver,
            AgentId::new(1).unwrap(),
            time_of(2, 10, 0)
        ));
        assert!(cooldown_is_eligible(
            &data,
            &resolver,
            AgentId::new(1).unwrap(),
            time_of(2, 10, 30)
        ));
    }

    #[test]
    fn entity_blocked_by_hierarchy_owner() {
        let data = lockout_database();
        // Entity 2 recently dropped, which also locks out entity 1.
        let resolver = HistoryResolver {
            statuses: vec![(
                CooldownRef::new(2).unwrap(),
                CooldownStatus {
                    last_grant_time: time_of(2, 9, 30),
                    drops_since_reset: 1,
                },
            )],
        };
        assert!(!cooldown_is_eligible(
            &data,
            &resolver,
            AgentId::new(1).unwrap(),
            time_of(2, 10, 0)
        ));
        assert!(!cooldown_is_eligible(
            &data,
            &resolver,
            AgentId::new(2).unwrap(),
            time_of(2, 10, 0)
        ));
        // Entity 2's lockout does not extend to unrelated entities.
        assert!(cooldown_is_eligible(
            &data,
            &resolver,
            AgentId::new(3).unwrap(),
            time_of(2, 10, 0)
        ));
    }

    #[test]
    fn unknown_channel_reference_is_skipped() {
        let channels = vec![None];
        let records = vec![CooldownRecord::Entity {
            entity: AgentId::new(1).unwrap(),
            channel: CooldownChannelId::new(9).unwrap(),
            cooldown_ref: CooldownRef::new(1).unwrap(),
        }];
        let data = CooldownDatabase::new(channels, records, Vec::new());
        let resolver = HistoryResolver {
            statuses: vec![(
                CooldownRef::new(1).unwrap(),
                CooldownStatus {
                    last_grant_time: time_of(2, 9, 30),
                    drops_since_reset: 1,
                },
            )],
        };
        assert!(cooldown_is_eligible(
            &data,
            &resolver,
            AgentId::new(1).unwrap(),
            time_of(2, 10, 0)
        ));
    }

    #[test]
    fn vendor_records_gate_vendor_drops() {
        let data = lockout_database();
        let resolver = HistoryResolver {
            statuses: vec![(
                CooldownRef::new(3).unwrap(),
                CooldownStatus {
                    last_grant_time: time_of(2, 9, 30),
                    drops_since_reset: 1,
                },
            )],
        };
        assert!(!cooldown_is_eligible_vendor(
            &data,
            &resolver,
            VendorTypeId::new(1).unwrap(),
            time_of(2, 10, 0)
        ));
        assert!(cooldown_is_eligible_vendor(
            &data,
            &resolver,
            VendorTypeId::new(2).unwrap(),
            time_of(2, 10, 0)
        ));
    }
}
