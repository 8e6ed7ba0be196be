use bevy_math::Vec3;
use log::warn;
use rand::RngCore;

use argent_data::{LootLocationModifier, LootLocationNode};

use crate::picker::WeightedPicker;

/// Accumulated placement for one drop. Modifiers overwrite fields as the
/// location tree is walked, later writes win.
#[derive(Clone, Debug, PartialEq)]
pub struct LootLocationRecord {
    pub position: Vec3,
    pub source_position: Option<Vec3>,
    pub offset: Vec3,
    pub min_radius: f32,
    pub max_radius: f32,
    pub bounds_radius: f32,
    pub drop_in_place: bool,
}

impl LootLocationRecord {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            source_position: None,
            offset: Vec3::ZERO,
            min_radius: 0.0,
            max_radius: 0.0,
            bounds_radius: 0.0,
            drop_in_place: false,
        }
    }

    pub fn with_source(position: Vec3, source_position: Vec3) -> Self {
        Self {
            source_position: Some(source_position),
            ..Self::new(position)
        }
    }
}

pub fn apply_location_modifier(modifier: &LootLocationModifier, record: &mut LootLocationRecord) {
    match modifier {
        LootLocationModifier::SearchRadius {
            min_radius,
            max_radius,
        } => {
            record.min_radius = *min_radius;
            record.max_radius = *max_radius;
        }
        LootLocationModifier::BoundsOverride { radius } => {
            record.bounds_radius = *radius;
        }
        LootLocationModifier::Offset { offset } => {
            // Pushes the drop away from the source along the ground plane.
            // Without a world-placed source there is nothing to push from.
            if let Some(source_position) = record.source_position {
                let mut direction = record.position - source_position;
                direction.z = 0.0;
                record.offset = if direction.length_squared() <= f32::EPSILON {
                    Vec3::ZERO
                } else {
                    direction.normalize() * *offset
                };
            }
        }
        LootLocationModifier::DropInPlace { value } => {
            record.drop_in_place = *value;
        }
    }
}

/// Applies a node's modifiers, then for tables recurses into one weighted
/// choice. A single choice is taken directly without consuming randomness.
pub fn loot_location_roll(
    node: &LootLocationNode,
    record: &mut LootLocationRecord,
    rng: &mut dyn RngCore,
) {
    for modifier in node.modifiers() {
        apply_location_modifier(modifier, record);
    }

    if let LootLocationNode::Table(data) = node {
        match data.choices.len() {
            0 => warn!("loot location table has no choices"),
            1 => loot_location_roll(&data.choices[0], record, rng),
            _ => {
                let mut picker = WeightedPicker::new();
                for choice in &data.choices {
                    picker.add(choice, choice.weight());
                }
                match picker.pick(rng) {
                    Some(choice) => loot_location_roll(choice, record, rng),
                    None => warn!("loot location table has zero total weight"),
                }
            }
        }
    }
}
