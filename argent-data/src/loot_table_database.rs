use serde::{Deserialize, Serialize};
use std::{num::NonZeroU32, str::FromStr};
use thiserror::Error;

use crate::{LootLocationNode, LootNode, LootRestriction};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootTableId(NonZeroU32);
id_wrapper_impl!(LootTableId, NonZeroU32, u32);

#[derive(Debug)]
pub struct LootTableData {
    pub id: LootTableId,
    pub name: String,
    pub root: LootNode,
    pub location: Option<LootLocationNode>,
}

#[derive(Debug, Error)]
pub enum LootTableError {
    #[error("loot table {table} has a conditional restriction with an empty apply-for set")]
    EmptyConditionalContexts { table: String },
    #[error("loot table {table} has a location table with no choices")]
    EmptyLocationChoices { table: String },
    #[error("loot table {table} has a location table with multiple choices and zero total weight")]
    ZeroLocationWeight { table: String },
}

pub struct LootTableDatabase {
    loot_tables: Vec<Option<LootTableData>>,
}

impl LootTableDatabase {
    pub fn new(loot_tables: Vec<Option<LootTableData>>) -> Self {
        Self { loot_tables }
    }

    pub fn get_loot_table(&self, id: LootTableId) -> Option<&LootTableData> {
        self.loot_tables
            .get(id.get() as usize)
            .and_then(|x| x.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LootTableData> {
        self.loot_tables.iter().filter_map(|x| x.as_ref())
    }

    /// Rejects authoring mistakes the rollers would otherwise only warn about.
    pub fn validate(&self) -> Result<(), LootTableError> {
        for table in self.iter() {
            validate_node(table, &table.root)?;
            if let Some(location) = &table.location {
                validate_location(table, location)?;
            }
        }
        Ok(())
    }
}

fn validate_node(table: &LootTableData, node: &LootNode) -> Result<(), LootTableError> {
    match node {
        LootNode::Give(action) | LootNode::GiveFirstTime(action) | LootNode::GiveForAllAvatars(action) => {
            if let Some(target) = &action.target {
                validate_node(table, target)?;
            }
        }
        LootNode::DropCharacterToken(drop) => {
            validate_restrictions(table, &drop.restrictions)?;
            if let Some(fallback) = &drop.fallback {
                validate_node(table, fallback)?;
            }
        }
        other => validate_restrictions(table, other.restrictions())?,
    }
    Ok(())
}

fn validate_restrictions(
    table: &LootTableData,
    restrictions: &[LootRestriction],
) -> Result<(), LootTableError> {
    for restriction in restrictions {
        match restriction {
            LootRestriction::Conditional(conditional) => {
                if conditional.apply_for.is_empty() {
                    return Err(LootTableError::EmptyConditionalContexts {
                        table: table.name.clone(),
                    });
                }
                validate_restrictions(table, &conditional.apply)?;
                validate_restrictions(table, &conditional.otherwise)?;
            }
            LootRestriction::List { children } => validate_restrictions(table, children)?,
            _ => {}
        }
    }
    Ok(())
}

fn validate_location(
    table: &LootTableData,
    location: &LootLocationNode,
) -> Result<(), LootTableError> {
    if let LootLocationNode::Table(data) = location {
        if data.choices.is_empty() {
            return Err(LootTableError::EmptyLocationChoices {
                table: table.name.clone(),
            });
        }
        if data.choices.len() > 1 && data.choices.iter().all(|choice| choice.weight() == 0) {
            return Err(LootTableError::ZeroLocationWeight {
                table: table.name.clone(),
            });
        }
        for choice in &data.choices {
            validate_location(table, choice)?;
        }
    }
    Ok(())
}
