use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LootLocationModifier {
    SearchRadius { min_radius: f32, max_radius: f32 },
    BoundsOverride { radius: f32 },
    Offset { offset: f32 },
    DropInPlace { value: bool },
}

#[derive(Debug)]
pub struct LootLocationNodeData {
    pub weight: u32,
    pub modifiers: Vec<LootLocationModifier>,
}

#[derive(Debug)]
pub struct LootLocationTableData {
    pub weight: u32,
    pub modifiers: Vec<LootLocationModifier>,
    pub choices: Vec<LootLocationNode>,
}

#[derive(Debug)]
pub enum LootLocationNode {
    Node(LootLocationNodeData),
    Table(LootLocationTableData),
}

impl LootLocationNode {
    pub fn weight(&self) -> u32 {
        match self {
            LootLocationNode::Node(data) => data.weight,
            LootLocationNode::Table(data) => data.weight,
        }
    }

    pub fn modifiers(&self) -> &[LootLocationModifier] {
        match self {
            LootLocationNode::Node(data) => &data.modifiers,
            LootLocationNode::Table(data) => &data.modifiers,
        }
    }
}
