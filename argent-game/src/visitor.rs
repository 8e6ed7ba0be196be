use argent_data::{LootLocationNode, LootNode, LootRestriction};

/// Read-only traversal over authored trees, used by tooling that wants to
/// audit or index rules without rolling them.
pub trait LootVisitor {
    fn visit_node(&mut self, _node: &LootNode) {}
    fn visit_restriction(&mut self, _restriction: &LootRestriction) {}
    fn visit_location(&mut self, _location: &LootLocationNode) {}
}

pub fn loot_node_visit<V: LootVisitor>(node: &LootNode, visitor: &mut V) {
    visitor.visit_node(node);
    match node {
        LootNode::Give(action)
        | LootNode::GiveFirstTime(action)
        | LootNode::GiveForAllAvatars(action) => {
            if let Some(target) = &action.target {
                loot_node_visit(target, visitor);
            }
        }
        LootNode::DropCharacterToken(drop) => {
            visit_restrictions(&drop.restrictions, visitor);
            if let Some(fallback) = &drop.fallback {
                loot_node_visit(fallback, visitor);
            }
        }
        other => visit_restrictions(other.restrictions(), visitor),
    }
}

pub fn loot_restriction_visit<V: LootVisitor>(restriction: &LootRestriction, visitor: &mut V) {
    visitor.visit_restriction(restriction);
    match restriction {
        LootRestriction::Conditional(conditional) => {
            visit_restrictions(&conditional.apply, visitor);
            visit_restrictions(&conditional.otherwise, visitor);
        }
        LootRestriction::List { children } => visit_restrictions(children, visitor),
        _ => {}
    }
}

pub fn loot_location_visit<V: LootVisitor>(location: &LootLocationNode, visitor: &mut V) {
    visitor.visit_location(location);
    if let LootLocationNode::Table(table) = location {
        for choice in &table.choices {
            loot_location_visit(choice, visitor);
        }
    }
}

fn visit_restrictions<V: LootVisitor>(restrictions: &[LootRestriction], visitor: &mut V) {
    for restriction in restrictions {
        loot_restriction_visit(restriction, visitor);
    }
}

/// Counts every node and restriction reachable from a tree root.
#[derive(Default)]
pub struct RestrictionCounter {
    pub nodes: usize,
    pub restrictions: usize,
}

impl LootVisitor for RestrictionCounter {
    fn visit_node(&mut self, _node: &LootNode) {
        self.nodes += 1;
    }

    fn visit_restriction(&mut self, _restriction: &LootRestriction) {
        self.restrictions += 1;
    }
}

/// Flags location subtrees whose weights cannot produce a pick.
#[derive(Default)]
pub struct LocationWeightAudit {
    pub total_weight: u64,
    pub zero_weight_nodes: usize,
}

impl LootVisitor for LocationWeightAudit {
    fn visit_location(&mut self, location: &LootLocationNode) {
        let weight = location.weight();
        if weight == 0 {
            self.zero_weight_nodes += 1;
        }
        self.total_weight += u64::from(weight);
    }
}
