bitflags::bitflags! {
    /// Folded across sibling and nested selections with bitwise or.
    #[repr(transparent)]
    pub struct LootOutcome : u32 {
        const NO_ROLL = 0;
        const SUCCESS = 1 << 0;
    }
}

impl LootOutcome {
    /// True when no node in the selection committed a grant.
    pub fn is_no_roll(self) -> bool {
        self.is_empty()
    }

    pub fn is_success(self) -> bool {
        self.contains(LootOutcome::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::LootOutcome;

    #[test]
    fn no_roll_is_the_fold_identity() {
        let mut outcome = LootOutcome::NO_ROLL;
        assert!(outcome.is_no_roll());
        assert!(!outcome.is_success());

        outcome |= LootOutcome::NO_ROLL;
        assert!(outcome.is_no_roll());

        outcome |= LootOutcome::SUCCESS;
        assert!(outcome.is_success());
        assert!(!outcome.is_no_roll());

        outcome |= LootOutcome::NO_ROLL;
        assert!(outcome.is_success());
    }
}
