use serde::{Deserialize, Serialize};
use std::{num::NonZeroU32, str::FromStr};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarId(NonZeroU32);
id_wrapper_impl!(AvatarId, NonZeroU32, u32);

#[derive(Clone, Debug)]
pub struct AvatarData {
    pub id: AvatarId,
    pub name: String,
    pub approved: bool,
    pub show_in_roster: bool,
}

pub struct AvatarDatabase {
    avatars: Vec<Option<AvatarData>>,
}

impl AvatarDatabase {
    pub fn new(avatars: Vec<Option<AvatarData>>) -> Self {
        Self { avatars }
    }

    pub fn get_avatar(&self, id: AvatarId) -> Option<&AvatarData> {
        self.avatars.get(id.get() as usize).and_then(|x| x.as_ref())
    }

    /// Iterates every allocated id slot, including slots with no definition.
    pub fn iter_ids(&self) -> impl Iterator<Item = AvatarId> {
        (1..self.avatars.len() as u32).filter_map(AvatarId::new)
    }
}
