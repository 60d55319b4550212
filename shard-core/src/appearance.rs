//! Character outfit colours and look type.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::vocation::GroupId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub look_body: u16,
    pub look_feet: u16,
    pub look_head: u16,
    pub look_legs: u16,
    pub look_type: u16,
}

impl Appearance {
    /// Default outfit for a freshly created character of `group`
    pub fn for_group(group: GroupId) -> Self {
        Self {
            look_body: LOOK_BODY,
            look_feet: LOOK_FEET,
            look_head: LOOK_HEAD,
            look_legs: LOOK_LEGS,
            look_type: match group {
                GroupId::God => LOOK_TYPE_GOD,
                GroupId::Player => LOOK_TYPE_PLAYER,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_look_type_depends_on_group() {
        let player = Appearance::for_group(GroupId::Player);
        let god = Appearance::for_group(GroupId::God);
        assert_eq!(player.look_type, 129);
        assert_eq!(god.look_type, 75);
        assert_eq!(
            (player.look_body, player.look_feet, player.look_head, player.look_legs),
            (god.look_body, god.look_feet, god.look_head, god.look_legs)
        );
    }
}
