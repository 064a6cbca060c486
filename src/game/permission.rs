// src/game/permission.rs
use std::fmt;

use super::PlayerRecord;

/// Rank permission level, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Permission(pub i32);

impl Permission {
    pub const BANNED: Permission = Permission(-20);
    pub const GUEST: Permission = Permission(0);
    pub const BUILDER: Permission = Permission(30);
    pub const ADV_BUILDER: Permission = Permission(50);
    pub const OPERATOR: Permission = Permission(80);
    pub const ADMIN: Permission = Permission(100);
    pub const OWNER: Permission = Permission(120);
    pub const NOBODY: Permission = Permission(127);

    fn named(self) -> Option<&'static str> {
        match self {
            Self::BANNED => Some("Banned"),
            Self::GUEST => Some("Guest"),
            Self::BUILDER => Some("Builder"),
            Self::ADV_BUILDER => Some("AdvBuilder"),
            Self::OPERATOR => Some("Operator"),
            Self::ADMIN => Some("Admin"),
            Self::OWNER => Some("Owner"),
            Self::NOBODY => Some("Nobody"),
            _ => None,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.named() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Who is looking. The public endpoint always looks as [`Viewer::GUEST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub permission: Permission,
}

impl Viewer {
    pub const GUEST: Viewer = Viewer { permission: Permission::GUEST };

    pub fn can_see(&self, target: &PlayerRecord) -> bool {
        match target.hidden_rank {
            None => true,
            Some(rank) => self.permission >= rank,
        }
    }

    pub fn visible(&self, players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
        players.into_iter().filter(|p| self.can_see(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_ranks_display_by_name() {
        assert_eq!(Permission::GUEST.to_string(), "Guest");
        assert_eq!(Permission::ADV_BUILDER.to_string(), "AdvBuilder");
        assert_eq!(Permission(42).to_string(), "42");
    }

    #[test]
    fn guest_cannot_see_staff_hidden_players() {
        let mut hidden = PlayerRecord::new("admin", "main");
        hidden.hidden_rank = Some(Permission::ADMIN);
        let visible = PlayerRecord::new("alice", "main");

        assert!(!Viewer::GUEST.can_see(&hidden));
        assert!(Viewer::GUEST.can_see(&visible));

        let op = Viewer { permission: Permission::ADMIN };
        assert!(op.can_see(&hidden));

        let names: Vec<_> = Viewer::GUEST
            .visible(vec![hidden, visible])
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["alice"]);
    }

    #[test]
    fn hidden_at_guest_rank_stays_visible_to_guests() {
        let mut p = PlayerRecord::new("bob", "main");
        p.hidden_rank = Some(Permission::GUEST);
        assert!(Viewer::GUEST.can_see(&p));
    }
}
