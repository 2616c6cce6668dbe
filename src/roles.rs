use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tank,
    Damage,
    Support,
}

impl Role {
    /// Report column order.
    pub const ALL: [Role; 3] = [Role::Tank, Role::Damage, Role::Support];

    pub fn label(self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Damage => "DPS",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Roster order within a role breaks ties in the report.
pub const HERO_ROLES: &[(&str, Role)] = &[
    ("D.Va", Role::Tank),
    ("Doomfist", Role::Tank),
    ("Junker Queen", Role::Tank),
    ("Mauga", Role::Tank),
    ("Orisa", Role::Tank),
    ("Ramattra", Role::Tank),
    ("Reinhardt", Role::Tank),
    ("Roadhog", Role::Tank),
    ("Sigma", Role::Tank),
    ("Winston", Role::Tank),
    ("Wrecking Ball", Role::Tank),
    ("Zarya", Role::Tank),
    ("Ashe", Role::Damage),
    ("Bastion", Role::Damage),
    ("Cassidy", Role::Damage),
    ("Echo", Role::Damage),
    ("Genji", Role::Damage),
    ("Hanzo", Role::Damage),
    ("Junkrat", Role::Damage),
    ("Mei", Role::Damage),
    ("Pharah", Role::Damage),
    ("Reaper", Role::Damage),
    ("Sojourn", Role::Damage),
    ("Soldier:76", Role::Damage),
    ("Sombra", Role::Damage),
    ("Symmetra", Role::Damage),
    ("Torbjörn", Role::Damage),
    ("Tracer", Role::Damage),
    ("Widowmaker", Role::Damage),
    ("Ana", Role::Support),
    ("Baptiste", Role::Support),
    ("Brigitte", Role::Support),
    ("Illari", Role::Support),
    ("Kiriko", Role::Support),
    ("Lifeweaver", Role::Support),
    ("Lúcio", Role::Support),
    ("Mercy", Role::Support),
    ("Moira", Role::Support),
    ("Zenyatta", Role::Support),
];

/// Exact-name lookup; names outside the roster have no role.
pub fn role_of(hero: &str) -> Option<Role> {
    HERO_ROLES
        .iter()
        .find(|(name, _)| *name == hero)
        .map(|(_, role)| *role)
}

/// Heroes of one role, in roster order.
pub fn roster(role: Role) -> impl Iterator<Item = &'static str> {
    HERO_ROLES
        .iter()
        .filter(move |(_, r)| *r == role)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hero_has_exactly_one_role() {
        let total: usize = Role::ALL.iter().map(|r| roster(*r).count()).sum();
        assert_eq!(total, HERO_ROLES.len());
        assert_eq!(roster(Role::Tank).count(), 12);
        assert_eq!(roster(Role::Damage).count(), 17);
        assert_eq!(roster(Role::Support).count(), 10);
    }

    #[test]
    fn looks_up_roles_by_exact_name() {
        assert_eq!(role_of("Zarya"), Some(Role::Tank));
        assert_eq!(role_of("Soldier:76"), Some(Role::Damage));
        assert_eq!(role_of("Lúcio"), Some(Role::Support));
        assert_eq!(role_of("allHeroes"), None);
    }

    #[test]
    fn api_style_keys_have_no_role() {
        for key in ["dVa", "soldier76", "lucio", "torbjorn", "wreckingBall", "ana"] {
            assert_eq!(role_of(key), None, "key {:?}", key);
        }
    }
}
