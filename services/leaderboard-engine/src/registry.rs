//! Participant registry
//!
//! Profiles and role claims come from the external auth collaborator; the
//! registry is the engine's view of them. It backs the known-participant
//! check on submission, display-name resolution for rank projections, and
//! the role tallies shown on the admin surface.

use dashmap::DashMap;
use serde::Serialize;
use types::ids::ParticipantId;
use types::participant::{Profile, Role};

/// Fallback used when a record survives a profile lookup miss.
const UNKNOWN_DISPLAY_NAME: &str = "Unknown Player";

/// Concurrent map of known participants.
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    profiles: DashMap<ParticipantId, Profile>,
}

/// Participant counts by role for the admin stats surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleTallies {
    pub total: usize,
    pub players: usize,
    pub mentors: usize,
    pub admins: usize,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a profile.
    pub fn register(&self, profile: Profile) {
        self.profiles.insert(profile.participant_id, profile);
    }

    /// Whether the participant is known to the system.
    pub fn contains(&self, participant_id: ParticipantId) -> bool {
        self.profiles.contains_key(&participant_id)
    }

    /// Full profile lookup.
    pub fn get(&self, participant_id: ParticipantId) -> Option<Profile> {
        self.profiles.get(&participant_id).map(|p| p.clone())
    }

    /// Role claim lookup.
    pub fn role(&self, participant_id: ParticipantId) -> Option<Role> {
        self.profiles.get(&participant_id).map(|p| p.role)
    }

    /// Display name for rank projections, with a stable fallback.
    pub fn display_name(&self, participant_id: ParticipantId) -> String {
        self.profiles
            .get(&participant_id)
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| UNKNOWN_DISPLAY_NAME.to_string())
    }

    /// Number of known participants.
    pub fn count(&self) -> usize {
        self.profiles.len()
    }

    /// Counts by role.
    pub fn tallies(&self) -> RoleTallies {
        let mut tallies = RoleTallies {
            total: 0,
            players: 0,
            mentors: 0,
            admins: 0,
        };
        for entry in self.profiles.iter() {
            tallies.total += 1;
            match entry.role {
                Role::Player => tallies.players += 1,
                Role::FloorMentor => tallies.mentors += 1,
                Role::Admin => tallies.admins += 1,
            }
        }
        tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, role: Role) -> Profile {
        Profile::new(ParticipantId::new(), name, format!("{}@arcade.dev", name), role)
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = ParticipantRegistry::new();
        let p = profile("ada", Role::Player);
        let pid = p.participant_id;

        assert!(!registry.contains(pid));
        registry.register(p);

        assert!(registry.contains(pid));
        assert_eq!(registry.display_name(pid), "ada");
        assert_eq!(registry.role(pid), Some(Role::Player));
    }

    #[test]
    fn test_display_name_fallback() {
        let registry = ParticipantRegistry::new();
        assert_eq!(registry.display_name(ParticipantId::new()), "Unknown Player");
    }

    #[test]
    fn test_tallies() {
        let registry = ParticipantRegistry::new();
        registry.register(profile("ada", Role::Player));
        registry.register(profile("grace", Role::Player));
        registry.register(profile("linus", Role::FloorMentor));
        registry.register(profile("root", Role::Admin));

        let tallies = registry.tallies();
        assert_eq!(tallies.total, 4);
        assert_eq!(tallies.players, 2);
        assert_eq!(tallies.mentors, 1);
        assert_eq!(tallies.admins, 1);
    }

    #[test]
    fn test_register_replaces_profile() {
        let registry = ParticipantRegistry::new();
        let mut p = profile("ada", Role::Player);
        let pid = p.participant_id;
        registry.register(p.clone());

        p.role = Role::FloorMentor;
        registry.register(p);

        assert_eq!(registry.count(), 1);
        assert_eq!(registry.role(pid), Some(Role::FloorMentor));
    }
}
