use chrono::{DateTime, Utc};

/// Length of generated player identifiers.
pub const PLAYER_ID_LENGTH: usize = 21;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub number: Option<i32>,
    pub jerseyname: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Builds a player with a fresh id and the current timestamp.
    pub fn new(jerseyname: Option<String>) -> Self {
        Self {
            id: generate_id(),
            number: None,
            jerseyname,
            created_at: Utc::now(),
        }
    }

    pub fn with_number(mut self, number: i32) -> Self {
        self.number = Some(number);
        self
    }
}

/// Generates a random, URL-safe player identifier.
pub fn generate_id() -> String {
    nanoid::nanoid!(PLAYER_ID_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(Some("Hunter".to_string()));
        assert_eq!(player.jerseyname.as_deref(), Some("Hunter"));
        assert_eq!(player.number, None);
        assert_eq!(player.id.len(), PLAYER_ID_LENGTH);
    }

    #[test]
    fn test_with_number() {
        let player = Player::new(None).with_number(99);
        assert_eq!(player.number, Some(99));
        assert!(player.jerseyname.is_none());
    }

    #[test]
    fn test_ids_are_not_shared_between_instances() {
        let ids: HashSet<String> = (0..100).map(|_| Player::new(None).id).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_created_at_is_taken_per_instance() {
        let first = Player::new(None);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = Player::new(None);
        assert!(second.created_at > first.created_at);
    }
}
