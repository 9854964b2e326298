//! Entity kinds and their subsystem mapping.

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// The three entity kinds generated as header/implementation pairs.
///
/// The other two scaffoldable artifacts (the project skeleton and the build
/// descriptor) have their own dedicated services and single templates; they
/// never flow through the per-name template pair machinery, so they are not
/// variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Agent,
    State,
    Event,
}

impl EntityKind {
    /// Parse a user-supplied kind token.
    ///
    /// Case-sensitive on purpose: the command surface accepts exactly
    /// `agent`, `state`, `event`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "agent" => Ok(Self::Agent),
            "state" => Ok(Self::State),
            "event" => Ok(Self::Event),
            other => Err(DomainError::UnknownKind { kind: other.into() }),
        }
    }

    /// Subsystem directory this kind's files live under.
    ///
    /// agent → `agents`, state → `states`, event → `events`. The mapping is
    /// fixed; the generated layout (see [`crate::domain::ProjectLayout`])
    /// uses exactly these names.
    pub fn subsystem(self) -> &'static str {
        match self {
            Self::Agent => "agents",
            Self::State => "states",
            Self::Event => "events",
        }
    }

    /// `<subsystem>/src` relative to the project root.
    pub fn src_dir(self) -> PathBuf {
        PathBuf::from(self.subsystem()).join("src")
    }

    /// `<subsystem>/include` relative to the project root.
    pub fn include_dir(self) -> PathBuf {
        PathBuf::from(self.subsystem()).join("include")
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agent => write!(f, "agent"),
            Self::State => write!(f, "state"),
            Self::Event => write!(f, "event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_three_kinds() {
        assert_eq!(EntityKind::parse("agent").unwrap(), EntityKind::Agent);
        assert_eq!(EntityKind::parse("state").unwrap(), EntityKind::State);
        assert_eq!(EntityKind::parse("event").unwrap(), EntityKind::Event);
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        assert!(matches!(
            EntityKind::parse("actor"),
            Err(DomainError::UnknownKind { .. })
        ));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(EntityKind::parse("Agent").is_err());
        assert!(EntityKind::parse("EVENT").is_err());
    }

    #[test]
    fn subsystem_mapping() {
        assert_eq!(EntityKind::Agent.subsystem(), "agents");
        assert_eq!(EntityKind::State.subsystem(), "states");
        assert_eq!(EntityKind::Event.subsystem(), "events");
    }

    #[test]
    fn src_and_include_dirs_are_relative() {
        assert_eq!(EntityKind::Agent.src_dir(), PathBuf::from("agents/src"));
        assert_eq!(
            EntityKind::Event.include_dir(),
            PathBuf::from("events/include")
        );
    }
}
