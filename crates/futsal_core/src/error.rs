use thiserror::Error;

use crate::models::{PlayerId, TeamSide};

/// Fatal errors raised while building a match or decoding its inputs.
///
/// Normal in-match rejections (second timeout, invalid substitution, ticking a
/// paused match) are not errors; those operations report `false` instead.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{side} roster has no usable players")]
    EmptyRoster { side: TeamSide },

    #[error("player id {id} appears more than once in the match")]
    DuplicatePlayer { id: PlayerId },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("unsupported request schema version {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Reason a manual substitution was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    #[error("match is not in progress")]
    MatchFinished,
    #[error("player {0} is not on court")]
    NotOnCourt(PlayerId),
    #[error("player {0} is not on the bench")]
    NotOnBench(PlayerId),
    #[error("player {0} has been sent off")]
    SentOff(PlayerId),
    #[error("outgoing and incoming player are the same")]
    SamePlayer,
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::Deserialization(err.to_string())
        } else {
            MatchError::Serialization(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for MatchError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchError::Deserialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_syntax_error_maps_to_deserialization() {
        let err: MatchError = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err().into();
        assert!(matches!(err, MatchError::Deserialization(_)));
    }

    #[test]
    fn test_error_messages_name_the_cause() {
        let err = MatchError::EmptyRoster { side: TeamSide::Away };
        assert_eq!(err.to_string(), "away roster has no usable players");

        let err = SubstitutionError::NotOnBench(14);
        assert_eq!(err.to_string(), "player 14 is not on the bench");
    }
}
