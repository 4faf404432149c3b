use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Lifecycle status of an [`Offer`](crate::model::Offer).
///
/// Serialized as the lowercase words `undefined`, `valid`, `expired` and `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    /// Freshly created, not yet resolved against the calendar.
    Undefined,
    Valid,
    Expired,
    Cancelled,
}

impl OfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferStatus::Undefined => "undefined",
            OfferStatus::Valid => "valid",
            OfferStatus::Expired => "expired",
            OfferStatus::Cancelled => "cancelled",
        }
    }

    /// `cancelled` and `expired` are sinks.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OfferStatus::Expired | OfferStatus::Cancelled)
    }

    /// Whether a stored offer may move from `self` to `next`.
    ///
    /// Re-applying the current status is always allowed. `cancelled` never changes, and `expired`
    /// can only become `cancelled`.
    pub fn can_transition_to(&self, next: OfferStatus) -> bool {
        match (self, next) {
            (current, next) if *current == next => true,
            (OfferStatus::Cancelled, _) => false,
            (OfferStatus::Expired, OfferStatus::Cancelled) => true,
            (OfferStatus::Expired, _) => false,
            (_, OfferStatus::Undefined) => false,
            _ => true,
        }
    }
}

impl Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the four-word vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status {0:?} not recognised")]
pub struct UnrecognizedStatus(pub String);

impl FromStr for OfferStatus {
    type Err = UnrecognizedStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(OfferStatus::Undefined),
            "valid" => Ok(OfferStatus::Valid),
            "expired" => Ok(OfferStatus::Expired),
            "cancelled" => Ok(OfferStatus::Cancelled),
            other => Err(UnrecognizedStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_verbatim() {
        for status in [
            OfferStatus::Undefined,
            OfferStatus::Valid,
            OfferStatus::Expired,
            OfferStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OfferStatus>(), Ok(status));
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status)
            );
        }
    }

    #[test]
    fn test_unrecognized_status_is_an_error() {
        assert_eq!(
            "Cancelled".parse::<OfferStatus>(),
            Err(UnrecognizedStatus("Cancelled".to_string()))
        );
        assert!(serde_json::from_str::<OfferStatus>("\"archived\"").is_err());
    }

    #[test]
    fn test_terminal_states_are_sinks() {
        use OfferStatus::*;

        assert!(!Cancelled.can_transition_to(Valid));
        assert!(!Cancelled.can_transition_to(Expired));
        assert!(Cancelled.can_transition_to(Cancelled));

        assert!(!Expired.can_transition_to(Valid));
        assert!(!Expired.can_transition_to(Undefined));
        assert!(Expired.can_transition_to(Cancelled));

        assert!(Undefined.can_transition_to(Valid));
        assert!(Undefined.can_transition_to(Expired));
        assert!(Valid.can_transition_to(Expired));
        assert!(Valid.can_transition_to(Cancelled));
        assert!(!Valid.can_transition_to(Undefined));
    }
}
