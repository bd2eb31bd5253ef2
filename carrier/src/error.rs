use strum_macros::Display;
use thiserror::Error;

/// One of the two channels of an [`Outcome`](crate::Outcome).
///
/// Carried by [`Error::UnwrapOnWrongVariant`] to say which channel the
/// caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    #[strum(serialize = "success")]
    Success,
    #[strum(serialize = "failure")]
    Failure,
}

/// A programmer contract violation.
///
/// These indicate a logic error in the calling code: unwrapping an absent
/// value, asking an `Outcome` for the wrong channel, indexing past the end
/// of a `Sequence`, or passing an argument a combinator cannot work with.
///
/// Domain failures never show up here; they travel as values through the
/// failure channel of an `Outcome`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `unwrap` or `expect` on an absent `Optional`.
    ///
    /// `message` holds the text passed to `expect`.
    #[error("{}", .message.as_deref().unwrap_or("called `Optional::unwrap()` on an absent value"))]
    UnwrapOnAbsent { message: Option<String> },
    /// Asked an `Outcome` for a channel it doesn't hold.
    #[error("{}", wrong_variant_message(.expected, .message))]
    UnwrapOnWrongVariant {
        expected: Channel,
        message: Option<String>,
    },
    /// Positional access outside of `0..len`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A combinator argument outside of its domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}

fn wrong_variant_message(expected: &Channel, message: &Option<String>) -> String {
    match (message, expected) {
        (Some(message), _) => message.clone(),
        (None, Channel::Success) => "called `Outcome::unwrap()` on a failure value".to_string(),
        (None, Channel::Failure) => {
            "called `Outcome::unwrap_err()` on a success value".to_string()
        }
    }
}

impl Error {
    pub(crate) fn unwrap_on_absent(message: Option<&str>) -> Self {
        tracing::debug!(?message, "unwrap on absent optional");
        Error::UnwrapOnAbsent {
            message: message.map(str::to_string),
        }
    }

    pub(crate) fn unwrap_on_wrong_variant(expected: Channel, message: Option<&str>) -> Self {
        tracing::debug!(%expected, ?message, "unwrap on wrong outcome channel");
        Error::UnwrapOnWrongVariant {
            expected,
            message: message.map(str::to_string),
        }
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "sequence index out of range");
        Error::IndexOutOfRange { index, len }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        tracing::debug!(name, reason, "invalid combinator argument");
        Error::InvalidArgument { name, reason }
    }

    /// The channel an `Outcome` unwrap expected, if this is a wrong variant
    /// error.
    pub fn expected_channel(&self) -> Option<Channel> {
        match self {
            Error::UnwrapOnWrongVariant { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_on_absent_default_message() {
        let error = Error::unwrap_on_absent(None);
        assert_eq!(
            error.to_string(),
            "called `Optional::unwrap()` on an absent value"
        );
    }

    #[test]
    fn test_unwrap_on_absent_expect_message() {
        let error = Error::unwrap_on_absent(Some("fruits are healthy"));
        assert_eq!(error.to_string(), "fruits are healthy");
    }

    #[test]
    fn test_wrong_variant_messages() {
        assert_eq!(
            Error::unwrap_on_wrong_variant(Channel::Success, None).to_string(),
            "called `Outcome::unwrap()` on a failure value"
        );
        assert_eq!(
            Error::unwrap_on_wrong_variant(Channel::Failure, None).to_string(),
            "called `Outcome::unwrap_err()` on a success value"
        );
        assert_eq!(
            Error::unwrap_on_wrong_variant(Channel::Failure, Some("boom")).to_string(),
            "boom"
        );
    }

    #[test]
    fn test_expected_channel() {
        let error = Error::unwrap_on_wrong_variant(Channel::Failure, None);
        assert_eq!(error.expected_channel(), Some(Channel::Failure));
        assert_eq!(Error::index_out_of_range(3, 2).expected_channel(), None);
    }

    #[test]
    fn test_index_and_argument_messages() {
        assert_eq!(
            Error::index_out_of_range(5, 3).to_string(),
            "index 5 out of range for sequence of length 3"
        );
        assert_eq!(
            Error::invalid_argument("step", "must be greater than zero").to_string(),
            "invalid argument `step`: must be greater than zero"
        );
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Success.to_string(), "success");
        assert_eq!(Channel::Failure.to_string(), "failure");
    }
}
