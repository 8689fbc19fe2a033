use thiserror::Error as ThisError;
use tracing::{error, warn};

use crate::{framework, games::wordle};

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Wordle(#[from] wordle::Error),

    #[error("problem loading config file: {0}")]
    Config(#[from] framework::config::Error),

    #[error("couldn't read request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("couldn't write config: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl Error {
    /// Emits the error as an event, at a level matching how bad it is.
    pub fn trace(&self) {
        match self {
            Self::Wordle(err) if err.is_out_of_range() => {
                warn!(%err, "no puzzle available");
            }
            Self::Request(err) => warn!(%err, "bad request"),
            err => error!(%err),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::Error;
    use crate::games::wordle;

    #[test]
    #[traced_test]
    fn out_of_range_is_a_warning() {
        let err = Error::from(wordle::Error::OutOfRange {
            day_index: 900,
            available: 3,
        });
        err.trace();

        assert!(logs_contain("WARN"));
        assert!(logs_contain("no puzzle for day 900"));
    }

    #[test]
    #[traced_test]
    fn other_errors_are_errors() {
        let err = Error::from(wordle::Error::NoAnswers);
        err.trace();

        assert!(logs_contain("ERROR"));
        assert!(logs_contain("answers list is empty"));
    }
}
