//! Info and error listeners notified while parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::DefinitionError;

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

/// Which notifications a listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Help text.
    Info,
    /// Parse failure messages.
    Error,
    /// Both of the above.
    All,
}

impl FromStr for Channel {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            "all" => Ok(Self::All),
            other => Err(DefinitionError::UnknownChannel(other.to_string())),
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct Diagnostics {
    info: Vec<Listener>,
    error: Vec<Listener>,
}

impl Diagnostics {
    pub(crate) fn register(&mut self, channel: Channel, listener: Listener) {
        match channel {
            Channel::Info => self.info.push(listener),
            Channel::Error => self.error.push(listener),
            Channel::All => {
                self.info.push(Arc::clone(&listener));
                self.error.push(listener);
            }
        }
    }

    pub(crate) fn info(&self, text: &str) {
        for listener in &self.info {
            listener(text);
        }
    }

    pub(crate) fn error(&self, text: &str) {
        for listener in &self.error {
            listener(text);
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("info", &self.info.len())
            .field("error", &self.error.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn parses_channel_names() {
        assert_eq!("info".parse::<Channel>().unwrap(), Channel::Info);
        assert_eq!("error".parse::<Channel>().unwrap(), Channel::Error);
        assert_eq!("err".parse::<Channel>().unwrap(), Channel::Error);
        assert_eq!("all".parse::<Channel>().unwrap(), Channel::All);
        assert_eq!(
            "warn".parse::<Channel>().unwrap_err(),
            DefinitionError::UnknownChannel("warn".to_string())
        );
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut diag = Diagnostics::default();
        for (channel, tag) in [(Channel::Error, "first"), (Channel::All, "all"), (Channel::Info, "info")] {
            let log = Arc::clone(&log);
            diag.register(
                channel,
                Arc::new(move |text: &str| log.lock().unwrap().push(format!("{tag}:{text}"))),
            );
        }

        diag.error("bad");
        diag.info("help");
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:bad", "all:bad", "all:help", "info:help"]
        );
    }
}
