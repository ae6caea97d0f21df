use std::{cell::RefCell, rc::Rc, string::String, vec::Vec};

use atat::{asynch::AtatClient, AtatCmd};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, pubsub::PubSubChannel};

use crate::command::{psn::urc::EPSNetworkRegistration, Urc};

pub type TestUrcChannel = PubSubChannel<CriticalSectionRawMutex, Urc, 4, 1, 1>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Text of a command as written to the modem, without the line terminator.
pub fn written<C: AtatCmd>(cmd: &C) -> String {
    let mut buf = std::vec![0u8; C::MAX_LEN];
    let len = cmd.write(&mut buf);
    String::from_utf8_lossy(&buf[..len]).trim_end().into()
}

/// Scripted modem.
///
/// Every command is recorded by its written text. Commands are matched by
/// prefix against the script: a matching `reply` is parsed as the response,
/// a matching `fail_on` returns an error, and a matching `urc_on` entry is
/// published on the URC channel once.
pub struct MockAtClient<'a> {
    log: Rc<RefCell<Vec<String>>>,
    replies: Vec<(&'static str, &'static [u8])>,
    fail_on: Option<&'static str>,
    urcs: Vec<(&'static str, Urc)>,
    channel: Option<&'a TestUrcChannel>,
}

impl<'a> MockAtClient<'a> {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            replies: Vec::new(),
            fail_on: None,
            urcs: Vec::new(),
            channel: None,
        }
    }

    pub fn with_channel(mut self, channel: &'a TestUrcChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn reply(mut self, prefix: &'static str, response: &'static [u8]) -> Self {
        self.replies.push((prefix, response));
        self
    }

    pub fn fail_on(mut self, prefix: &'static str) -> Self {
        self.fail_on = Some(prefix);
        self
    }

    /// Publish a `+CEREG: <stat>` notification the next time `prefix` is sent.
    pub fn registration_on(mut self, prefix: &'static str, stat: u8) -> Self {
        self.urcs.push((
            prefix,
            Urc::EPSNetworkRegistration(EPSNetworkRegistration::from_stat(stat)),
        ));
        self
    }

    /// Shared handle to the recorded commands.
    pub fn log(&self) -> Rc<RefCell<Vec<String>>> {
        self.log.clone()
    }
}

impl AtatClient for MockAtClient<'_> {
    async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        let text = written(cmd);
        self.log.borrow_mut().push(text.clone());

        if let Some(pos) = self.urcs.iter().position(|(p, _)| text.starts_with(p)) {
            let (_, urc) = self.urcs.remove(pos);
            if let Some(channel) = self.channel {
                channel.immediate_publisher().publish_immediate(urc);
            }
        }

        if self.fail_on.is_some_and(|p| text.starts_with(p)) {
            return Err(atat::Error::Error);
        }

        let response = self
            .replies
            .iter()
            .find(|(p, _)| text.starts_with(p))
            .map(|(_, r)| *r)
            .unwrap_or(&[]);

        cmd.parse(Ok(response))
    }
}
