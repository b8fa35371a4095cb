//! Input/output channel pairing.

use crate::input::InputChannel;
use crate::output::OutputChannel;

/// One input channel and one output channel driven together.
#[derive(Debug, Default)]
pub struct IoPair {
    input: InputChannel,
    output: OutputChannel,
}

impl IoPair {
    /// Pair the given channels. Missing ones default to plain channels.
    pub fn new(input: Option<InputChannel>, output: Option<OutputChannel>) -> Self {
        Self {
            input: input.unwrap_or_default(),
            output: output.unwrap_or_default(),
        }
    }

    /// Terminal input with `head` as prompt, paired with terminal output.
    pub fn terminal(head: Option<&str>) -> Self {
        Self::new(
            Some(InputChannel::terminal(head)),
            Some(OutputChannel::terminal()),
        )
    }

    pub fn input(&self) -> &InputChannel {
        &self.input
    }

    pub fn output(&self) -> &OutputChannel {
        &self.output
    }

    pub fn input_mut(&mut self) -> &mut InputChannel {
        &mut self.input
    }

    pub fn output_mut(&mut self) -> &mut OutputChannel {
        &mut self.output
    }

    /// Borrow both channels mutably at once.
    pub fn parts_mut(&mut self) -> (&mut InputChannel, &mut OutputChannel) {
        (&mut self.input, &mut self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelType;

    #[test]
    fn defaults_are_plain() {
        let io = IoPair::new(None, None);
        assert_eq!(io.input().ctype(), ChannelType::IN);
        assert_eq!(io.output().ctype(), ChannelType::OUT);
        assert!(io.input().is_empty());
        assert!(io.output().is_empty());
    }

    #[test]
    fn default_matches_new() {
        let io = IoPair::default();
        assert_eq!(io.input().ctype(), ChannelType::IN);
        assert_eq!(io.output().ctype(), ChannelType::OUT);
    }

    #[test]
    fn supplied_channels_are_kept() {
        let io = IoPair::new(None, Some(OutputChannel::terminal()));
        assert_eq!(io.input().ctype(), ChannelType::IN);
        assert_eq!(io.output().ctype(), ChannelType::OUT_CMD);
    }

    #[test]
    fn terminal_pair() {
        let io = IoPair::terminal(Some(">>> "));
        assert_eq!(io.input().ctype(), ChannelType::IN_CMD);
        assert_eq!(io.output().ctype(), ChannelType::OUT_CMD);
        assert_eq!(io.input().get(), ">>> ");
    }

    #[test]
    fn submit_through_parts() {
        let mut io = IoPair::terminal(Some("$ "));
        for c in "out hi".chars() {
            io.input_mut().put(c);
        }
        let (input, output) = io.parts_mut();
        output.put(&input.get(), input.head().chars().count());
        input.clear();
        assert_eq!(io.output().get(), ["$ out hi", "hi"]);
        assert_eq!(io.input().get(), "$ ");
    }
}
