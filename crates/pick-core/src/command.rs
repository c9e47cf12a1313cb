/// A side effect returned from [`Component::update`](crate::Component::update).
///
/// Widgets in this library never touch the terminal directly. When an update
/// needs something beyond a pure state change — delivering a follow-up
/// message, or asking the host to start/stop mouse capture — it describes the
/// effect as a `Command` and the embedding application executes it.
///
/// # Examples
///
/// ```rust,ignore
/// // Nothing to do:
/// let cmd = Command::none();
///
/// // Deliver a message to the parent:
/// let cmd = Command::message(Msg::Changed(2, "beta".into()));
///
/// // Ask the host to start observing mouse activity:
/// let cmd = Command::enable_mouse_capture();
/// ```
pub struct Command<Msg> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
    Terminal(TerminalCommand),
}

/// Terminal-management requests executed by the host application.
///
/// These cover the resources a widget may need the host to acquire or release
/// on its behalf. Mouse capture is the important pair: a widget that opens an
/// overlay asks for capture so it can observe presses outside its own bounds,
/// and releases it when the overlay closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Enable mouse event capture with the specified mode.
    EnableMouseCapture(MouseMode),
    /// Disable mouse event capture.
    DisableMouse,
    /// Make the terminal cursor visible.
    ShowCursor,
    /// Hide the terminal cursor.
    HideCursor,
}

/// Mouse capture modes for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMode {
    /// Click, release, wheel, drag.
    CellMotion,
    /// All of above + hover.
    AllMotion,
}

impl<Msg> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Deliver a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Run multiple commands together.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        if cmds.is_empty() {
            return Command::none();
        }
        if cmds.len() == 1 {
            let mut cmds = cmds;
            return cmds.pop().unwrap();
        }
        Command {
            inner: CommandInner::Batch(cmds),
        }
    }

    /// Terminal management request.
    pub fn terminal(cmd: TerminalCommand) -> Self {
        Command {
            inner: CommandInner::Terminal(cmd),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg>(self, f: impl Fn(Msg) -> NewMsg + Clone) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter().map(|cmd| cmd.map(f.clone())).collect(),
                ),
            },
            CommandInner::Terminal(tcmd) => Command::terminal(tcmd),
        }
    }

    // Convenience terminal command constructors

    /// Enable mouse capture in cell-motion mode (click, release, wheel, drag).
    pub fn enable_mouse_capture() -> Self {
        Command::terminal(TerminalCommand::EnableMouseCapture(MouseMode::CellMotion))
    }

    /// Enable mouse capture in all-motion mode (includes hover events).
    pub fn enable_mouse_all() -> Self {
        Command::terminal(TerminalCommand::EnableMouseCapture(MouseMode::AllMotion))
    }

    /// Disable mouse event capture.
    pub fn disable_mouse() -> Self {
        Command::terminal(TerminalCommand::DisableMouse)
    }

    /// Make the terminal cursor visible.
    pub fn show_cursor() -> Self {
        Command::terminal(TerminalCommand::ShowCursor)
    }

    /// Hide the terminal cursor.
    pub fn hide_cursor() -> Self {
        Command::terminal(TerminalCommand::HideCursor)
    }

    // --- Inspection methods (useful for testing and host loops) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }

    /// If this command is a terminal request, return it.
    pub fn into_terminal(self) -> Option<TerminalCommand> {
        match self.inner {
            CommandInner::Terminal(tcmd) => Some(tcmd),
            _ => None,
        }
    }

    /// Flatten this command into executable effects, splitting batches.
    ///
    /// Hosts execute the result in order without caring whether the widget
    /// returned a single effect or several.
    pub fn into_effects(self) -> Vec<Effect<Msg>> {
        match self.inner {
            CommandInner::None => vec![],
            CommandInner::Message(msg) => vec![Effect::Message(msg)],
            CommandInner::Terminal(tcmd) => vec![Effect::Terminal(tcmd)],
            CommandInner::Batch(cmds) => {
                cmds.into_iter().flat_map(Command::into_effects).collect()
            }
        }
    }
}

/// A single executable effect produced by [`Command::into_effects`].
#[derive(Debug)]
pub enum Effect<Msg> {
    /// Deliver this message back into the widget tree.
    Message(Msg),
    /// Execute this terminal request.
    Terminal(TerminalCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
    }

    #[test]
    fn command_message_round_trips() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_batch_single_unwraps() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn command_batch_drops_noops() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(7)]);
        assert_eq!(cmd.into_message(), Some(7));
    }

    #[test]
    fn command_batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        assert_eq!(cmd.into_batch().map(|b| b.len()), Some(2));
    }

    #[test]
    fn command_map_none() {
        let cmd: Command<i32> = Command::none();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(mapped.is_none());
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message(), Some("42".to_string()));
    }

    #[test]
    fn command_map_terminal_preserves_request() {
        let cmd: Command<i32> = Command::enable_mouse_capture();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(
            mapped.into_terminal(),
            Some(TerminalCommand::EnableMouseCapture(MouseMode::CellMotion))
        );
    }

    #[test]
    fn command_map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_batch().map(|b| b.len()), Some(2));
    }

    #[test]
    fn into_effects_flattens_nested_batches() {
        let cmd: Command<i32> = Command::batch(vec![
            Command::message(1),
            Command::batch(vec![Command::message(2), Command::disable_mouse()]),
        ]);
        let effects = cmd.into_effects();
        assert_eq!(effects.len(), 3);
        assert!(matches!(effects[0], Effect::Message(1)));
        assert!(matches!(effects[2], Effect::Terminal(TerminalCommand::DisableMouse)));
    }

    #[test]
    fn terminal_command_constructors() {
        let cmd: Command<()> = Command::disable_mouse();
        assert_eq!(cmd.into_terminal(), Some(TerminalCommand::DisableMouse));

        let cmd: Command<()> = Command::hide_cursor();
        assert_eq!(cmd.into_terminal(), Some(TerminalCommand::HideCursor));
    }
}
