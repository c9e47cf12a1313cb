//! # Select Example
//!
//! A plain single-selection dropdown: Enter toggles the overlay, arrows move
//! the selection, Esc closes, and a click outside the widget dismisses it
//! (mouse capture is acquired and released by the widget's own commands).
//!
//! Run with: `cargo run --example select`

use std::io;

use pick::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
};
use pick::crossterm::execute;
use pick::ratatui::layout::{Constraint, Layout};
use pick::ratatui::style::{Color, Style};
use pick::ratatui::widgets::Paragraph;
use pick::widgets::options::OptionData;
use pick::widgets::select::{Message, Select};
use pick::{Command, Component, Effect, TerminalCommand};

fn main() -> io::Result<()> {
    let mut terminal = pick::ratatui::init();

    let mut select = Select::new([
        OptionData::new("Rust").with_description("systems"),
        OptionData::new("Go").with_description("services"),
        OptionData::new("Zig").with_description("systems"),
        OptionData::new("Python").with_description("scripting"),
        OptionData::new("TypeScript").with_description("web"),
    ])
    .with_placeholder("Pick a language...")
    .with_max_visible(4);
    select.attach();
    select.focus();

    let mut status = String::from("Enter to open, arrows to choose, q to quit");

    let result = loop {
        let draw = terminal.draw(|frame| {
            let [help, trigger, _, footer] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            frame.render_widget(
                Paragraph::new("Language:").style(Style::default().fg(Color::Cyan)),
                help,
            );
            select.view(frame, trigger);
            frame.render_widget(
                Paragraph::new(status.as_str()).style(Style::default().fg(Color::DarkGray)),
                footer,
            );
        });
        if let Err(err) = draw {
            break Err(err);
        }

        let msg = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('q') && !select.is_expanded() {
                    break Ok(());
                }
                Message::KeyPress(key)
            }
            Ok(Event::Mouse(mouse)) => Message::Mouse(mouse),
            Ok(_) => continue,
            Err(err) => break Err(err),
        };

        let cmd = select.update(msg);
        if let Err(err) = run_effects(&mut select, cmd, &mut status) {
            break Err(err);
        }
    };

    // Symmetric teardown: release mouse capture if the dropdown was open.
    let cmd = select.detach();
    let _ = run_effects(&mut select, cmd, &mut status);
    pick::ratatui::restore();
    result
}

/// Execute the effects of a command: terminal requests go to crossterm,
/// messages are fed back into the widget.
fn run_effects(select: &mut Select, cmd: Command<Message>, status: &mut String) -> io::Result<()> {
    for effect in cmd.into_effects() {
        match effect {
            Effect::Terminal(tcmd) => apply_terminal(tcmd)?,
            Effect::Message(Message::Changed(index, value)) => {
                *status = format!("selected #{index}: {value}");
            }
            Effect::Message(msg) => {
                let cmd = select.update(msg);
                run_effects(select, cmd, status)?;
            }
        }
    }
    Ok(())
}

fn apply_terminal(tcmd: TerminalCommand) -> io::Result<()> {
    let mut out = io::stdout();
    match tcmd {
        TerminalCommand::EnableMouseCapture(_) => execute!(out, EnableMouseCapture),
        TerminalCommand::DisableMouse => execute!(out, DisableMouseCapture),
        TerminalCommand::ShowCursor => execute!(out, pick::crossterm::cursor::Show),
        TerminalCommand::HideCursor => execute!(out, pick::crossterm::cursor::Hide),
    }
}
