//! # Combobox Example
//!
//! A select in combobox mode: typing narrows the option list with the
//! `startsWithPerTerm` matcher (try "script"), Backspace widens it again,
//! and Enter/arrows work as in the plain select.
//!
//! Run with: `cargo run --example combobox`

use std::io;

use pick::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use pick::crossterm::execute;
use pick::ratatui::layout::{Constraint, Layout};
use pick::ratatui::style::{Color, Style};
use pick::ratatui::widgets::Paragraph;
use pick::widgets::filter::FilterMethod;
use pick::widgets::select::{Message, Select};
use pick::{Command, Component, Effect, TerminalCommand};

const LANGUAGES: &[&str] = &[
    "C",
    "C++",
    "Common Lisp",
    "Emacs Lisp",
    "Go",
    "Java",
    "JavaScript",
    "Objective C",
    "OCaml",
    "Python",
    "Rust",
    "Standard ML",
    "TypeScript",
    "Visual Basic Script",
    "Zig",
];

fn main() -> io::Result<()> {
    let mut terminal = pick::ratatui::init();

    let mut select = Select::new(LANGUAGES.iter().copied())
        .with_combobox(true)
        .with_filter(FilterMethod::StartsWithPerTerm)
        .with_placeholder("Type to filter...")
        .with_max_visible(6);
    select.attach();
    select.focus();

    let mut status = String::from("type to filter, Ctrl-C to quit");

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
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
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

    let cmd = select.detach();
    let _ = run_effects(&mut select, cmd, &mut status);
    pick::ratatui::restore();
    result
}

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
