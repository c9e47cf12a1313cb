//! Select/combobox component mimicking an editor-native dropdown control.
//!
//! `Select` owns the option list, the selected and active indices, the typed
//! filter pattern, and the visibility of the dropdown surface. Keyboard and
//! pointer input drive a small state machine; a [`Message::Changed`]
//! notification is emitted whenever the single-selection changes.
//!
//! While the dropdown is open the widget observes pointer activity outside
//! its rendered bounds so it can dismiss itself; the observation is acquired
//! and released through mouse-capture [`Command`]s with an idempotence guard,
//! so the host never ends up with a doubled or leaked registration.
//!
//! # Example
//!
//! ```ignore
//! use pick_widgets::select::Select;
//!
//! let select = Select::new(["Rust", "Go", "Zig"])
//!     .with_placeholder("Language...")
//!     .with_max_visible(5);
//! ```

use std::cell::Cell;

use crate::dropdown::{self, DropdownStyle, DropdownView, OverlayGeometry};
use crate::filter::FilterMethod;
use crate::options::{OptionData, OptionList, SourceNode};
use crate::scroll::ScrollWindow;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pick_core::command::Command;
use pick_core::component::Component;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Messages for the select component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press forwarded to the select.
    KeyPress(KeyEvent),
    /// A mouse event forwarded to the select.
    Mouse(MouseEvent),
    /// Request to open the dropdown surface.
    Open,
    /// Request to close the dropdown surface.
    Close,
    /// The single selection changed, carrying the index and value.
    Changed(usize, String),
}

/// Visual style configuration for the trigger line.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Style for the selected value (or typed pattern) in the trigger.
    pub value: Style,
    /// Style for the placeholder shown when nothing is selected.
    pub placeholder: Style,
    /// Style for the expanded/collapsed arrow indicator.
    pub arrow: Style,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            value: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            arrow: Style::default().fg(Color::DarkGray),
        }
    }
}

/// A select/dropdown control with optional combobox filtering.
///
/// Renders as a one-line trigger; when expanded, a [`DropdownView`] overlay
/// shows the (possibly filtered) option list below or above the trigger.
pub struct Select {
    list: OptionList,
    selected: Option<usize>,
    active: Option<usize>,
    multiple: bool,
    combobox: bool,
    pattern: String,
    method: FilterMethod,
    dropdown_visible: bool,
    focus: bool,
    attached: bool,
    watching_outside: bool,
    placeholder: String,
    max_visible: usize,
    scroll: ScrollWindow,
    overlay: DropdownView,
    style: SelectStyle,
    block: Option<Block<'static>>,
    // Last-rendered geometry, for pointer hit testing.
    trigger_area: Cell<Rect>,
    overlay_geometry: Cell<Option<OverlayGeometry>>,
}

impl Select {
    /// Create a select over the given options.
    pub fn new(options: impl IntoIterator<Item = impl Into<OptionData>>) -> Self {
        let mut select = Self {
            list: OptionList::new(),
            selected: None,
            active: None,
            multiple: false,
            combobox: false,
            pattern: String::new(),
            method: FilterMethod::default(),
            dropdown_visible: false,
            focus: false,
            attached: false,
            watching_outside: false,
            placeholder: "Select...".to_string(),
            max_visible: 8,
            scroll: ScrollWindow::new(8),
            overlay: DropdownView::new(),
            style: SelectStyle::default(),
            block: None,
            trigger_area: Cell::new(Rect::ZERO),
            overlay_geometry: Cell::new(None),
        };
        select.set_options(options.into_iter().map(Into::into).collect());
        select
    }

    /// Set the placeholder text shown when no option is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Enable combobox mode: typed text narrows the visible option list.
    pub fn with_combobox(mut self, combobox: bool) -> Self {
        self.combobox = combobox;
        self
    }

    /// Enable multiple-selection mode.
    ///
    /// The single-selection keyboard transitions and the [`Message::Changed`]
    /// notification are disabled; a multi-select host drives selection flags
    /// itself and only uses this widget for visibility and rendering.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self.rederive_selection();
        self
    }

    /// Set the filter method used in combobox mode.
    pub fn with_filter(mut self, method: FilterMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the maximum number of visible overlay rows before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.scroll.set_visible(self.max_visible);
        self
    }

    /// Set the overlay position relative to the trigger.
    pub fn with_position(mut self, position: dropdown::Position) -> Self {
        self.overlay = self.overlay.with_position(position);
        self
    }

    /// Set the trigger style configuration.
    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the overlay style configuration.
    pub fn with_dropdown_style(mut self, style: DropdownStyle) -> Self {
        self.overlay = self.overlay.with_style(style);
        self
    }

    /// Set the block (border/title container) for the trigger area.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the block (border/title container) for the overlay.
    pub fn with_dropdown_block(mut self, block: Block<'static>) -> Self {
        self.overlay = self.overlay.with_block(block);
        self
    }

    // --- Option list ---

    /// Replace the option list wholesale.
    ///
    /// Every entry gets a fresh contiguous index in sequence order. In
    /// single-selection mode the selection is re-derived from the `selected`
    /// flags; when several are flagged the last one wins and the rest are
    /// cleared.
    pub fn set_options(&mut self, options: Vec<OptionData>) {
        self.list.set_options(options);
        self.rederive_selection();
    }

    /// Read-only projection of the current options.
    pub fn options(&self) -> &[OptionData] {
        self.list.options()
    }

    /// Rebuild the option list from a source sequence.
    ///
    /// Nodes not recognized as option-bearing are skipped, order otherwise
    /// preserved. Returns the `(index, value)` of every node marked selected
    /// at ingestion time; in single-selection mode the controller adopts the
    /// last of them as the current selection.
    pub fn ingest(&mut self, nodes: impl IntoIterator<Item = SourceNode>) -> Vec<(usize, String)> {
        let selected = self.list.ingest(nodes);
        self.rederive_selection();
        selected
    }

    fn rederive_selection(&mut self) {
        if self.multiple {
            self.selected = None;
        } else {
            let last = self
                .list
                .options()
                .iter()
                .rposition(|opt| opt.selected);
            if let Some(index) = last {
                self.list.select_only(index);
            }
            self.selected = last;
        }
        self.active = self.selected;
        self.scroll.reset();
    }

    // --- Filter ---

    /// Set the combobox filter method.
    pub fn set_filter(&mut self, method: FilterMethod) {
        self.method = method;
    }

    /// Set the filter method from its external name.
    ///
    /// Unrecognized names degrade to `fuzzy` with a logged warning; this
    /// never fails.
    pub fn set_filter_str(&mut self, method: &str) {
        self.method = FilterMethod::parse_lossy(method);
    }

    /// The active filter method.
    pub fn filter(&self) -> FilterMethod {
        self.method
    }

    /// The current typed filter pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Set the filter pattern programmatically.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
        self.reset_active_to_first_match();
    }

    /// The options currently visible in the dropdown, paired with their
    /// indices in the full list.
    ///
    /// Recomputed on each call: the full list outside combobox mode or when
    /// the pattern is empty, otherwise the label-filtered subsequence.
    pub fn filtered_options(&self) -> Vec<(usize, &OptionData)> {
        if !self.combobox || self.pattern.is_empty() {
            self.list.options().iter().enumerate().collect()
        } else {
            self.list.filtered(&self.pattern, self.method)
        }
    }

    fn reset_active_to_first_match(&mut self) {
        let first = self.filtered_options().first().map(|(i, _)| *i);
        self.active = first;
        self.scroll.reset();
    }

    // --- Selection ---

    /// Index of the currently selected option, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Value of the currently selected option, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.list.get(i))
            .map(|opt| opt.value.as_str())
    }

    /// Index of the option highlighted for keyboard navigation.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn select_prev(&mut self) -> Command<Message> {
        match self.selected {
            Some(i) if i > 0 && !self.multiple => self.apply_selection(i - 1),
            _ => Command::none(),
        }
    }

    fn select_next(&mut self) -> Command<Message> {
        if self.multiple {
            return Command::none();
        }
        match self.selected {
            None if !self.list.is_empty() => self.apply_selection(0),
            Some(i) if i + 1 < self.list.len() => self.apply_selection(i + 1),
            _ => Command::none(),
        }
    }

    fn apply_selection(&mut self, index: usize) -> Command<Message> {
        self.list.select_only(index);
        self.selected = Some(index);
        self.active = Some(index);
        self.follow_active();
        let value = self
            .list
            .get(index)
            .map(|opt| opt.value.clone())
            .unwrap_or_default();
        Command::message(Message::Changed(index, value))
    }

    fn follow_active(&mut self) {
        let (row, count) = {
            let rows = self.filtered_options();
            let row = self
                .active
                .and_then(|active| rows.iter().position(|(i, _)| *i == active));
            (row, rows.len())
        };
        if let Some(row) = row {
            self.scroll.ensure_visible(row, count);
        }
    }

    // --- Dropdown visibility & outside observation ---

    /// Whether the dropdown surface is currently expanded.
    ///
    /// This is the externally observable expanded/collapsed indicator, also
    /// reflected by the trigger arrow.
    pub fn is_expanded(&self) -> bool {
        self.dropdown_visible
    }

    /// Whether the widget currently observes pointer activity outside its
    /// bounds.
    pub fn is_watching_outside(&self) -> bool {
        self.watching_outside
    }

    /// Show or hide the dropdown surface.
    ///
    /// Becoming visible acquires the outside-pointer observation (a
    /// mouse-capture request for the host); becoming hidden releases it. The
    /// acquisition is guarded: repeated `toggle_dropdown(true)` calls request
    /// capture exactly once.
    pub fn toggle_dropdown(&mut self, visible: bool) -> Command<Message> {
        self.dropdown_visible = visible;
        if visible {
            self.active = self.active.or(self.selected);
            self.follow_active();
            if !self.watching_outside {
                self.watching_outside = true;
                return Command::enable_mouse_capture();
            }
        } else {
            self.overlay_geometry.set(None);
            if self.watching_outside {
                self.watching_outside = false;
                return Command::disable_mouse();
            }
        }
        Command::none()
    }

    /// React to pointer activity anywhere on screen.
    ///
    /// Closes an open dropdown (and releases the outside observation) when
    /// the press lands outside the widget's rendered bounds — trigger row
    /// plus open overlay. A press inside those bounds is a no-op here.
    pub fn handle_outside_activity(&mut self, position: Position) -> Command<Message> {
        if !self.dropdown_visible || self.hit_test(position) {
            return Command::none();
        }
        self.toggle_dropdown(false)
    }

    fn hit_test(&self, position: Position) -> bool {
        if self.trigger_area.get().contains(position) {
            return true;
        }
        matches!(self.overlay_geometry.get(), Some(geom) if geom.area.contains(position))
    }

    /// Route a mouse event: open on a trigger press, select on an overlay row
    /// press, dismiss on an outside press.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Command<Message> {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Command::none();
        }
        let position = Position::new(event.column, event.row);

        if !self.dropdown_visible {
            if self.trigger_area.get().contains(position) {
                return self.toggle_dropdown(true);
            }
            return Command::none();
        }

        if let Some(geom) = self.overlay_geometry.get() {
            if geom.inner.contains(position) {
                let row = (position.y - geom.inner.y) as usize + self.scroll.offset();
                let target = self.filtered_options().get(row).map(|&(index, _)| index);
                if let Some(index) = target {
                    let changed = if self.multiple {
                        Command::none()
                    } else {
                        self.apply_selection(index)
                    };
                    return Command::batch([changed, self.toggle_dropdown(false)]);
                }
                return Command::none();
            }
        }

        self.handle_outside_activity(position)
    }

    // --- Focus & lifecycle ---

    /// Give the select keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Mark the widget as mounted in a rendered hierarchy.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Unmount the widget: closes the dropdown and releases the outside
    /// observation so no registration outlives the widget.
    pub fn detach(&mut self) -> Command<Message> {
        self.attached = false;
        self.focus = false;
        self.toggle_dropdown(false)
    }

    /// Whether the widget is currently mounted.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // --- Keyboard state machine ---

    // Space, ArrowUp, and ArrowDown are always consumed, whether or not a
    // transition fires. In combobox mode printable characters (space
    // included) edit the pattern instead of opening the dropdown.
    fn on_key(&mut self, key: KeyEvent) -> Command<Message> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => self.toggle_dropdown(!self.dropdown_visible),
            (KeyCode::Esc, _) | (KeyCode::Tab, _) => self.toggle_dropdown(false),
            (KeyCode::Up, _) => self.select_prev(),
            (KeyCode::Down, _) => self.select_next(),
            (KeyCode::Backspace, _) if self.combobox => {
                self.pattern.pop();
                self.reset_active_to_first_match();
                Command::none()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if self.combobox => {
                self.pattern.push(c);
                self.reset_active_to_first_match();
                self.toggle_dropdown(true)
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => self.toggle_dropdown(true),
            _ => Command::none(),
        }
    }
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.on_key(key),
            Message::Mouse(event) => self.handle_mouse(event),
            Message::Open => self.toggle_dropdown(true),
            Message::Close => self.toggle_dropdown(false),
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.trigger_area.set(area);

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        let display = if self.combobox && self.dropdown_visible && !self.pattern.is_empty() {
            Span::styled(self.pattern.clone(), self.style.value)
        } else if let Some(value) = self.selected.and_then(|i| self.list.get(i)) {
            Span::styled(value.label.clone(), self.style.value)
        } else {
            Span::styled(self.placeholder.clone(), self.style.placeholder)
        };

        let arrow = if self.dropdown_visible { " ▾" } else { " ▸" };
        let line = Line::from(vec![display, Span::styled(arrow, self.style.arrow)]);
        frame.render_widget(Paragraph::new(line), inner);

        if self.dropdown_visible {
            let filtered = self.filtered_options();
            let rows: Vec<&OptionData> = filtered.iter().map(|(_, opt)| *opt).collect();
            let active_row = self
                .active
                .and_then(|a| filtered.iter().position(|(i, _)| *i == a));
            let geom = self.overlay.render(
                frame,
                area,
                &rows,
                active_row,
                self.scroll.offset(),
                self.max_visible,
            );
            self.overlay_geometry.set(geom);
        } else {
            self.overlay_geometry.set(None);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use pick_core::command::{Effect, MouseMode, TerminalCommand};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn fruits() -> Select {
        let mut select = Select::new(["Apple", "Banana", "Cherry"]);
        select.focus();
        select
    }

    /// Render once into a test terminal so hit-test geometry is populated.
    fn draw(select: &Select) {
        let backend = TestBackend::new(30, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| select.view(frame, Rect::new(0, 0, 30, 1)))
            .unwrap();
    }

    #[test]
    fn enter_toggles_dropdown() {
        let mut select = fruits();
        let cmd = select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(select.is_expanded());
        assert_eq!(
            cmd.into_terminal(),
            Some(TerminalCommand::EnableMouseCapture(MouseMode::CellMotion))
        );

        let cmd = select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(!select.is_expanded());
        assert_eq!(cmd.into_terminal(), Some(TerminalCommand::DisableMouse));
    }

    #[test]
    fn space_opens_dropdown() {
        let mut select = fruits();
        select.update(Message::KeyPress(key(KeyCode::Char(' '))));
        assert!(select.is_expanded());
        // Space never closes
        select.update(Message::KeyPress(key(KeyCode::Char(' '))));
        assert!(select.is_expanded());
    }

    #[test]
    fn esc_and_tab_close_dropdown() {
        for code in [KeyCode::Esc, KeyCode::Tab] {
            let mut select = fruits();
            select.update(Message::KeyPress(key(KeyCode::Enter)));
            assert!(select.is_expanded());
            select.update(Message::KeyPress(key(code)));
            assert!(!select.is_expanded());
        }
    }

    #[test]
    fn arrow_down_selects_first_when_nothing_selected() {
        let mut select = fruits();
        assert_eq!(select.selected_index(), None);
        let cmd = select.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(select.selected_index(), Some(0));
        assert_eq!(select.active_index(), Some(0));
        match cmd.into_message() {
            Some(Message::Changed(0, value)) => assert_eq!(value, "Apple"),
            other => panic!("expected Changed(0, Apple), got {other:?}"),
        }
    }

    #[test]
    fn arrow_down_at_last_index_is_noop() {
        let mut select = fruits();
        for _ in 0..3 {
            select.update(Message::KeyPress(key(KeyCode::Down)));
        }
        assert_eq!(select.selected_index(), Some(2));

        let cmd = select.update(Message::KeyPress(key(KeyCode::Down)));
        assert!(cmd.is_none());
        assert_eq!(select.selected_index(), Some(2));
    }

    #[test]
    fn arrow_up_at_first_index_is_noop() {
        let mut select = fruits();
        select.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(select.selected_index(), Some(0));

        let cmd = select.update(Message::KeyPress(key(KeyCode::Up)));
        assert!(cmd.is_none());
        assert_eq!(select.selected_index(), Some(0));
    }

    #[test]
    fn arrow_up_with_no_selection_is_noop() {
        let mut select = fruits();
        let cmd = select.update(Message::KeyPress(key(KeyCode::Up)));
        assert!(cmd.is_none());
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn arrows_move_selection_and_flags() {
        let mut select = fruits();
        select.update(Message::KeyPress(key(KeyCode::Down)));
        let cmd = select.update(Message::KeyPress(key(KeyCode::Down)));
        match cmd.into_message() {
            Some(Message::Changed(1, value)) => assert_eq!(value, "Banana"),
            other => panic!("expected Changed(1, Banana), got {other:?}"),
        }
        let flags: Vec<bool> = select.options().iter().map(|o| o.selected).collect();
        assert_eq!(flags, vec![false, true, false]);

        let cmd = select.update(Message::KeyPress(key(KeyCode::Up)));
        match cmd.into_message() {
            Some(Message::Changed(0, value)) => assert_eq!(value, "Apple"),
            other => panic!("expected Changed(0, Apple), got {other:?}"),
        }
    }

    #[test]
    fn empty_list_navigation_is_noop() {
        let mut select = Select::new(Vec::<OptionData>::new());
        select.focus();
        let cmd = select.update(Message::KeyPress(key(KeyCode::Down)));
        assert!(cmd.is_none());
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn unfocused_select_ignores_keys() {
        let mut select = Select::new(["Apple"]);
        let cmd = select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());
        assert!(!select.is_expanded());
    }

    #[test]
    fn multiple_mode_never_emits_changed() {
        let mut select = Select::new(["Apple", "Banana"]).with_multiple(true);
        select.focus();
        let cmd = select.update(Message::KeyPress(key(KeyCode::Down)));
        assert!(cmd.is_none());
        assert_eq!(select.selected_index(), None);
        // Visibility keys still work
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(select.is_expanded());
    }

    #[test]
    fn toggle_dropdown_is_idempotent_on_acquisition() {
        let mut select = fruits();
        let first = select.toggle_dropdown(true);
        assert_eq!(
            first.into_terminal(),
            Some(TerminalCommand::EnableMouseCapture(MouseMode::CellMotion))
        );
        assert!(select.is_watching_outside());

        let second = select.toggle_dropdown(true);
        assert!(second.is_none());

        let release = select.toggle_dropdown(false);
        assert_eq!(release.into_terminal(), Some(TerminalCommand::DisableMouse));
        assert!(!select.is_watching_outside());

        let again = select.toggle_dropdown(false);
        assert!(again.is_none());
    }

    #[test]
    fn detach_releases_observation() {
        let mut select = fruits();
        select.attach();
        select.toggle_dropdown(true);
        let cmd = select.detach();
        assert_eq!(cmd.into_terminal(), Some(TerminalCommand::DisableMouse));
        assert!(!select.is_expanded());
        assert!(!select.is_attached());

        let cmd = select.detach();
        assert!(cmd.is_none());
    }

    #[test]
    fn press_inside_widget_keeps_dropdown_open() {
        let mut select = fruits();
        select.toggle_dropdown(true);
        draw(&select);

        // On the trigger line
        select.update(Message::Mouse(press(2, 0)));
        assert!(select.is_expanded());
    }

    #[test]
    fn press_outside_widget_closes_dropdown() {
        let mut select = fruits();
        select.toggle_dropdown(true);
        draw(&select);

        let cmd = select.update(Message::Mouse(press(25, 10)));
        assert!(!select.is_expanded());
        assert_eq!(cmd.into_terminal(), Some(TerminalCommand::DisableMouse));
    }

    #[test]
    fn press_on_overlay_row_selects_it() {
        let mut select = fruits();
        select.toggle_dropdown(true);
        draw(&select);

        // Trigger occupies row 0; overlay rows start at row 1.
        let cmd = select.update(Message::Mouse(press(2, 2)));
        assert_eq!(select.selected_index(), Some(1));
        assert!(!select.is_expanded());

        let changed = cmd
            .into_effects()
            .into_iter()
            .find_map(|effect| match effect {
                Effect::Message(msg) => Some(msg),
                Effect::Terminal(_) => None,
            })
            .expect("change notification");
        match changed {
            Message::Changed(1, value) => assert_eq!(value, "Banana"),
            other => panic!("expected Changed(1, Banana), got {other:?}"),
        }
    }

    #[test]
    fn press_on_closed_trigger_opens() {
        let mut select = fruits();
        draw(&select);
        select.update(Message::Mouse(press(2, 0)));
        assert!(select.is_expanded());
    }

    #[test]
    fn outside_activity_when_closed_is_noop() {
        let mut select = fruits();
        let cmd = select.handle_outside_activity(Position::new(50, 50));
        assert!(cmd.is_none());
    }

    #[test]
    fn combobox_typing_filters_options() {
        let mut select = fruits().with_combobox(true);
        select.focus();
        select.update(Message::KeyPress(key(KeyCode::Char('a'))));
        select.update(Message::KeyPress(key(KeyCode::Char('n'))));

        assert_eq!(select.pattern(), "an");
        assert!(select.is_expanded());
        let labels: Vec<&str> = select
            .filtered_options()
            .iter()
            .map(|(_, opt)| opt.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Banana"]); // fuzzy, case-insensitive

        select.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert_eq!(select.pattern(), "a");
    }

    #[test]
    fn empty_pattern_shows_full_list() {
        let select = fruits().with_combobox(true);
        assert_eq!(select.filtered_options().len(), 3);
    }

    #[test]
    fn pattern_is_ignored_outside_combobox_mode() {
        let mut select = fruits();
        select.set_pattern("zzz");
        assert_eq!(select.filtered_options().len(), 3);
    }

    #[test]
    fn invalid_filter_method_degrades_to_fuzzy() {
        let mut select = fruits();
        select.set_filter(FilterMethod::Contains);
        select.set_filter_str("regex");
        assert_eq!(select.filter(), FilterMethod::Fuzzy);
    }

    #[test]
    fn set_options_rederives_selection_last_flag_wins() {
        let mut select = fruits();
        select.set_options(vec![
            OptionData::new("a").selected(true),
            OptionData::new("b"),
            OptionData::new("c").selected(true),
        ]);
        assert_eq!(select.selected_index(), Some(2));
        let flags: Vec<bool> = select.options().iter().map(|o| o.selected).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn ingest_assigns_sequential_indices() {
        let mut select = Select::new(Vec::<OptionData>::new());
        let selected = select.ingest(vec![
            SourceNode::other("divider"),
            SourceNode::option("one"),
            SourceNode::option("two").with_value("2").selected(true),
            SourceNode::option("three"),
        ]);
        assert_eq!(select.options().len(), 3);
        assert_eq!(selected, vec![(1, "2".to_string())]);
        assert_eq!(select.selected_index(), Some(1));
        assert_eq!(select.selected_value(), Some("2"));
    }

    #[test]
    fn selected_value_reflects_navigation() {
        let mut select = fruits();
        assert_eq!(select.selected_value(), None);
        select.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(select.selected_value(), Some("Apple"));
    }
}
