use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A self-contained widget that renders into a given [`Rect`] area.
///
/// Each widget owns its internal state, reacts to messages through
/// [`update`](Component::update), and draws itself through
/// [`view`](Component::view). A parent decides *where* each child renders by
/// passing it a sub-region of the frame, and lifts child messages into its
/// own message type with [`Command::map`].
///
/// All processing is synchronous: an update runs to completion inside one
/// input callback, and the returned [`Command`] describes any side effect the
/// host should carry out afterwards.
///
/// # Composition pattern
///
/// ```rust,ignore
/// use pick_core::{Component, Command};
/// use ratatui::layout::Rect;
/// use ratatui::Frame;
///
/// struct Form { country: pick_widgets::select::Select }
///
/// enum FormMsg { Country(pick_widgets::select::Message) }
///
/// impl Component for Form {
///     type Message = FormMsg;
///
///     fn update(&mut self, msg: FormMsg) -> Command<FormMsg> {
///         match msg {
///             FormMsg::Country(m) => self.country.update(m).map(FormMsg::Country),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame, area: Rect) {
///         self.country.view(frame, area);
///     }
/// }
/// ```
pub trait Component {
    /// The widget's internal message type.
    ///
    /// Parents typically wrap this in one of their own message variants so
    /// that events can be routed to the correct child.
    type Message;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle;
    /// overlays (dropdown surfaces) may extend past it only by drawing
    /// adjacent rows the parent left free.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this widget currently has focus.
    ///
    /// A hint for input routing: a parent can query `focused()` to decide
    /// which child should receive keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
