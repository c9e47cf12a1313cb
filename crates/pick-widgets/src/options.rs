//! Option data model and the option list owned by [`Select`](crate::select::Select).
//!
//! The list is rebuilt wholesale — by [`OptionList::set_options`] or by
//! ingesting source nodes — and an option's index is simply its position in
//! the list, contiguous from zero until the next rebuild. Selection flags are
//! flipped in place by the controller without rebuilding.

use crate::filter::FilterMethod;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionData {
    /// Display text.
    pub label: String,
    /// String identity; defaults to the label.
    pub value: String,
    /// Optional secondary text shown next to the label.
    pub description: Option<String>,
    /// Whether this option is currently selected.
    pub selected: bool,
}

impl OptionData {
    /// Create an option whose value equals its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
            description: None,
            selected: false,
        }
    }

    /// Set an explicit value distinct from the label.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the secondary description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the option as initially selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl From<&str> for OptionData {
    fn from(label: &str) -> Self {
        OptionData::new(label)
    }
}

impl From<String> for OptionData {
    fn from(label: String) -> Self {
        OptionData::new(label)
    }
}

/// One element of an external source sequence offered for ingestion.
///
/// Mirrors markup-style input: a node has a kind, displayed text, and
/// optional value/description attributes plus a selected flag. Only nodes of
/// kind `"option"` are option-bearing; everything else is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    /// Node kind; `"option"` marks an option-bearing node.
    pub kind: String,
    /// Displayed text, used as the label and as the value fallback.
    pub text: String,
    /// Explicit value attribute.
    pub value: Option<String>,
    /// Description attribute.
    pub description: Option<String>,
    /// Selected flag at ingestion time.
    pub selected: bool,
}

impl SourceNode {
    /// An option-bearing node with the given displayed text.
    pub fn option(text: impl Into<String>) -> Self {
        Self {
            kind: "option".to_string(),
            text: text.into(),
            value: None,
            description: None,
            selected: false,
        }
    }

    /// A node of some other kind, ignored by ingestion.
    pub fn other(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: String::new(),
            value: None,
            description: None,
            selected: false,
        }
    }

    /// Set the explicit value attribute.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the description attribute.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the selected flag.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn is_option(&self) -> bool {
        self.kind == "option"
    }
}

/// Ordered list of options with wholesale-rebuild semantics.
#[derive(Debug, Default)]
pub struct OptionList {
    entries: Vec<OptionData>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list wholesale. An empty input clears it.
    pub fn set_options(&mut self, options: Vec<OptionData>) {
        self.entries = options;
    }

    /// Read-only projection of the current options.
    ///
    /// Positions in the returned slice are the option indices; no separate
    /// index field is exposed.
    pub fn options(&self) -> &[OptionData] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OptionData> {
        self.entries.get(index)
    }

    /// Rebuild the list from a source sequence, keeping only option-bearing
    /// nodes in order.
    ///
    /// Each kept node becomes an option whose value is the explicit value
    /// attribute when present, else the displayed text. Returns the
    /// `(index, value)` of every node that was marked selected at ingestion
    /// time.
    pub fn ingest(&mut self, nodes: impl IntoIterator<Item = SourceNode>) -> Vec<(usize, String)> {
        self.entries = nodes
            .into_iter()
            .filter(SourceNode::is_option)
            .map(|node| {
                let value = node.value.unwrap_or_else(|| node.text.clone());
                OptionData {
                    label: node.text,
                    value,
                    description: node.description,
                    selected: node.selected,
                }
            })
            .collect();

        self.entries
            .iter()
            .enumerate()
            .filter(|(_, opt)| opt.selected)
            .map(|(i, opt)| (i, opt.value.clone()))
            .collect()
    }

    /// Clear every selected flag, then set the one at `index`.
    ///
    /// Out of range is a no-op (everything ends up deselected).
    pub fn select_only(&mut self, index: usize) {
        for opt in &mut self.entries {
            opt.selected = false;
        }
        if let Some(opt) = self.entries.get_mut(index) {
            opt.selected = true;
        }
    }

    /// Set the selected flag of one entry without touching the others.
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(opt) = self.entries.get_mut(index) {
            opt.selected = selected;
        }
    }

    /// Order-preserving subsequence of entries whose label matches `pattern`.
    ///
    /// Recomputed on every call. Pairs each match with its index in the full
    /// list so callers can map a filtered row back to the original option.
    pub fn filtered(&self, pattern: &str, method: FilterMethod) -> Vec<(usize, &OptionData)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, opt)| method.matches(pattern, &opt.label))
            .collect()
    }
}
