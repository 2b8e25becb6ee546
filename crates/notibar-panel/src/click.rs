use notibar_bridge::mark::MarkRequest;

/// The element a click landed on.
///
/// Everything except [`ClickTarget::ToggleButton`] and
/// [`ClickTarget::Outside`] lives inside the dropdown panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The notification button carrying the badge.
    ToggleButton,
    /// A notification row of list `list`.
    Item { list: usize, item_id: String },
    /// The "mark all" button of list `list`.
    BulkButton { list: usize },
    /// Any other part of the open panel.
    PanelBody,
    /// Anything outside the panel and the button. Clicks here bubble up to
    /// the window root.
    Outside,
}

impl ClickTarget {
    /// Whether the target is part of the dropdown panel.
    pub fn is_inside_panel(&self) -> bool {
        matches!(
            self,
            ClickTarget::Item { .. } | ClickTarget::BulkButton { .. } | ClickTarget::PanelBody
        )
    }

    /// Whether a click on this target keeps bubbling to the window root.
    ///
    /// The button stops propagation so it never also triggers the outside
    /// click handler, and the panel stops it for everything inside it.
    pub fn reaches_root(&self) -> bool {
        matches!(self, ClickTarget::Outside)
    }
}

/// What handling a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The panel visibility flipped to `visible`.
    Toggled { visible: bool },
    /// The panel was open and has been closed.
    Closed,
    /// A mark request has to be posted.
    Request(MarkRequest),
    /// Nothing changed and nothing has to be sent.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_outside_clicks_reach_the_root() {
        let stopped = [
            ClickTarget::ToggleButton,
            ClickTarget::Item {
                list: 0,
                item_id: "1".to_owned(),
            },
            ClickTarget::BulkButton { list: 0 },
            ClickTarget::PanelBody,
        ];
        assert!(stopped.iter().all(|target| !target.reaches_root()));
        assert!(ClickTarget::Outside.reaches_root());
        assert!(!ClickTarget::Outside.is_inside_panel());
    }
}
