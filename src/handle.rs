use egui::{Align, Rect, Ui};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Start,
    End,
}

/// Scroll control of the widget showing the list. [ItemStore](crate::ItemStore) drives it after
/// adds and removes according to its [ScrollPolicy].
pub trait ScrollHandle {
    fn scroll_to_start(&mut self);
    fn scroll_to_end(&mut self);

    fn scroll_to(&mut self, target: ScrollTarget) {
        match target {
            ScrollTarget::Start => self.scroll_to_start(),
            ScrollTarget::End => self.scroll_to_end(),
        }
    }
}

/// No scroll control attached
impl ScrollHandle for () {
    fn scroll_to_start(&mut self) {}
    fn scroll_to_end(&mut self) {}
}

/// When the list scrolls by itself after its length changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollPolicy {
    /// Only scroll when asked to
    #[default]
    Manual,
    /// Scroll to the end whenever an item was added
    EndOnGrowth,
    /// Scroll to the end after every length change while the list is short
    EndWhileShort,
}

impl ScrollPolicy {
    pub fn target(
        self,
        len_before: usize,
        len_after: usize,
        short_list_len: usize,
    ) -> Option<ScrollTarget> {
        match self {
            ScrollPolicy::Manual => None,
            ScrollPolicy::EndOnGrowth if len_after > len_before => Some(ScrollTarget::End),
            ScrollPolicy::EndWhileShort if len_after != len_before && len_after <= short_list_len => {
                Some(ScrollTarget::End)
            }
            _ => None,
        }
    }
}

/// [ScrollHandle] for an egui `ScrollArea`. Requests are kept until [EguiScroll::ui] runs inside
/// the scroll area on the next frame.
///
/// ```rust,no_run
/// use dnd_order::{EguiScroll, ItemStore};
///
/// fn list_ui(ui: &mut egui::Ui, store: &mut ItemStore<EguiScroll>) {
///     egui::ScrollArea::vertical().show(ui, |ui| {
///         for item in store.items().iter() {
///             ui.label(item.name.as_str());
///         }
///         store.scroll_handle_mut().ui(ui);
///     });
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct EguiScroll {
    pending: Option<ScrollTarget>,
}

impl EguiScroll {
    pub fn pending(&self) -> Option<ScrollTarget> {
        self.pending
    }

    /// Applies the pending request, if any. Call after the rows were added to `ui`.
    pub fn ui(&mut self, ui: &mut Ui) {
        let Some(target) = self.pending.take() else {
            return;
        };

        let content = ui.min_rect();
        let (edge, align) = match target {
            ScrollTarget::Start => (
                Rect::from_min_max(content.left_top(), content.right_top()),
                Align::TOP,
            ),
            ScrollTarget::End => (
                Rect::from_min_max(content.left_bottom(), content.right_bottom()),
                Align::BOTTOM,
            ),
        };
        ui.scroll_to_rect(edge, Some(align));
    }
}

impl ScrollHandle for EguiScroll {
    fn scroll_to_start(&mut self) {
        self.pending = Some(ScrollTarget::Start);
    }

    fn scroll_to_end(&mut self) {
        self.pending = Some(ScrollTarget::End);
    }
}
