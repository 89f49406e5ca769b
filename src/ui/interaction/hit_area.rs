//! Hit area registry for mouse interaction.
//!
//! Components register clickable regions while rendering, and the event loop
//! queries the registry to decide what a click does.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::models::PostId;

/// What clicking a hit area does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Sidebar and main column
    /// Compose button or the "What's happening?" prompt
    OpenCompose,
    /// Sun/moon button
    ToggleTheme,
    /// Search box in the header
    FocusSearch,
    /// Follow/Following button of a suggestion, by handle
    ToggleFollow(String),

    // Post cards (index is into the filtered feed)
    SelectPost(usize),
    Like(PostId),
    Retweet(PostId),
    Reply(PostId),

    // Dialogs
    /// Tweet button
    SubmitCompose,
    /// Reply button
    SubmitReply,
    /// Dimmed backdrop around a dialog
    DismissDialog,
    /// Dialog surface; absorbs clicks so they don't reach the backdrop
    DialogBody,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style layered on while the mouse is over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of the hit areas drawn in the current frame.
///
/// Cleared at the start of every render. Later registrations sit on top of
/// earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
    /// Last known mouse position, kept across frames
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. The pointer position is kept so hover can be
    /// recomputed as areas are registered again.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let area = HitArea {
            rect,
            action,
            hover_style,
        };
        if let Some((x, y)) = self.pointer {
            if area.contains(x, y) {
                self.hovered = Some(self.areas.len());
            }
        }
        self.areas.push(area);
    }

    /// The action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Track the mouse position. Returns true if the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self
            .areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
