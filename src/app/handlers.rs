//! Terminal event handling for the App.
//!
//! Routing order for keys: Ctrl+C always quits, then an open dialog gets the
//! key, then the search box when focused, then the feed bindings.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::interaction::handle_click_action;
use crate::widgets::DraftInput;

use super::{App, Focus};

impl App {
    /// Dispatch any terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Any key press likely changes visible state
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.has_dialog() {
            self.handle_dialog_key(key);
        } else if self.focus == Focus::Search {
            self.handle_search_key(key);
        } else {
            self.handle_feed_key(key);
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dismiss_dialog(),
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(draft) = self.active_draft_mut() {
                    draft.insert_newline();
                }
            }
            KeyCode::Enter => {
                if self.reply.is_active() {
                    self.submit_reply();
                } else {
                    self.submit_compose();
                }
            }
            _ => {
                if let Some(draft) = self.active_draft_mut() {
                    apply_edit_key(draft, key, true);
                }
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.blur_search(),
            _ => {
                if apply_edit_key(&mut self.search, key, false) {
                    self.sync_query();
                }
            }
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) {
        // Shifted letters arrive with SHIFT set; only Ctrl/Alt disqualify
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('l') => self.like_selected(),
            KeyCode::Char('t') => self.retweet_selected(),
            KeyCode::Char('r') | KeyCode::Enter => self.reply_to_selected(),
            KeyCode::Char('c') => self.open_compose(),
            KeyCode::Char('/') => self.focus_search(),
            KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char(c @ '1'..='3') => {
                self.toggle_follow_suggestion(c as usize - '0' as usize);
            }
            KeyCode::Esc if !self.search.is_empty() => self.clear_query(),
            _ => {}
        }
    }

    /// Insert pasted text into the focused draft.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(draft) = self.active_draft_mut() {
            draft.insert_str(text);
            self.mark_dirty();
        } else if self.focus == Focus::Search {
            // The search box is a single line
            let flat: String = text
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            self.search.insert_str(&flat);
            self.sync_query();
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown if !self.has_dialog() => {
                self.select_next();
                self.mark_dirty();
            }
            MouseEventKind::ScrollUp if !self.has_dialog() => {
                self.select_previous();
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Draft of the open dialog, reply first.
    fn active_draft_mut(&mut self) -> Option<&mut DraftInput> {
        if self.reply.is_active() {
            self.reply.draft_mut()
        } else {
            self.compose.draft_mut()
        }
    }
}

/// Apply an editing key to `draft`. Returns true if the key was consumed.
///
/// `Ctrl+J` inserts a newline when `multiline` is set.
fn apply_edit_key(draft: &mut DraftInput, key: KeyEvent, multiline: bool) -> bool {
    let ctrl_or_alt = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('j') if multiline && key.modifiers.contains(KeyModifiers::CONTROL) => {
            draft.insert_newline();
        }
        KeyCode::Char(c) if !ctrl_or_alt => draft.insert_char(c),
        KeyCode::Backspace => draft.backspace(),
        KeyCode::Delete => draft.delete_char(),
        KeyCode::Left => draft.move_cursor_left(),
        KeyCode::Right => draft.move_cursor_right(),
        KeyCode::Home => draft.move_cursor_home(),
        KeyCode::End => draft.move_cursor_end(),
        _ => return false,
    }
    true
}
