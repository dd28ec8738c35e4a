//! ViewerApp — the TEA model.
//!
//! All state lives here. Update receives TuiMessages, mutates state.
//! View reads state to produce ratatui widgets. No side effects in view.
//!
//! The only session state is the selected key (plus scroll and menu
//! state). The page itself is recomputed in full on every selection.

use tracing::debug;
use tui_menu::{MenuEvent, MenuItem, MenuState};

use crate::catalog::{Catalog, CatalogResult, ContextType};
use crate::page::{self, Page};

use super::event::TuiMessage;

/// Actions that can be triggered from the menu bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    SelectContext(&'static str),
    ShowShortcuts,
    Quit,
}

/// Dropdown label for the context type at `index`; the selected one is checked.
pub fn context_menu_label(index: usize, ctx: &ContextType, selected: &str) -> String {
    let marker = if ctx.key == selected { " \u{2713}" } else { "" };
    format!("{}  {}{marker}", index + 1, ctx.label)
}

/// Build the menu item tree for the menu bar.
pub fn build_menu_items(catalog: &Catalog, selected: &str) -> Vec<MenuItem<MenuAction>> {
    let context_items: Vec<MenuItem<MenuAction>> = catalog
        .entries()
        .iter()
        .enumerate()
        .map(|(i, ctx)| {
            MenuItem::item(
                context_menu_label(i, ctx, selected),
                MenuAction::SelectContext(ctx.key),
            )
        })
        .collect();

    vec![
        MenuItem::group("File", vec![MenuItem::item("Quit  ^C", MenuAction::Quit)]),
        MenuItem::group(page::SELECT_PROMPT, context_items),
        MenuItem::group(
            "Help",
            vec![MenuItem::item("Shortcuts  ?", MenuAction::ShowShortcuts)],
        ),
    ]
}

/// The main TUI application state (TEA model).
pub struct ViewerApp {
    catalog: &'static Catalog,
    /// Index of the selected context type, in catalog order.
    pub selected: usize,
    /// Page for the current selection.
    pub page: Page,
    /// Vertical scroll offset of the page pane.
    pub scroll: u16,
    /// Largest useful scroll offset (set by renderer).
    pub max_scroll: u16,
    /// Viewport height of the page pane (set by renderer, used by PageUp/PageDown).
    pub viewport_height: u16,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Set whenever state changed since the last frame.
    pub needs_redraw: bool,
    /// Whether the shortcuts overlay is visible.
    pub show_help: bool,
    /// Menu bar state (tui-menu).
    pub menu_state: MenuState<MenuAction>,
    /// Whether the menu bar has keyboard focus (dropdowns visible).
    pub menu_active: bool,
}

impl ViewerApp {
    /// Create a viewer showing the first catalog entry.
    pub fn new(catalog: &'static Catalog) -> CatalogResult<Self> {
        Self::with_key(catalog, catalog.first().key)
    }

    /// Create a viewer with `key` pre-selected.
    pub fn with_key(catalog: &'static Catalog, key: &str) -> CatalogResult<Self> {
        let page = page::render(catalog, Some(key))?;
        let selected = catalog.position(page.key).unwrap_or(0);
        Ok(Self {
            catalog,
            selected,
            menu_state: MenuState::new(build_menu_items(catalog, page.key)),
            page,
            scroll: 0,
            max_scroll: 0,
            viewport_height: 20, // sensible default, updated by renderer
            should_quit: false,
            needs_redraw: true,
            show_help: false,
            menu_active: false,
        })
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// The currently selected context type.
    pub fn current(&self) -> &'static ContextType {
        &self.catalog.entries()[self.selected]
    }

    /// Apply a message. An error here means a key outside the catalog
    /// reached the app, which only a programming defect can cause.
    pub fn update(&mut self, msg: TuiMessage) -> CatalogResult<()> {
        match msg {
            TuiMessage::Input(key) => super::input::handle_key(self, key)?,
            TuiMessage::Select(key) => self.select_key(&key)?,
            TuiMessage::Resize => self.needs_redraw = true,
            TuiMessage::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Select a context type by key and re-render the whole page.
    pub fn select_key(&mut self, key: &str) -> CatalogResult<()> {
        let page = page::render(self.catalog, Some(key))?;
        let selected = self.catalog.position(page.key).unwrap_or(0);
        debug!(key = page.key, "context selected");

        self.selected = selected;
        self.page = page;
        self.scroll = 0;
        self.needs_redraw = true;
        self.rebuild_menu();
        Ok(())
    }

    /// Select by catalog position. Positions past the end are ignored.
    pub fn select_index(&mut self, index: usize) -> CatalogResult<()> {
        let catalog = self.catalog;
        match catalog.entries().get(index) {
            Some(ctx) => self.select_key(ctx.key),
            None => Ok(()),
        }
    }

    /// Select the previous context type (clamped at the first).
    pub fn select_prev(&mut self) -> CatalogResult<()> {
        if self.selected > 0 {
            self.select_index(self.selected - 1)?;
        }
        Ok(())
    }

    /// Select the next context type (clamped at the last).
    pub fn select_next(&mut self) -> CatalogResult<()> {
        if self.selected + 1 < self.catalog.len() {
            self.select_index(self.selected + 1)?;
        }
        Ok(())
    }

    /// Rebuild the menu so the check mark follows the selection.
    pub fn rebuild_menu(&mut self) {
        self.menu_state = MenuState::new(build_menu_items(self.catalog, self.page.key));
        self.menu_active = false;
    }

    /// Give the menu bar keyboard focus.
    pub fn open_menu(&mut self) {
        self.menu_state.activate();
        self.menu_active = true;
        self.needs_redraw = true;
    }

    /// Close any open dropdown and return focus to the page.
    pub fn close_menu(&mut self) {
        self.menu_state.reset();
        self.menu_active = false;
        self.needs_redraw = true;
    }

    /// Consume events emitted by the menu widget and apply them.
    pub fn drain_menu_events(&mut self) -> CatalogResult<()> {
        let mut actions = Vec::new();
        for event in self.menu_state.drain_events() {
            match event {
                MenuEvent::Selected(action) => actions.push(action),
            }
        }
        if !actions.is_empty() {
            self.close_menu();
        }
        for action in actions {
            self.handle_menu_action(action)?;
        }
        Ok(())
    }

    /// Apply an action picked from the menu bar.
    pub fn handle_menu_action(&mut self, action: MenuAction) -> CatalogResult<()> {
        match action {
            MenuAction::SelectContext(key) => self.select_key(key)?,
            MenuAction::ShowShortcuts => {
                self.show_help = true;
                self.needs_redraw = true;
            }
            MenuAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Scroll page down one line.
    pub fn scroll_down(&mut self) {
        self.scroll_to(self.scroll.saturating_add(1));
    }

    /// Scroll page up one line.
    pub fn scroll_up(&mut self) {
        self.scroll_to(self.scroll.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        let step = self.viewport_height.saturating_sub(1).max(1);
        self.scroll_to(self.scroll.saturating_add(step));
    }

    pub fn page_up(&mut self) {
        let step = self.viewport_height.saturating_sub(1).max(1);
        self.scroll_to(self.scroll.saturating_sub(step));
    }

    pub fn scroll_top(&mut self) {
        self.scroll_to(0);
    }

    fn scroll_to(&mut self, offset: u16) {
        let clamped = offset.min(self.max_scroll);
        if clamped != self.scroll {
            self.scroll = clamped;
            self.needs_redraw = true;
        }
    }
}
