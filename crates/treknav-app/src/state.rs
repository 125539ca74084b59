//! Application state (Model in TEA pattern)

use std::sync::Arc;

use serde::Deserialize;
use treknav_core::{resolve_active, ActiveEntry, EntryId, NavNode, NavTree, Route};

use crate::accordion::{accordion_rows, AccordionRow};
use crate::config::{PresentationMode, Settings};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which presentation of the menu is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Horizontal bar with flyout panels
    #[default]
    Desktop,
    /// Hamburger drawer with an accordion
    Mobile,
}

impl Presentation {
    pub fn other(self) -> Self {
        match self {
            Presentation::Desktop => Presentation::Mobile,
            Presentation::Mobile => Presentation::Desktop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Presentation::Desktop => "desktop",
            Presentation::Mobile => "mobile",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Menu UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Open/closed state of the menu, as a state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPhase {
    AllClosed,
    TopOpen(EntryId),
    TopAndSubOpen(EntryId, EntryId),
}

/// Open/closed flags of one navbar.
///
/// At most one top-level and one second-level entry are open at a time.
/// Every operation is total: ids that are not in the tree are accepted and
/// simply have nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuUiState {
    pub open_top: Option<EntryId>,
    pub open_sub: Option<EntryId>,
    pub mobile_drawer_open: bool,
}

impl MenuUiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close `id` if it is the open top-level entry, otherwise switch to it.
    /// Either way the second level collapses.
    pub fn toggle_top_level(&mut self, id: &EntryId) {
        if self.open_top.as_ref() == Some(id) {
            self.open_top = None;
        } else {
            self.open_top = Some(id.clone());
        }
        self.open_sub = None;
    }

    /// Toggle-or-switch among the children of the open top-level entry.
    ///
    /// No-op when no top-level entry is open, or when `id` is not one of
    /// its direct children.
    pub fn toggle_sub_level(&mut self, id: &EntryId) {
        let Some(top) = &self.open_top else {
            return;
        };
        if id.parent().as_ref() != Some(top) {
            return;
        }
        if self.open_sub.as_ref() == Some(id) {
            self.open_sub = None;
        } else {
            self.open_sub = Some(id.clone());
        }
    }

    pub fn toggle_mobile_drawer(&mut self) {
        self.mobile_drawer_open = !self.mobile_drawer_open;
    }

    pub fn close_all(&mut self) {
        self.open_top = None;
        self.open_sub = None;
        self.mobile_drawer_open = false;
    }

    /// Collapse the flyouts, leaving the drawer flag alone.
    pub fn close_flyouts(&mut self) {
        self.open_top = None;
        self.open_sub = None;
    }

    pub fn is_all_closed(&self) -> bool {
        self.open_top.is_none() && self.open_sub.is_none() && !self.mobile_drawer_open
    }

    pub fn is_top_open(&self, id: &EntryId) -> bool {
        self.open_top.as_ref() == Some(id)
    }

    pub fn is_sub_open(&self, id: &EntryId) -> bool {
        self.open_sub.as_ref() == Some(id)
    }

    pub fn phase(&self) -> MenuPhase {
        match (&self.open_top, &self.open_sub) {
            (Some(top), Some(sub)) => MenuPhase::TopAndSubOpen(top.clone(), sub.clone()),
            (Some(top), None) => MenuPhase::TopOpen(top.clone()),
            _ => MenuPhase::AllClosed,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboard Focus
// ─────────────────────────────────────────────────────────────────────────────

/// Which desktop surface has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusColumn {
    #[default]
    Bar,
    /// Panel under the open top-level entry
    Flyout,
    /// Side panel of the open second-level entry
    Side,
}

/// Keyboard cursor. Indices are clamped after every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuFocus {
    pub column: FocusColumn,
    /// Index into the top-level entries
    pub bar: usize,
    /// Index into the open top-level entry's children
    pub flyout: usize,
    /// Index into the open second-level entry's children
    pub side: usize,
    /// Index into the visible accordion rows
    pub row: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete state of one navbar instance.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static navigation tree, shared between navbar instances
    pub tree: Arc<NavTree>,

    pub menu: MenuUiState,

    /// Route the navbar last observed
    pub route: Route,

    pub presentation: Presentation,

    /// Set once the user picks a presentation, so resizes stop overriding it
    pub presentation_locked: bool,

    pub focus: MenuFocus,

    pub settings: Settings,

    pub phase: AppPhase,

    /// Last navigation failure, shown in the status bar until the next route change
    pub last_error: Option<String>,

    /// Entry the pointer opened by hovering; the click that usually follows
    /// must not close it again
    pub hover_opened: Option<EntryId>,
}

impl AppState {
    pub fn new(tree: Arc<NavTree>, settings: Settings, route: Route) -> Self {
        let presentation = match settings.ui.presentation {
            PresentationMode::Mobile => Presentation::Mobile,
            PresentationMode::Desktop | PresentationMode::Auto => Presentation::Desktop,
        };
        Self {
            tree,
            menu: MenuUiState::new(),
            route,
            presentation,
            presentation_locked: false,
            focus: MenuFocus::default(),
            settings,
            phase: AppPhase::Running,
            last_error: None,
            hover_opened: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Highlight status of each top-level entry for the current route.
    pub fn active_top_level(&self) -> Vec<ActiveEntry> {
        resolve_active(&self.tree, &self.route)
    }

    /// Presentation implied by the settings for a terminal `width` columns wide.
    pub fn presentation_for_width(&self, width: u16) -> Presentation {
        match self.settings.ui.presentation {
            PresentationMode::Desktop => Presentation::Desktop,
            PresentationMode::Mobile => Presentation::Mobile,
            PresentationMode::Auto if width < self.settings.ui.mobile_breakpoint => {
                Presentation::Mobile
            }
            PresentationMode::Auto => Presentation::Desktop,
        }
    }

    /// Switch presentation. A change closes every menu.
    pub fn set_presentation(&mut self, presentation: Presentation) {
        if self.presentation == presentation {
            return;
        }
        self.presentation = presentation;
        self.menu.close_all();
        self.focus = MenuFocus::default();
    }

    // ── Label-based controller operations ──────────────────────────────────

    /// Toggle the first top-level entry labelled `label`.
    ///
    /// Returns `false` (and changes nothing) when no entry has that label.
    pub fn toggle_top_level_by_label(&mut self, label: &str) -> bool {
        let Some(id) = self.tree.find_top_level(label).map(|n| n.id.clone()) else {
            return false;
        };
        self.menu.toggle_top_level(&id);
        true
    }

    /// Toggle the child of the open top-level entry labelled `label`.
    pub fn toggle_sub_level_by_label(&mut self, label: &str) -> bool {
        let Some(top) = self.menu.open_top.clone() else {
            return false;
        };
        let Some(id) = self.tree.find_child(&top, label).map(|n| n.id.clone()) else {
            return false;
        };
        self.menu.toggle_sub_level(&id);
        true
    }

    // ── Derived views ──────────────────────────────────────────────────────

    pub fn open_top_node(&self) -> Option<&NavNode> {
        self.tree.get(self.menu.open_top.as_ref()?)
    }

    pub fn open_sub_node(&self) -> Option<&NavNode> {
        self.tree.get(self.menu.open_sub.as_ref()?)
    }

    /// Entries of the first flyout panel (empty when nothing is open).
    pub fn flyout_items(&self) -> &[NavNode] {
        self.open_top_node()
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Entries of the side flyout panel.
    pub fn side_items(&self) -> &[NavNode] {
        self.open_sub_node()
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn accordion_rows(&self) -> Vec<AccordionRow> {
        accordion_rows(&self.tree, &self.menu)
    }

    /// Labels from the top level down to the entry linking to the current route.
    pub fn breadcrumb(&self) -> Vec<String> {
        let Some(node) = self.tree.find_by_path(self.route.as_str()) else {
            return Vec::new();
        };
        let indices = node.id.indices();
        (1..=indices.len())
            .filter_map(|len| self.tree.get(&EntryId::from_indices(&indices[..len])))
            .map(|n| n.label.clone())
            .collect()
    }

    /// Keep the keyboard cursor on something that is still visible.
    pub fn clamp_focus(&mut self) {
        if self.focus.column == FocusColumn::Side && self.side_items().is_empty() {
            self.focus.column = FocusColumn::Flyout;
        }
        if self.focus.column == FocusColumn::Flyout && self.flyout_items().is_empty() {
            self.focus.column = FocusColumn::Bar;
        }

        self.focus.bar = clamp_index(self.focus.bar, self.tree.roots().len());
        self.focus.flyout = clamp_index(self.focus.flyout, self.flyout_items().len());
        self.focus.side = clamp_index(self.focus.side, self.side_items().len());
        self.focus.row = clamp_index(self.focus.row, self.accordion_rows().len());
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
