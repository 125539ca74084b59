//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use treknav_app::state::{AppState, Presentation};

use crate::layout::{self, ScreenAreas};
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{self, DrawerLayout, FlyoutLayout};

pub const SITE_NAME: &str = "Trek Nav";

/// Geometry of whichever menu is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuGeometry {
    Desktop(FlyoutLayout),
    Mobile(DrawerLayout),
}

/// Area flyouts and the drawer may cover: the nav row and the content below it
fn overlay_bounds(areas: &ScreenAreas) -> Rect {
    areas.nav.union(areas.content)
}

/// Compute menu geometry for a terminal of size `area`.
///
/// Shared by [`view`] and mouse hit testing.
pub fn menu_geometry(state: &AppState, area: Rect) -> (ScreenAreas, MenuGeometry) {
    let areas = layout::create(area);
    let bounds = overlay_bounds(&areas);
    let icons = IconSet::new(state.settings.ui.icons);
    let geometry = match state.presentation {
        Presentation::Desktop => MenuGeometry::Desktop(widgets::flyout_layout(
            &state.tree,
            &state.menu,
            areas.nav,
            bounds,
        )),
        Presentation::Mobile => MenuGeometry::Mobile(widgets::drawer_layout(
            state.accordion_rows(),
            state.menu.mobile_drawer_open,
            icons,
            areas.nav,
            bounds,
        )),
    };
    (areas, geometry)
}

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);
    let (areas, geometry) = menu_geometry(state, area);

    frame.render_widget(
        widgets::MainHeader::new(SITE_NAME, state.presentation),
        areas.header,
    );
    frame.render_widget(widgets::PageContent::new(state, icons), areas.content);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Menu last so the flyouts and the drawer sit on top of the page
    match &geometry {
        MenuGeometry::Desktop(layout) => {
            frame.render_widget(widgets::DesktopMenu::new(state, layout, icons), area);
        }
        MenuGeometry::Mobile(layout) => {
            frame.render_widget(widgets::MobileMenu::new(state, layout, icons), area);
        }
    }
}
