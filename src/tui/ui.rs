use std::time::Instant;

use crate::core::presenter::{RenderModel, ScreenContent, present, present_screen};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Drawer, Focus, HomeLayout, HomeScreen, ProfileScreen, SettingsScreen, TAB_BAR_HEIGHT, TabBar,
    TitleBar,
};
use crate::tui::transition::{blit, dim};

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Widget;

/// Top-level regions of the frame. Shared by drawing and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub content: Rect,
    pub tabs: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let [title, content, tabs] =
            Layout::vertical([Length(1), Min(0), Length(TAB_BAR_HEIGHT)]).areas(area);
        Self {
            title,
            content,
            tabs,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, now: Instant) {
    let model = present(app);
    let layout = AppLayout::new(frame.area());

    TitleBar::new(model.title, &app.status_message).render(frame, layout.title);
    draw_content(frame, app, tui, &model, layout.content, now);
    TabBar::new(&model.tabs, tui.show_icons).render(frame, layout.tabs);

    // Modal drawer: dim everything behind it
    if let Some(drawer) = &model.drawer {
        let area = frame.area();
        dim(frame.buffer_mut(), area);
        Drawer::new(drawer, &tui.drawer).render(frame, area);
    }
}

fn draw_content(
    frame: &mut Frame,
    app: &App,
    tui: &TuiState,
    model: &RenderModel<'_>,
    area: Rect,
    now: Instant,
) {
    let animation = tui.transition.filter(|anim| !anim.is_finished(now));

    let Some(anim) = animation else {
        render_screen(&model.content, tui, area, frame.buffer_mut());
        if model.drawer.is_none() && matches!(model.content, ScreenContent::Home(_)) {
            let home = HomeLayout::new(area);
            let (field, field_area) = match tui.focus {
                Focus::ItemField => (&tui.item_field, home.item_field),
                Focus::SearchField => (&tui.search_field, home.search_field),
            };
            frame.set_cursor_position(field.screen_pos(field_area));
        }
        return;
    };

    let outgoing = present_screen(app, anim.transition.from);
    let mut old_buf = Buffer::empty(area);
    render_screen(&outgoing, tui, area, &mut old_buf);

    let mut new_buf = Buffer::empty(area);
    render_screen(&model.content, tui, area, &mut new_buf);
    if anim.is_fading(now) {
        dim(&mut new_buf, area);
    }

    let (incoming_dx, outgoing_dx) = anim.offsets(area.width, now);
    let buf = frame.buffer_mut();
    if incoming_dx != 0 {
        blit(&old_buf, buf, area, outgoing_dx);
    }
    blit(&new_buf, buf, area, incoming_dx);
}

fn render_screen(content: &ScreenContent<'_>, tui: &TuiState, area: Rect, buf: &mut Buffer) {
    match content {
        ScreenContent::Home(view) => HomeScreen {
            view,
            item_field: &tui.item_field,
            search_field: &tui.search_field,
            focus: tui.focus,
            list_offset: tui.list_offset,
        }
        .render(area, buf),
        ScreenContent::Profile(view) => ProfileScreen { view }.render(area, buf),
        ScreenContent::Settings(view) => SettingsScreen { view }.render(area, buf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::config::AnimationSettings;
    use crate::core::navigation::{DrawerItem, Tab};
    use crate::test_support::{app_with_items, test_app};
    use crate::tui::transition::TransitionAnimation;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn screen_text(app: &App, tui: &TuiState, now: Instant) -> String {
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.tabs, Rect::new(0, 22, 80, TAB_BAR_HEIGHT));
        assert_eq!(layout.content.height, 21);
    }

    #[test]
    fn test_draw_home() {
        let app = app_with_items(&["Bread", "Milk"]);
        let tui = TuiState::default();
        let text = screen_text(&app, &tui, Instant::now());
        assert!(text.contains("Shopping List"));
        assert!(text.contains("• Bread"));
        assert!(text.contains("• Milk"));
        assert!(text.contains("Profile"));
    }

    #[test]
    fn test_draw_profile_and_settings() {
        let mut app = test_app();
        let tui = TuiState::default();
        update(&mut app, Action::SelectTab(Tab::Profile));
        assert!(screen_text(&app, &tui, Instant::now()).contains("User Profile"));

        update(&mut app, Action::SelectDrawerItem(DrawerItem::Settings));
        assert!(screen_text(&app, &tui, Instant::now()).contains("Add more settings options here."));
    }

    #[test]
    fn test_draw_drawer_overlay() {
        let mut app = test_app();
        update(&mut app, Action::OpenDrawer);
        let text = screen_text(&app, &TuiState::default(), Instant::now());
        assert!(text.contains("Menu"));
        assert!(text.contains("Settings"));
    }

    #[test]
    fn test_draw_mid_transition_shows_both_screens() {
        let mut app = app_with_items(&["Bread"]);
        let mut tui = TuiState::default();
        let effect = update(&mut app, Action::SelectTab(Tab::Profile));
        let crate::core::action::Effect::Transition(transition) = effect else {
            panic!("Expected transition");
        };
        let start = Instant::now();
        tui.transition =
            TransitionAnimation::start(transition, &AnimationSettings::default(), start);

        // Early on the outgoing Home has only moved a couple of columns left
        let early = screen_text(&app, &tui, start + Duration::from_millis(10));
        assert!(early.contains("Bread"));

        let done = screen_text(&app, &tui, start + Duration::from_millis(400));
        assert!(!done.contains("Bread"));
        assert!(done.contains("User Profile"));
    }
}
