//! Event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::async_ops::AsyncCommand;
use super::state::{AppState, FocusedPanel, Mode, SidebarItem, View};
use crate::content;
use crate::theme::Theme;

/// Handle key events, returning an optional async command
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    // Handle mode-specific input first
    match state.mode {
        Mode::ThemePicker => {
            handle_theme_picker_key(state, key);
            return None;
        }
        Mode::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                state.mode = Mode::Normal;
            }
            return None;
        }
        Mode::Compose => {
            handle_compose_key(state, key);
            return None;
        }
        Mode::Query => {
            handle_query_key(state, key);
            return None;
        }
        Mode::Normal => {}
    }

    // Global shortcuts (work in normal mode)
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            state.should_quit = true;
            return None;
        }
        (_, KeyCode::Char('?')) | (_, KeyCode::F(1)) => {
            state.mode = Mode::Help;
            return None;
        }
        (_, KeyCode::Tab) => {
            if state.next_view() {
                return Some(AsyncCommand::RefreshTrends);
            }
            return None;
        }
        (_, KeyCode::Char('t')) => {
            state.theme_picker_index = Theme::all()
                .iter()
                .position(|t| *t == state.theme.inner())
                .unwrap_or(0);
            state.mode = Mode::ThemePicker;
            return None;
        }
        _ => {}
    }

    // View-specific handling
    match state.view {
        View::Timeline => handle_timeline_key(state, key),
        View::Search => handle_search_key(state, key),
    }
}

fn handle_timeline_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match (key.modifiers, key.code) {
        // Panel navigation
        (_, KeyCode::Left | KeyCode::Char('h')) => {
            if state.config.show_sidebar {
                state.focused_panel = FocusedPanel::Sidebar;
            }
            None
        }
        (_, KeyCode::Right | KeyCode::Char('l')) => {
            state.focused_panel = FocusedPanel::Feed;
            None
        }

        // Navigation within panel
        (_, KeyCode::Char('j') | KeyCode::Down) => {
            match state.focused_panel {
                FocusedPanel::Sidebar => state.select_next_sidebar(),
                _ => state.select_next_post(),
            }
            None
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => {
            match state.focused_panel {
                FocusedPanel::Sidebar => state.select_prev_sidebar(),
                _ => state.select_prev_post(),
            }
            None
        }

        // Jump to top/bottom
        (_, KeyCode::Char('g')) => {
            state.selected_post = 0;
            None
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            if !state.posts.is_empty() {
                state.selected_post = state.posts.len() - 1;
            }
            None
        }

        // Sidebar activation
        (_, KeyCode::Enter) if state.focused_panel == FocusedPanel::Sidebar => {
            let item = SidebarItem::all()[state.selected_sidebar];
            match item {
                SidebarItem::Home => {
                    state.activate_view(View::Timeline);
                    None
                }
                SidebarItem::Explore => {
                    if state.activate_view(View::Search) {
                        Some(AsyncCommand::RefreshTrends)
                    } else {
                        None
                    }
                }
                SidebarItem::Profile | SidebarItem::Settings => {
                    state.set_status(format!("ℹ {} is not available in this build", item.label()));
                    None
                }
            }
        }

        // Actions
        (_, KeyCode::Char('n')) => {
            state.open_compose();
            None
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('L')) => {
            // Like toggle is purely local; it never waits on the network
            if let Some(post) = state.selected_post_mut() {
                post.toggle_like();
                let liked = post.liked;
                state.set_status(if liked { "❤️ Liked!" } else { "💔 Unliked" });
            }
            None
        }
        (_, KeyCode::Char('s')) => {
            // Share via the platform gateway
            if let Some(post) = state.selected_post().cloned() {
                state.set_status("Sharing...");
                return Some(AsyncCommand::Share { post });
            }
            None
        }
        (_, KeyCode::Char('o')) => {
            // Open selected post in browser
            if let Some(post) = state.selected_post() {
                let _ = open::that(post.permalink());
                state.set_status("✓ Opened in browser");
            }
            None
        }

        (_, KeyCode::Esc) => {
            state.clear_status();
            None
        }

        _ => None,
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('/')) => {
            state.mode = Mode::Query;
            None
        }

        // Panel navigation
        (_, KeyCode::Left | KeyCode::Char('h')) => {
            state.focused_panel = FocusedPanel::Trends;
            None
        }
        (_, KeyCode::Right | KeyCode::Char('l')) => {
            state.focused_panel = FocusedPanel::Results;
            None
        }

        (_, KeyCode::Char('j') | KeyCode::Down) => {
            match state.focused_panel {
                FocusedPanel::Results => state.select_next_result(),
                _ => state.select_next_trend(),
            }
            None
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => {
            match state.focused_panel {
                FocusedPanel::Results => state.select_prev_result(),
                _ => state.select_prev_trend(),
            }
            None
        }

        // Facet toggles ([4]/[5] only reachable with premium access)
        (_, KeyCode::Char(c @ ('1' | '2' | '3' | '4' | '5'))) => {
            if state.toggle_facet(c) {
                state.set_status("Filters updated");
            } else if matches!(c, '4' | '5') {
                state.set_status("ℹ Advanced filters require premium");
            }
            None
        }

        // Manual refresh
        (_, KeyCode::Char('r')) => {
            if !state.loading {
                state.loading = true;
                state.set_status("Refreshing trends...");
                Some(AsyncCommand::RefreshTrends)
            } else {
                None
            }
        }

        // Jump into the selected trend's hashtag
        (_, KeyCode::Enter) if state.focused_panel == FocusedPanel::Trends => {
            if let Some(trend) = state.selected_trend() {
                let name = trend.topic.trim_start_matches('#').to_string();
                state.set_status(format!("→ {}", content::hashtag_route(&name)));
                state.search_query = name;
                state.selected_trend = 0;
                state.selected_result = 0;
            }
            None
        }
        (_, KeyCode::Char('o')) if state.focused_panel == FocusedPanel::Trends => {
            if let Some(trend) = state.selected_trend() {
                let name = trend.topic.trim_start_matches('#');
                let _ = open::that(content::hashtag_route(name));
                state.set_status("✓ Opened in browser");
            }
            None
        }

        (_, KeyCode::Esc) => {
            if state.search_query.is_empty() {
                state.clear_status();
            } else {
                state.search_query.clear();
                state.selected_trend = 0;
                state.selected_result = 0;
            }
            None
        }

        _ => None,
    }
}

fn handle_compose_key(state: &mut AppState, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            state.close_compose();
        }
        (KeyModifiers::CONTROL, KeyCode::Enter) => {
            if state.compose_text.trim().is_empty() {
                state.set_status("⚠ Write something first!");
            } else {
                state.submit_compose();
                state.set_status("✓ Posted to your feed");
            }
        }
        (_, KeyCode::Char(c)) => {
            state.compose_text.push(c);
        }
        (_, KeyCode::Backspace) => {
            state.compose_text.pop();
        }
        (_, KeyCode::Enter) => {
            state.compose_text.push('\n');
        }
        _ => {}
    }
}

fn handle_query_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Normal;
            state.search_query.clear();
            state.selected_trend = 0;
            state.selected_result = 0;
        }
        KeyCode::Enter => {
            state.mode = Mode::Normal;
            state.selected_trend = 0;
            state.selected_result = 0;
        }
        KeyCode::Char(c) => {
            state.search_query.push(c);
        }
        KeyCode::Backspace => {
            state.search_query.pop();
        }
        _ => {}
    }
}

fn handle_theme_picker_key(state: &mut AppState, key: KeyEvent) {
    let themes = Theme::all();
    let len = themes.len();

    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            let selected_theme = Theme::from(themes[state.theme_picker_index]);
            state.theme = selected_theme;
            state.config.theme = selected_theme;

            state.mode = Mode::Normal;
            state.set_status(format!("✓ Theme set to {}", selected_theme.name()));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.theme_picker_index = (state.theme_picker_index + 1) % len;
            state.theme = Theme::from(themes[state.theme_picker_index]);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.theme_picker_index = state.theme_picker_index.checked_sub(1).unwrap_or(len - 1);
            state.theme = Theme::from(themes[state.theme_picker_index]);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::Database;
    use tempfile::tempdir;

    fn state() -> AppState {
        let dir = tempdir().unwrap();
        let db = Database::open_path(&dir.path().join("test.sqlite")).unwrap();
        AppState::new(Config::default(), db).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn like_key_toggles_selected_post_locally() {
        let mut state = state();
        let baseline = state.posts[0].like_count;

        let cmd = handle_key(&mut state, press(KeyCode::Char('L')));
        assert!(cmd.is_none());
        assert!(state.posts[0].liked);
        assert_eq!(state.posts[0].like_count, baseline + 1);

        handle_key(&mut state, press(KeyCode::Char('L')));
        assert!(!state.posts[0].liked);
        assert_eq!(state.posts[0].like_count, baseline);
    }

    #[test]
    fn share_key_emits_share_command() {
        let mut state = state();

        let cmd = handle_key(&mut state, press(KeyCode::Char('s')));
        match cmd {
            Some(AsyncCommand::Share { post }) => assert_eq!(post.id, state.posts[0].id),
            other => panic!("expected Share, got {other:?}"),
        }
    }

    #[test]
    fn first_tab_into_search_triggers_trend_refresh() {
        let mut state = state();

        let cmd = handle_key(&mut state, press(KeyCode::Tab));
        assert!(matches!(cmd, Some(AsyncCommand::RefreshTrends)));

        // Back to timeline and into search again: no second automatic refresh
        handle_key(&mut state, press(KeyCode::Tab));
        let cmd = handle_key(&mut state, press(KeyCode::Tab));
        assert!(cmd.is_none());
    }

    #[test]
    fn facet_keys_only_work_in_search_view() {
        let mut state = state();

        handle_key(&mut state, press(KeyCode::Char('1')));
        assert!(state.filters.show_images);

        handle_key(&mut state, press(KeyCode::Tab));
        handle_key(&mut state, press(KeyCode::Char('1')));
        assert!(!state.filters.show_images);
    }
}
