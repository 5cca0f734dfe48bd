//! Application state

use anyhow::Result;

use crate::config::Config;
use crate::db::Database;
use crate::demo;
use crate::filter::{self, AdvancedFilters, Filters};
use crate::models::{Post, SearchResult, Trend};
use crate::theme::Theme;

/// Which panel is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    /// Navigation sidebar (timeline view)
    Sidebar,
    /// Post feed (timeline view)
    #[default]
    Feed,
    /// Trend list (search view)
    Trends,
    /// Search results (search view)
    Results,
}

/// Current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Scrollable timeline of posts
    #[default]
    Timeline,
    /// Search, trends, and facet filters
    Search,
}

/// Modal input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal navigation
    #[default]
    Normal,
    /// Compose popup open
    Compose,
    /// Editing the search query
    Query,
    /// Help popup open
    Help,
    /// Theme picker open
    ThemePicker,
}

/// Sidebar menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    /// Jump to the timeline
    Home,
    /// Jump to search and trends
    Explore,
    /// Profile (not wired up in this build)
    Profile,
    /// Settings (not wired up in this build)
    Settings,
}

impl SidebarItem {
    /// All sidebar entries, in display order
    pub const fn all() -> &'static [Self] {
        &[Self::Home, Self::Explore, Self::Profile, Self::Settings]
    }

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Explore => "Explore",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// Icon shown next to the label
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Explore => "🔍",
            Self::Profile => "👤",
            Self::Settings => "⚙",
        }
    }
}

/// Application state
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Snapshot database (UI-side handle, used for cache reads)
    pub db: Database,
    /// Whether to quit
    pub should_quit: bool,
    /// Current theme
    pub theme: Theme,
    /// Current view
    pub view: View,
    /// Modal input mode
    pub mode: Mode,
    /// Focused panel
    pub focused_panel: FocusedPanel,

    /// Posts in the feed
    pub posts: Vec<Post>,
    /// Selected post index
    pub selected_post: usize,

    /// Sidebar selection index
    pub selected_sidebar: usize,

    /// Trend list (display copy of the aggregator's snapshot)
    pub trends: Vec<Trend>,
    /// Selected trend index
    pub selected_trend: usize,
    /// Whether the automatic first-activation refresh was already requested
    pub trends_requested: bool,

    /// Search query
    pub search_query: String,
    /// Search results (unfiltered base set)
    pub results: Vec<SearchResult>,
    /// Selected result index
    pub selected_result: usize,
    /// Content-type facets
    pub filters: Filters,
    /// Premium-only sort facets
    pub advanced_filters: AdvancedFilters,

    /// Compose text buffer
    pub compose_text: String,

    /// Status message (bottom bar)
    pub status: String,
    /// Is loading?
    pub loading: bool,
    /// Theme picker selection index
    pub theme_picker_index: usize,

    /// Tick counter for animations
    tick: u64,
}

impl AppState {
    /// Create a new app state.
    ///
    /// The feed and search results are seeded from sample data; trends come
    /// from the local cache until the first refresh lands.
    pub fn new(config: Config, db: Database) -> Result<Self> {
        let theme = config.theme;
        let trends = db.load_trends()?.unwrap_or_default();
        let mut posts = demo::demo_posts();
        posts.truncate(config.post_limit);

        Ok(Self {
            config,
            db,
            should_quit: false,
            theme,
            view: View::Timeline,
            mode: Mode::Normal,
            focused_panel: FocusedPanel::Feed,
            posts,
            selected_post: 0,
            selected_sidebar: 0,
            trends,
            selected_trend: 0,
            trends_requested: false,
            search_query: String::new(),
            results: demo::demo_search_results(),
            selected_result: 0,
            filters: Filters::default(),
            advanced_filters: AdvancedFilters::default(),
            compose_text: String::new(),
            status: String::new(),
            loading: false,
            theme_picker_index: 0,
            tick: 0,
        })
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Get current tick
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Get the currently selected post
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected_post)
    }

    /// Get the currently selected post, mutably
    pub fn selected_post_mut(&mut self) -> Option<&mut Post> {
        self.posts.get_mut(self.selected_post)
    }

    /// The trends matching the current query, in source order
    pub fn visible_trends(&self) -> Vec<Trend> {
        filter::matching_trends(&self.trends, &self.search_query)
    }

    /// Get the currently selected visible trend
    pub fn selected_trend(&self) -> Option<Trend> {
        self.visible_trends().into_iter().nth(self.selected_trend)
    }

    /// The search results surviving the facet filters and query
    pub fn filtered_results(&self) -> Vec<SearchResult> {
        let faceted = filter::apply(&self.results, &self.filters);
        if self.search_query.is_empty() {
            return faceted;
        }

        let query = self.search_query.to_lowercase();
        faceted
            .into_iter()
            .filter(|r| {
                r.content.to_lowercase().contains(&query)
                    || r.author_name.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Move selection down in the feed
    pub fn select_next_post(&mut self) {
        if !self.posts.is_empty() {
            self.selected_post = (self.selected_post + 1).min(self.posts.len() - 1);
        }
    }

    /// Move selection up in the feed
    pub fn select_prev_post(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    /// Move selection down in the sidebar
    pub fn select_next_sidebar(&mut self) {
        let len = SidebarItem::all().len();
        self.selected_sidebar = (self.selected_sidebar + 1).min(len - 1);
    }

    /// Move selection up in the sidebar
    pub fn select_prev_sidebar(&mut self) {
        self.selected_sidebar = self.selected_sidebar.saturating_sub(1);
    }

    /// Move selection down in the trend list
    pub fn select_next_trend(&mut self) {
        let len = self.visible_trends().len();
        if len > 0 {
            self.selected_trend = (self.selected_trend + 1).min(len - 1);
        }
    }

    /// Move selection up in the trend list
    pub fn select_prev_trend(&mut self) {
        self.selected_trend = self.selected_trend.saturating_sub(1);
    }

    /// Move selection down in the result list
    pub fn select_next_result(&mut self) {
        let len = self.filtered_results().len();
        if len > 0 {
            self.selected_result = (self.selected_result + 1).min(len - 1);
        }
    }

    /// Move selection up in the result list
    pub fn select_prev_result(&mut self) {
        self.selected_result = self.selected_result.saturating_sub(1);
    }

    /// Switch to a view, returning true when this is the search view's
    /// first activation (the caller then triggers the one automatic trend
    /// refresh).
    pub fn activate_view(&mut self, view: View) -> bool {
        self.view = view;
        self.focused_panel = match view {
            View::Timeline => FocusedPanel::Feed,
            View::Search => FocusedPanel::Trends,
        };

        if view == View::Search && !self.trends_requested {
            self.trends_requested = true;
            self.loading = true;
            return true;
        }
        false
    }

    /// Cycle to the other view (see [`activate_view`](Self::activate_view))
    pub fn next_view(&mut self) -> bool {
        let next = match self.view {
            View::Timeline => View::Search,
            View::Search => View::Timeline,
        };
        self.activate_view(next)
    }

    /// Toggle a content facet by its key number (1-3), or an advanced facet
    /// (4-5) when premium access is enabled. Returns false when the key is
    /// not an accessible facet.
    pub fn toggle_facet(&mut self, key: char) -> bool {
        match key {
            '1' => self.filters.show_images = !self.filters.show_images,
            '2' => self.filters.show_videos = !self.filters.show_videos,
            '3' => self.filters.show_text = !self.filters.show_text,
            '4' if self.config.premium => {
                self.advanced_filters.sort_by_date = !self.advanced_filters.sort_by_date;
            }
            '5' if self.config.premium => {
                self.advanced_filters.sort_by_relevance =
                    !self.advanced_filters.sort_by_relevance;
            }
            _ => return false,
        }
        self.selected_result = 0;
        true
    }

    /// Open compose popup
    pub fn open_compose(&mut self) {
        self.mode = Mode::Compose;
        self.compose_text.clear();
    }

    /// Close compose popup
    pub fn close_compose(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Publish the compose buffer to the top of the local feed
    pub fn submit_compose(&mut self) {
        let post = Post::composed("You", "you", self.compose_text.trim());
        self.posts.insert(0, post);
        self.posts.truncate(self.config.post_limit);
        self.selected_post = 0;
        self.compose_text.clear();
        self.mode = Mode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn state() -> AppState {
        let dir = tempdir().unwrap();
        let db = Database::open_path(&dir.path().join("test.sqlite")).unwrap();
        AppState::new(Config::default(), db).unwrap()
    }

    #[test]
    fn first_search_activation_requests_refresh_once() {
        let mut state = state();

        assert!(state.activate_view(View::Search));
        assert!(!state.activate_view(View::Timeline));
        assert!(!state.activate_view(View::Search));
    }

    #[test]
    fn advanced_facets_are_premium_gated() {
        let mut state = state();

        assert!(!state.toggle_facet('4'));
        assert!(!state.advanced_filters.sort_by_date);

        state.config.premium = true;
        assert!(state.toggle_facet('4'));
        assert!(state.advanced_filters.sort_by_date);
    }

    #[test]
    fn content_facets_toggle() {
        let mut state = state();

        assert!(state.toggle_facet('1'));
        assert!(!state.filters.show_images);
        assert!(state.toggle_facet('1'));
        assert!(state.filters.show_images);
    }

    #[test]
    fn compose_prepends_to_feed() {
        let mut state = state();
        let before = state.posts.len();

        state.open_compose();
        state.compose_text = "hello #world".to_string();
        state.submit_compose();

        assert_eq!(state.posts.len(), before + 1);
        assert_eq!(state.posts[0].content, "hello #world");
        assert_eq!(state.posts[0].like_count, 0);
        assert_eq!(state.selected_post, 0);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn filtered_results_honor_query_and_facets() {
        let mut state = state();

        state.filters.show_images = false;
        let results = state.filtered_results();
        assert!(results.iter().all(|r| !r.content.contains("image")));

        state.search_query = "jane".to_string();
        let results = state.filtered_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].author_name, "Jane Smith");
    }
}
