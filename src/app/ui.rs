//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::{AppState, FocusedPanel, Mode, SidebarItem, View};
use crate::content::{Segment, segment};
use crate::models::Post;
use crate::theme::{Theme, ThemeColors};

/// Mention icon
const ICON: &str = "📣";

/// Main render function
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let colors = state.theme.colors();

    // Set background
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_tabs(frame, state, chunks[0]);
    match state.view {
        View::Timeline => render_timeline_view(frame, state, chunks[1]),
        View::Search => render_search_view(frame, state, chunks[1]),
    }
    render_status_bar(frame, state, chunks[2]);

    // Render modal dialogs
    match state.mode {
        Mode::Help => render_help_popup(frame, state),
        Mode::ThemePicker => render_theme_picker(frame, state),
        Mode::Compose => render_compose_popup(frame, state),
        Mode::Normal | Mode::Query => {}
    }
}

fn render_tabs(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let titles: Vec<Line> = vec![
        format!(
            "{}  Timeline",
            if state.view == View::Timeline { "●" } else { "○" }
        ),
        format!(
            "{}  Search",
            if state.view == View::Search { "●" } else { "○" }
        ),
    ]
    .into_iter()
    .map(Line::from)
    .collect();

    let selected = match state.view {
        View::Timeline => 0,
        View::Search => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(format!(" {ICON} Mention "))
                .title_style(colors.tab_active())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(colors.block()),
        )
        .style(colors.tab())
        .highlight_style(colors.tab_active())
        .select(selected);

    frame.render_widget(tabs, area);
}

fn render_timeline_view(frame: &mut Frame, state: &AppState, area: Rect) {
    if state.config.show_sidebar {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(20),
                Constraint::Percentage(50),
                Constraint::Min(0),
            ])
            .split(area);

        render_sidebar(frame, state, horizontal[0]);
        render_feed(frame, state, horizontal[1]);
        render_detail(frame, state, horizontal[2]);
    } else {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Min(0)])
            .split(area);

        render_feed(frame, state, horizontal[0]);
        render_detail(frame, state, horizontal[1]);
    }
}

fn render_sidebar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let block = Block::default()
        .title(" Menu ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.focused_panel == FocusedPanel::Sidebar {
            colors.block_focus()
        } else {
            colors.block()
        });

    let items: Vec<ListItem> = SidebarItem::all()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == state.selected_sidebar
                && state.focused_panel == FocusedPanel::Sidebar
            {
                colors.selected()
            } else {
                colors.text()
            };
            ListItem::new(Line::styled(
                format!(" {} {}", item.icon(), item.label()),
                style,
            ))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_feed(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let block = Block::default()
        .title(" 📰 Feed ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.focused_panel == FocusedPanel::Feed {
            colors.block_focus()
        } else {
            colors.block()
        });

    let items: Vec<ListItem> = if state.posts.is_empty() {
        vec![
            ListItem::new(Line::from("")),
            ListItem::new(Line::from(vec![
                Span::styled("  ℹ ", colors.text_info()),
                Span::styled("No posts yet", colors.text_muted()),
            ])),
            ListItem::new(Line::from(vec![
                Span::styled("  Press ", colors.text_dim()),
                Span::styled("[n]", colors.key_hint()),
                Span::styled(" to write one", colors.text_dim()),
            ])),
        ]
    } else {
        state
            .posts
            .iter()
            .map(|post| feed_item(post, &colors))
            .collect()
    };

    let list = List::new(items).block(block).highlight_style(colors.selected());

    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(Some(state.selected_post));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn feed_item(post: &Post, colors: &ThemeColors) -> ListItem<'static> {
    let mut indicators = String::new();
    if post.liked {
        indicators.push_str(" ❤️");
    }

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", post.author_name),
            colors.text_primary().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("@{}", post.author_handle), colors.text_muted()),
        Span::styled(format!(" · {}{}", post.time, indicators), colors.text_muted()),
    ])];

    for raw_line in post.content.lines() {
        let mut spans = vec![Span::styled("   ", Style::default())];
        spans.extend(segment_spans(raw_line, colors));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled(format!("   💬 {}", post.reply_count), colors.text_muted()),
        Span::styled(format!("  🔁 {}", post.repost_count), colors.text_muted()),
        Span::styled(
            format!("  {} {}", if post.liked { "❤️" } else { "♡" }, post.like_count),
            if post.liked {
                colors.text_liked()
            } else {
                colors.text_muted()
            },
        ),
    ]));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn render_detail(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let block = Block::default()
        .title(" 📝 Post ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.block());

    let Some(post) = state.selected_post() else {
        let placeholder = Paragraph::new(Line::styled(
            "  Select a post",
            colors.text_muted(),
        ))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let width = area.width.saturating_sub(4) as usize;
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", post.author_name),
                colors.text_primary().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("@{}", post.author_handle), colors.text_muted()),
        ]),
        Line::from(Span::styled(
            format!("     {}", post.time),
            colors.text_muted(),
        )),
        Line::from(""),
    ];

    for raw_line in post.content.lines() {
        for wrapped in textwrap::wrap(raw_line, width.max(1)) {
            let mut spans = vec![Span::styled("  ", Style::default())];
            spans.extend(segment_spans(&wrapped, &colors));
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", "─".repeat(width.min(36))),
        colors.text_dim(),
    )));
    lines.push(Line::from(vec![
        Span::styled(format!("  💬 {}", post.reply_count), colors.text_muted()),
        Span::styled(format!("   🔁 {}", post.repost_count), colors.text_muted()),
        Span::styled(
            format!("   {} {}", if post.liked { "❤️" } else { "♡" }, post.like_count),
            if post.liked {
                colors.text_liked()
            } else {
                colors.text_muted()
            },
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [L]", colors.key_hint()),
        Span::styled(" like  ", colors.text_dim()),
        Span::styled("[s]", colors.key_hint()),
        Span::styled(" share  ", colors.text_dim()),
        Span::styled("[o]", colors.key_hint()),
        Span::styled(" open", colors.text_dim()),
    ]));

    let detail = Paragraph::new(lines).block(block);
    frame.render_widget(detail, area);
}

fn render_search_view(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query box
            Constraint::Length(3), // Facet toggles
            Constraint::Min(0),    // Trends + results
        ])
        .split(area);

    // Query box
    let query_block = Block::default()
        .title(" 🔍 Explore ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.mode == Mode::Query {
            colors.block_focus()
        } else {
            colors.block()
        });

    let query_line = if state.search_query.is_empty() && state.mode != Mode::Query {
        Line::styled(" Press / to search", colors.text_muted())
    } else {
        let cursor = if state.mode == Mode::Query { "▏" } else { "" };
        Line::styled(format!(" {}{cursor}", state.search_query), colors.text())
    };
    frame.render_widget(Paragraph::new(query_line).block(query_block), vertical[0]);

    render_facets(frame, state, vertical[1]);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(vertical[2]);

    render_trends(frame, state, horizontal[0]);
    render_results(frame, state, horizontal[1]);
}

fn render_facets(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let on = |enabled: bool| if enabled { "●" } else { "○" };

    let mut spans = vec![
        Span::styled(" Filters  ", colors.text_muted()),
        Span::styled("[1]", colors.key_hint()),
        Span::styled(
            format!(" Images {}  ", on(state.filters.show_images)),
            colors.text(),
        ),
        Span::styled("[2]", colors.key_hint()),
        Span::styled(
            format!(" Videos {}  ", on(state.filters.show_videos)),
            colors.text(),
        ),
        Span::styled("[3]", colors.key_hint()),
        Span::styled(
            format!(" Text {}  ", on(state.filters.show_text)),
            colors.text(),
        ),
    ];

    // Advanced sort facets are only reachable with premium access
    if state.config.premium {
        spans.push(Span::styled("│  ", colors.text_dim()));
        spans.push(Span::styled("[4]", colors.key_hint()));
        spans.push(Span::styled(
            format!(" Date {}  ", on(state.advanced_filters.sort_by_date)),
            colors.text(),
        ));
        spans.push(Span::styled("[5]", colors.key_hint()));
        spans.push(Span::styled(
            format!(" Relevance {}", on(state.advanced_filters.sort_by_relevance)),
            colors.text(),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.block());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_trends(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let block = Block::default()
        .title(" 📈 Trends for you ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.focused_panel == FocusedPanel::Trends {
            colors.block_focus()
        } else {
            colors.block()
        });

    let trends = state.visible_trends();
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = if state.loading && trends.is_empty() {
        vec![ListItem::new(Line::styled(
            "  ⏳ Loading...",
            colors.text_muted(),
        ))]
    } else if trends.is_empty() {
        vec![
            ListItem::new(Line::from("")),
            ListItem::new(Line::styled("  No trends yet", colors.text_muted())),
            ListItem::new(Line::from(vec![
                Span::styled("  Press ", colors.text_dim()),
                Span::styled("[r]", colors.key_hint()),
                Span::styled(" to refresh", colors.text_dim()),
            ])),
        ]
    } else {
        trends
            .iter()
            .map(|trend| {
                ListItem::new(vec![
                    Line::styled(
                        format!(" {}", truncate_to_width(&trend.topic, width)),
                        colors.text_hashtag().add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        format!("   {} Posts", trend.count_total),
                        colors.text_muted(),
                    ),
                ])
            })
            .collect()
    };

    let list = List::new(items).block(block).highlight_style(colors.selected());

    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(Some(state.selected_trend));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_results(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let block = Block::default()
        .title(" Results ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.focused_panel == FocusedPanel::Results {
            colors.block_focus()
        } else {
            colors.block()
        });

    let results = state.filtered_results();

    let items: Vec<ListItem> = if results.is_empty() {
        vec![ListItem::new(Line::styled(
            "  Nothing matches the current filters",
            colors.text_muted(),
        ))]
    } else {
        results
            .into_iter()
            .map(|result| {
                let post = result.into_post();
                feed_item(&post, &colors)
            })
            .collect()
    };

    let list = List::new(items).block(block).highlight_style(colors.selected());

    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(Some(state.selected_result));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let spinner = if state.loading {
        const FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];
        format!("{} ", FRAMES[(state.current_tick() / 2) as usize % FRAMES.len()])
    } else {
        String::new()
    };

    let hints = match state.mode {
        Mode::Compose => " Ctrl+Enter post · Esc cancel ",
        Mode::Query => " Enter apply · Esc clear ",
        _ => " Tab views · j/k move · n new · ? help · q quit ",
    };

    let line = Line::from(vec![
        Span::styled(format!(" {spinner}{}", state.status), colors.text()),
        Span::styled(
            format!(
                "{:>width$}",
                hints,
                width = (area.width as usize).saturating_sub(state.status.width() + 2)
            ),
            colors.text_dim(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_popup(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = centered_rect(50, 70, frame.area());

    frame.render_widget(Clear, area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), colors.key_hint()),
            Span::styled(desc, colors.text()),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::styled("  Navigation", colors.text_primary().add_modifier(Modifier::BOLD)),
        key("j / ↓", "Move down"),
        key("k / ↑", "Move up"),
        key("h / l", "Switch panel"),
        key("Tab", "Switch view"),
        key("g / G", "Jump to top / bottom"),
        Line::from(""),
        Line::styled("  Actions", colors.text_primary().add_modifier(Modifier::BOLD)),
        key("n", "New post"),
        key("L", "Like / unlike"),
        key("s", "Share post"),
        key("o", "Open in browser"),
        Line::from(""),
        Line::styled("  Search", colors.text_primary().add_modifier(Modifier::BOLD)),
        key("/", "Edit query"),
        key("1 2 3", "Toggle content filters"),
        key("4 5", "Premium sort toggles"),
        key("r", "Refresh trends"),
        key("Enter", "Select trend hashtag"),
        Line::from(""),
        Line::styled("  View", colors.text_primary().add_modifier(Modifier::BOLD)),
        key("t", "Change theme"),
        key("?", "This help"),
        key("q", "Quit"),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .title_style(colors.text_primary())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(colors.block_focus())
            .style(Style::default().bg(colors.bg)),
    );

    frame.render_widget(popup, area);
}

fn render_compose_popup(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let chars = state.compose_text.chars().count();
    let popup = Paragraph::new(format!("{}▏", state.compose_text))
        .wrap(Wrap { trim: false })
        .style(colors.text())
        .block(
            Block::default()
                .title(" ✏ New Post ")
                .title_style(colors.text_primary())
                .title_bottom(Line::styled(format!(" {chars} chars "), colors.text_muted()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(colors.block_focus())
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(popup, area);
}

fn render_theme_picker(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = centered_rect(40, 60, frame.area());

    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = Theme::all()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == state.theme_picker_index {
                colors.selected()
            } else {
                colors.text()
            };
            ListItem::new(Line::styled(
                format!("  {}", Theme::from(*name).name()),
                style,
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" 🎨 Theme ")
            .title_style(colors.text_primary())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(colors.block_focus())
            .style(Style::default().bg(colors.bg)),
    );

    frame.render_widget(list, area);
}

/// Styled spans for one line of post content, hashtags in the link color
fn segment_spans(line: &str, colors: &ThemeColors) -> Vec<Span<'static>> {
    segment(line)
        .into_iter()
        .map(|seg| match seg {
            Segment::Text(text) => Span::styled(text, colors.text()),
            Segment::Hashtag { name } => {
                Span::styled(format!("#{name}"), colors.text_hashtag())
            }
        })
        .collect()
}

/// Truncate a string to a display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Centered popup rect as a percentage of the parent area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
