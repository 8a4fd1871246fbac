use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::view::PostView;
use crate::tui::component::Component;

pub const NEWS_PLACEHOLDER: &str = "Select a method to fetch news data";

/// Headline list: title, excerpt and reactions per post.
pub struct NewsPanel<'a> {
    pub posts: Option<&'a [PostView]>,
}

impl Component for NewsPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = match self.posts {
            Some(posts) => posts
                .iter()
                .flat_map(|post| {
                    [
                        Line::from(Span::styled(
                            format!("• {}", post.title),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(post.display_excerpt()),
                        Line::from(Span::styled(
                            post.reactions_line(),
                            Style::default().fg(Color::DarkGray),
                        )),
                        Line::default(),
                    ]
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                NEWS_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().title("News Headlines"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
