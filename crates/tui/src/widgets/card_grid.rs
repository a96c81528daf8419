use edres_client::course::Course;
use ratatui::{prelude::*, widgets::*};

use crate::styles;

/// Narrowest card we'll lay a column out at.
const CARD_MIN_WIDTH: u16 = 30;
/// Widest a card will stretch to.
const CARD_MAX_WIDTH: u16 = 46;
/// Cover line, title, body and action row, plus borders.
const CARD_HEIGHT: u16 = 9;

/// A wrapped grid of course cards, scrollable one row at a time.
#[derive(Default)]
pub struct CardGrid {
    row_offset: usize,
    last_row_count: usize,
}

impl CardGrid {
    pub fn scroll_down(&mut self) {
        if self.row_offset + 1 < self.last_row_count {
            self.row_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.row_offset = self.row_offset.saturating_sub(1);
    }

    /// Render one card per course into `area`, left to right then top to
    /// bottom, wrapping to as many columns as the width allows.
    pub fn render_to(&mut self, frame: &mut Frame, area: Rect, courses: &[Course]) {
        let cols = columns_for(area.width) as usize;
        let rows = courses.len().div_ceil(cols);
        self.last_row_count = rows;
        if rows == 0 {
            self.row_offset = 0;
            return;
        }
        // The terminal may have grown since we last scrolled.
        if self.row_offset >= rows {
            self.row_offset = rows - 1;
        }

        let card_width = (area.width / cols as u16).min(CARD_MAX_WIDTH);

        let mut y = area.y;
        for row in self.row_offset..rows {
            if y >= area.y + area.height {
                break;
            }
            let height = CARD_HEIGHT.min(area.y + area.height - y);
            for col in 0..cols {
                let Some(course) = courses.get(row * cols + col) else {
                    break;
                };
                render_card(
                    frame,
                    Rect {
                        x: area.x + col as u16 * card_width,
                        y,
                        width: card_width,
                        height,
                    },
                    course,
                );
            }
            y += CARD_HEIGHT;
        }
    }
}

fn columns_for(width: u16) -> u16 {
    (width / CARD_MIN_WIDTH).max(1)
}

fn render_card(frame: &mut Frame, area: Rect, course: &Course) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ],
    )
    .split(inner);

    // Terminals don't do bitmaps, so the cover URL stands in for the image.
    frame.render_widget(
        Paragraph::new(styles::card_media(course.cover_image.clone())),
        layout[0],
    );
    frame.render_widget(
        Paragraph::new(styles::card_title(course.title.clone())),
        layout[1],
    );
    frame.render_widget(
        Paragraph::new(course.description.clone()).wrap(Wrap { trim: true }),
        layout[2],
    );
    // Decorative, like the buttons on the web cards this mirrors.
    frame.render_widget(Paragraph::new("[ Share ] [ Learn More ]"), layout[3]);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::testutil;

    #[test]
    fn column_count_follows_width() {
        assert_eq!(columns_for(10), 1);
        assert_eq!(columns_for(30), 1);
        assert_eq!(columns_for(60), 2);
        assert_eq!(columns_for(100), 3);
    }

    #[test]
    fn rows_wrap_after_the_last_column() {
        let courses: Vec<_> = (1..=5)
            .map(|i| testutil::course(i, &format!("Course {}", i)))
            .collect();
        let mut grid = CardGrid::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();

        terminal
            .draw(|f| grid.render_to(f, f.size(), &courses))
            .unwrap();

        // 2 columns, so 5 cards take 3 rows
        assert_eq!(grid.last_row_count, 3);
        let text = testutil::buffer_text(terminal.backend().buffer());
        assert_eq!(text.matches("[ Share ] [ Learn More ]").count(), 5);
    }

    #[test]
    fn scrolling_clamps_to_the_grid() {
        let courses: Vec<_> = (1..=4)
            .map(|i| testutil::course(i, &format!("Course {}", i)))
            .collect();
        let mut grid = CardGrid::default();
        let mut terminal = Terminal::new(TestBackend::new(30, 9)).unwrap();

        grid.scroll_up();
        assert_eq!(grid.row_offset, 0);

        terminal
            .draw(|f| grid.render_to(f, f.size(), &courses))
            .unwrap();

        // 1 column, 4 rows: offset can reach 3 but no further
        for _ in 0..10 {
            grid.scroll_down();
        }
        assert_eq!(grid.row_offset, 3);

        // Only the fourth card is on screen now.
        terminal
            .draw(|f| grid.render_to(f, f.size(), &courses))
            .unwrap();
        let text = testutil::buffer_text(terminal.backend().buffer());
        assert!(text.contains("Course 4"));
        assert!(!text.contains("Course 1"));
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let mut grid = CardGrid::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        terminal.draw(|f| grid.render_to(f, f.size(), &[])).unwrap();

        let text = testutil::buffer_text(terminal.backend().buffer());
        assert_eq!(text.trim(), "");
    }
}
