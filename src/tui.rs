//! TUI (Terminal User Interface) for browsing Letter Boxed solutions
//!
//! The box is drawn on the left and the solutions on the right. The view is
//! read-only: the search has already run by the time it is shown, so the
//! only input is scrolling and quitting.

use crate::letterbox::Letterbox;
use crate::session::SolutionView;
use crate::solver::Solution;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const BOX_PANEL_PADDING: u16 = 4;
const LETTER_SPACING: usize = 4;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LETTER_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Quit,
}

fn action_for_key(key: KeyEvent) -> Option<BrowseAction> {
    // Some platforms also report releases.
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(BrowseAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(BrowseAction::Down),
        KeyCode::PageUp => Some(BrowseAction::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(BrowseAction::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(BrowseAction::Home),
        KeyCode::End | KeyCode::Char('G') => Some(BrowseAction::End),
        KeyCode::Esc | KeyCode::Char('q') => Some(BrowseAction::Quit),
        _ => None,
    }
}

/// Scroll offset after `action` over `total` rows with `page` rows visible.
/// The last page is kept full.
fn scroll(offset: usize, action: BrowseAction, total: usize, page: usize) -> usize {
    let page = page.max(1);
    let max = total.saturating_sub(page);
    let next = match action {
        BrowseAction::Up => offset.saturating_sub(1),
        BrowseAction::Down => offset + 1,
        BrowseAction::PageUp => offset.saturating_sub(page),
        BrowseAction::PageDown => offset + page,
        BrowseAction::Home => 0,
        BrowseAction::End => max,
        BrowseAction::Quit => offset,
    };
    next.min(max)
}

/// Draws the box as text. Sides are ordered top, right, left, bottom.
fn box_lines(sides: &[String]) -> Vec<String> {
    let [top, right, left, bottom] = sides else {
        return Vec::new();
    };
    let width = (LETTER_SPACING * top.chars().count()).saturating_sub(1);
    let across = |side: &str| {
        let letters: Vec<String> = side.chars().map(String::from).collect();
        format!("    {}", letters.join(" ".repeat(LETTER_SPACING - 1).as_str()))
    };
    let border = format!("  +{}+", "-".repeat(width));

    let mut lines = vec![across(top), border.clone()];
    for (l, r) in left.chars().zip(right.chars()) {
        lines.push(format!("{l} |{}| {r}", " ".repeat(width)));
    }
    lines.push(border);
    lines.push(across(bottom));
    lines
}

/// Width of the panel holding `lines`, clamped to what a terminal can show.
fn box_panel_width(lines: &[String]) -> u16 {
    let widest = lines.iter().map(String::len).max().unwrap_or(0);
    u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(BOX_PANEL_PADDING)
}

/// Terminal solution browser.
pub struct TuiView {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    sides: Vec<String>,
    solutions: Vec<Solution>,
    offset: usize,
    page: usize,
    status: String,
    active: bool,
}

impl TuiView {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiView::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            sides: Vec::new(),
            solutions: Vec::new(),
            offset: 0,
            page: 1,
            status: "Solving...".to_string(),
            active: true,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let lines = box_lines(&self.sides);
        let solutions = &self.solutions;
        let offset = self.offset;
        let status = &self.status;
        let mut page = self.page;

        self.terminal.draw(|f| {
            page = Self::render(f, &lines, solutions, offset, status);
        })?;
        self.page = page;
        Ok(())
    }

    /// Renders the whole screen and returns the number of visible solution rows.
    fn render(
        f: &mut Frame,
        box_lines: &[String],
        solutions: &[Solution],
        offset: usize,
        status: &str,
    ) -> usize {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Box and solutions
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(box_panel_width(box_lines)),
                Constraint::Min(20),
            ])
            .split(rows[1]);

        Self::render_title(f, rows[0]);
        Self::render_box(f, columns[0], box_lines);
        let page = Self::render_solutions(f, columns[1], solutions, offset);
        Self::render_status(f, rows[2], status);
        Self::render_instructions(f, rows[3]);
        page
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("LETTER BOXED SOLVER")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_box(f: &mut Frame, area: Rect, box_lines: &[String]) {
        let lines: Vec<Line> = box_lines
            .iter()
            .map(|line| Line::from(Span::styled(line.clone(), LETTER_STYLE)))
            .collect();
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Box").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_solutions(f: &mut Frame, area: Rect, solutions: &[Solution], offset: usize) -> usize {
        let block = Block::default()
            .title(format!("Solutions ({})", solutions.len()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        let page = inner.height as usize;

        let lines: Vec<Line> = if solutions.is_empty() {
            vec![Line::from(Span::styled("No solutions found.", ERROR_STYLE))]
        } else {
            solutions
                .iter()
                .skip(offset)
                .take(page)
                .map(|solution| {
                    let text = format!("  {solution}");
                    if solution.len() == 1 {
                        Line::from(Span::styled(text, SUCCESS_STYLE))
                    } else {
                        Line::from(text)
                    }
                })
                .collect()
        };

        f.render_widget(Paragraph::new(lines).block(block), area);
        page
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new("UP/DOWN: Scroll | PGUP/PGDN: Page | HOME/END: Jump | Q/ESC: Quit")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn update_status(&mut self) {
        if self.solutions.is_empty() {
            return;
        }
        let last = (self.offset + self.page).min(self.solutions.len());
        self.status = format!(
            "Showing {}-{} of {} solutions",
            self.offset + 1,
            last,
            self.solutions.len()
        );
    }
}

impl SolutionView for TuiView {
    fn display_puzzle(&mut self, letterbox: &Letterbox) -> io::Result<()> {
        self.sides = letterbox
            .sides()
            .iter()
            .map(|side| side.to_string().to_uppercase())
            .collect();
        self.status = format!("Solving {}...", letterbox.to_string().to_uppercase());
        self.draw()
    }

    fn display_solutions(&mut self, solutions: &[Solution]) -> io::Result<()> {
        info_log!("TuiView::display_solutions() - {} solutions", solutions.len());
        self.solutions = solutions.to_vec();
        self.offset = 0;
        self.draw()?;
        self.update_status();
        self.draw()
    }

    fn display_no_solutions(&mut self) -> io::Result<()> {
        self.solutions.clear();
        self.status = "No one- or two-word solutions in this dictionary".to_string();
        self.draw()
    }

    fn finish(&mut self) -> io::Result<()> {
        loop {
            self.draw()?;
            let event = event::read()?;
            debug_log!("finish() - Event received: {:?}", event);
            let Event::Key(key) = event else {
                continue;
            };
            match action_for_key(key) {
                Some(BrowseAction::Quit) => break,
                Some(action) => {
                    self.offset = scroll(self.offset, action, self.solutions.len(), self.page);
                    self.update_status();
                }
                None => {}
            }
        }
        info_log!("finish() - Leaving TUI");
        self.cleanup()
    }
}

impl Drop for TuiView {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
