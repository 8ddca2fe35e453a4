//! lifelab - Terminal User Interface
//!
//! An interactive Game of Life viewer using ratatui.
//! App logic lives in `lifelab::tui::app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use lifelab::config::LifeConfig;
    use lifelab::tui::LifeApp;

    // Optional config path as the first argument
    let app = match std::env::args().nth(1) {
        Some(path) => {
            let config = match LifeConfig::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error loading {path}: {e}");
                    std::process::exit(1);
                }
            };
            match LifeApp::from_config(config) {
                Ok(app) => app,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => LifeApp::new(),
    };

    tui::run(app)
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use lifelab::tui::LifeApp;
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph, Sparkline},
        Frame, Terminal,
    };
    use std::io;
    use std::time::{Duration, Instant};

    /// Run the TUI application.
    pub fn run(mut app: LifeApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(1000 / u64::from(app.refresh_hz().max(1)));

        loop {
            let start = Instant::now();
            terminal.draw(|f| ui(f, &app))?;

            let timeout = tick_rate.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                break;
            }

            app.update();
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &LifeApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(4),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_universe(f, chunks[1], app);
        render_metrics(f, chunks[2], app);
        render_population_sparkline(f, chunks[3], app);
    }

    fn render_title(f: &mut Frame, area: Rect, app: &LifeApp) {
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " LIFELAB ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                if app.paused { "[PAUSED]" } else { "[RUNNING]" },
                Style::default().fg(if app.paused {
                    Color::Yellow
                } else {
                    Color::Green
                }),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Generation: {}", app.metrics.generation),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{}x speed", app.steps_per_frame),
                Style::default().fg(Color::Cyan),
            ),
        ])])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls: [Space] Pause  [R] Reset  [+/-] Speed  [Q] Quit"),
        );
        f.render_widget(title, area);
    }

    fn render_universe(f: &mut Frame, area: Rect, app: &LifeApp) {
        let universe = Paragraph::new(app.grid_text())
            .block(Block::default().borders(Borders::ALL).title("Universe"))
            .style(Style::default().fg(Color::White));
        f.render_widget(universe, area);
    }

    fn render_metrics(f: &mut Frame, area: Rect, app: &LifeApp) {
        let m = &app.metrics;
        let metrics = Paragraph::new(vec![Line::from(vec![
            Span::styled("Population: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", m.population), Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled("Births: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", m.births), Style::default().fg(Color::Green)),
            Span::raw(" | "),
            Span::styled("Deaths: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", m.deaths), Style::default().fg(Color::Red)),
            Span::raw(" | "),
            Span::styled("Gen/s: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.0}", m.generations_per_second),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" | "),
            Span::styled("Frame: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", app.frame_count),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled(app.status.clone(), Style::default().fg(Color::Gray)),
        ])])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(metrics, area);
    }

    fn render_population_sparkline(f: &mut Frame, area: Rect, app: &LifeApp) {
        let samples: Vec<u64> = app
            .population_series
            .values()
            .into_iter()
            .map(|v| v.max(0.0) as u64)
            .collect();

        let sparkline = Sparkline::default()
            .block(Block::default().borders(Borders::ALL).title("Population"))
            .data(&samples)
            .style(Style::default().fg(Color::Magenta));
        f.render_widget(sparkline, area);
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ratatui::backend::TestBackend;

        fn create_test_terminal() -> Terminal<TestBackend> {
            let backend = TestBackend::new(80, 40);
            Terminal::new(backend).expect("Failed to create test terminal")
        }

        #[test]
        fn test_ui_renders_without_panic() {
            let mut terminal = create_test_terminal();
            let app = LifeApp::new();

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render without panic");
        }

        #[test]
        fn test_render_title_paused() {
            let mut terminal = create_test_terminal();
            let mut app = LifeApp::new();
            app.paused = true;

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_title(f, area, &app);
                })
                .expect("Paused title should render");
        }

        #[test]
        fn test_render_universe() {
            let mut terminal = create_test_terminal();
            let app = LifeApp::new();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_universe(f, area, &app);
                })
                .expect("Universe should render");
        }

        #[test]
        fn test_render_metrics() {
            let mut terminal = create_test_terminal();
            let app = LifeApp::new();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_metrics(f, area, &app);
                })
                .expect("Metrics should render");
        }

        #[test]
        fn test_render_sparkline_with_history() {
            let mut terminal = create_test_terminal();
            let mut app = LifeApp::new();
            for _ in 0..50 {
                app.update();
            }

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_population_sparkline(f, area, &app);
                })
                .expect("Sparkline should render");
        }

        #[test]
        fn test_ui_after_multiple_updates() {
            let mut terminal = create_test_terminal();
            let mut app = LifeApp::new();

            for _ in 0..50 {
                app.update();
            }

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render after updates");
        }
    }
}
