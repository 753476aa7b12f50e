use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use meshglow_config::Config;
use meshglow_mesh::{MeshAnimation, Surface};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// How long to wait for input between frames.
    frame_interval: Duration,
    /// Clock captured at startup; every frame derives its elapsed time
    /// from it.
    started: Instant,
    /// The pixel buffer, sized once from the viewport and never resized.
    /// `None` when the terminal reported a zero-sized viewport, in which
    /// case nothing is ever drawn.
    surface: Option<Surface>,
    /// The animated mesh gradient.
    animation: MeshAnimation,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            frame_interval: Duration::from_millis(config.frame_interval_ms),
            started: Instant::now(),
            surface: None,
            animation: MeshAnimation::new(config.speed),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        // Viewport dimensions are read once; the bottom row is reserved
        // for the help footer.
        let size = terminal.size()?;
        self.surface = Surface::new(size.width, size.height.saturating_sub(1));
        self.started = Instant::now();

        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one frame of the mesh plus the help footer.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;

        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        if let Some(surface) = self.surface.as_mut() {
            self.animation.tick(elapsed_ms, surface);

            let lines: Vec<Line> = (0..surface.height())
                .map(|y| {
                    let spans: Vec<Span> = (0..surface.width())
                        .map(|x| Span::styled(" ", Style::new().bg(surface.pixel(x, y).to_color())))
                        .collect();
                    Line::from(spans)
                })
                .collect();

            frame.render_widget(Paragraph::new(lines), chunks[0]);
        }

        let help = Line::from(vec![
            "q".bold(),
            " quit  ".dark_gray(),
            "s".bold(),
            format!(" speed: {}", self.animation.speed().label()).dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polling with the frame interval as timeout keeps the mesh moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // The surface keeps its startup dimensions on purpose.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            _ => {}
        }
    }

    /// Cycle through animation speeds.
    fn cycle_speed(&mut self) {
        self.animation.set_speed(self.animation.speed().next());
    }

    /// Stop the animation and quit.
    fn quit(&mut self) {
        self.animation.stop();
        self.running = false;
    }
}
