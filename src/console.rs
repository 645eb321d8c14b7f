use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, terminal,
};
use std::io;
use torolife::{LifeEngine, Pos2};

use crate::stats::Dashboard;

/// What the user asked the host loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Exit,
    TogglePause,
    /// Advance one generation while paused
    Step,
    Reset,
    LoadPattern,
    SpeedUp,
    SlowDown,
    /// Run unthrottled until toggled off
    ToggleFastForward,
    /// Move the view by the given offset
    Pan(Pos2),
    Handled,
}

/// Maps a key press onto the command it stands for
fn key_command(key: KeyEvent) -> ConsoleCommand {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ConsoleCommand::Exit
        }
        KeyCode::Char('q') | KeyCode::Esc => ConsoleCommand::Exit,
        KeyCode::Char(' ') => ConsoleCommand::TogglePause,
        KeyCode::Char('n') => ConsoleCommand::Step,
        KeyCode::Char('r') => ConsoleCommand::Reset,
        KeyCode::Char('l') => ConsoleCommand::LoadPattern,
        KeyCode::Char('f') => ConsoleCommand::ToggleFastForward,
        KeyCode::Char('+') | KeyCode::Char('=') => ConsoleCommand::SpeedUp,
        KeyCode::Char('-') => ConsoleCommand::SlowDown,
        // arrows to move the view
        KeyCode::Up => ConsoleCommand::Pan(Pos2::new(0, -1)),
        KeyCode::Down => ConsoleCommand::Pan(Pos2::new(0, 1)),
        KeyCode::Left => ConsoleCommand::Pan(Pos2::new(-1, 0)),
        KeyCode::Right => ConsoleCommand::Pan(Pos2::new(1, 0)),
        _ => ConsoleCommand::Handled,
    }
}

pub struct ConsoleRender {
    tl: Pos2,
    dashboard: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            tl: Pos2::default(),
            dashboard: String::new(),
        })
    }

    pub fn render(&self, game: &LifeEngine) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // the bottom row belongs to the dashboard
        let grid_rows = rows.saturating_sub(1);
        let br = self.tl
            + Pos2 {
                x: cols as i32,
                y: grid_rows as i32,
            };
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in game.window(self.tl, br).iter() {
            let cell = cell - self.tl;
            queue!(stdout, cursor::MoveTo(cell.x as u16, cell.y as u16))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, grid_rows))?;
        io::Write::write_all(&mut stdout, self.dashboard.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    /// Takes the next pending key press, if there is one
    ///
    /// Panning is applied to the view here and reported as handled.
    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let event::Event::Key(key) = event::read()? else {
            return Ok(Some(ConsoleCommand::Handled));
        };
        if key.kind != KeyEventKind::Press {
            return Ok(Some(ConsoleCommand::Handled));
        }
        match key_command(key) {
            ConsoleCommand::Pan(delta) => {
                self.tl = self.tl + delta;
                Ok(Some(ConsoleCommand::Handled))
            }
            cmd => Ok(Some(cmd)),
        }
    }

    pub fn set_dashboard(&mut self, dashboard: &Dashboard) {
        self.dashboard = dashboard.to_string();
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    }
}
