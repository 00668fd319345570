use std::io;
use std::thread;
use std::time;
use std::time::Duration;

use anyhow::Context;

use crossterm::cursor;
use crossterm::event;

use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;

use tracing_subscriber::EnvFilter;

use sparselife::ScreenSize;
use sparselife::camera::Camera;
use sparselife::patterns;
use sparselife::rules::RuleSet;
use sparselife::world::World;

const FRAMERATE: u32 = 120;
const FRAMETIME: time::Duration =
    time::Duration::from_millis(((1f64 / FRAMERATE as f64) * 1_000f64) as u64);

/// Advance one generation every `DEFAULT_STEP_EVERY` rendered frames.
const DEFAULT_STEP_EVERY: u64 = 5;

enum Event {
    TogglePause,
    StepOnce,
    ClearAll,
    Paint { col: ScreenSize, row: ScreenSize },
    StampGlider,
    StampPentomino,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ResetView,
    FasterTicks,
    SlowerTicks,
    CamResize { cols: ScreenSize, rows: ScreenSize },
    Exit,
}

fn handle_event(event: CtEvent) -> io::Result<Option<Event>> {
    match event {
        CtEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Ok(Some(Event::Exit)),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Ok(Some(Event::TogglePause)),
            KeyEvent {
                code: KeyCode::Char('.'),
                ..
            } => Ok(Some(Event::StepOnce)),
            KeyEvent {
                code: KeyCode::Char('e'),
                ..
            } => Ok(Some(Event::ClearAll)),
            KeyEvent {
                code: KeyCode::Char('g'),
                ..
            } => Ok(Some(Event::StampGlider)),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Ok(Some(Event::StampPentomino)),
            KeyEvent {
                code: KeyCode::Char('h') | KeyCode::Left,
                ..
            } => Ok(Some(Event::MoveLeft)),
            KeyEvent {
                code: KeyCode::Char('j') | KeyCode::Down,
                ..
            } => Ok(Some(Event::MoveDown)),
            KeyEvent {
                code: KeyCode::Char('k') | KeyCode::Up,
                ..
            } => Ok(Some(Event::MoveUp)),
            KeyEvent {
                code: KeyCode::Char('l') | KeyCode::Right,
                ..
            } => Ok(Some(Event::MoveRight)),
            KeyEvent {
                code: KeyCode::Char('0'),
                ..
            } => Ok(Some(Event::ResetView)),
            KeyEvent {
                code: KeyCode::Char('+') | KeyCode::Char('='),
                ..
            } => Ok(Some(Event::FasterTicks)),
            KeyEvent {
                code: KeyCode::Char('-'),
                ..
            } => Ok(Some(Event::SlowerTicks)),
            _ => Ok(None),
        },
        CtEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left),
            column,
            row,
            ..
        }) => Ok(Some(Event::Paint {
            col: column,
            row,
        })),
        CtEvent::Resize(cols, rows) => Ok(Some(Event::CamResize { cols, rows })),
        _ => Ok(None),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // An optional rulestring like `b3s23` may be passed as the first argument
    let rules = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<RuleSet>()
            .with_context(|| format!("invalid rule string {arg:?}"))?,
        None => RuleSet::default(),
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, event::EnableMouseCapture, cursor::Hide)?;

    // Get the width and height of the terminal, reserving one row for status
    let (cols, rows) = terminal::size()?;

    let mut cam = Camera::new(cols, rows.saturating_sub(1));
    let mut world = World::new(rules);

    let mut paused = true;
    let mut step_every = DEFAULT_STEP_EVERY;
    let mut frame: u64 = 0;

    loop {
        let t = time::SystemTime::now();

        // Poll event for as long as FRAMETIME
        let (dt, event) = if event::poll(FRAMETIME)? {
            let event = event::read()?;

            let event = handle_event(event)?;
            let dt = t.elapsed()?;

            (dt, event)
        } else {
            (Duration::ZERO, None)
        };

        match event {
            None => {}
            Some(Event::Exit) => break,
            Some(Event::TogglePause) => paused = !paused,
            Some(Event::StepOnce) => world.advance(),
            Some(Event::ClearAll) => world.clear(),
            Some(Event::Paint { col, row }) => world.activate(cam.cell_at(col, row)),
            Some(Event::StampGlider) => {
                let c = cam.center();
                patterns::stamp(world.grid_mut(), patterns::GLIDER, c.x, c.y);
            }
            Some(Event::StampPentomino) => {
                let c = cam.center();
                patterns::stamp(world.grid_mut(), patterns::R_PENTOMINO, c.x, c.y);
            }
            Some(Event::MoveUp) => cam.offset_y(-4),
            Some(Event::MoveDown) => cam.offset_y(4),
            Some(Event::MoveLeft) => cam.offset_x(-2),
            Some(Event::MoveRight) => cam.offset_x(2),
            Some(Event::ResetView) => cam.reset_view(),
            Some(Event::FasterTicks) => step_every = (step_every - 1).max(1),
            Some(Event::SlowerTicks) => step_every = (step_every + 1).min(60),
            Some(Event::CamResize { cols, rows }) => {
                cam.resize(cols, rows.saturating_sub(1));
            }
        }

        if !paused && frame % step_every == 0 {
            world.advance();
        }
        frame += 1;

        cam.reset();
        cam.draw_cells(world.grid());
        let s = cam.render();

        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in s.lines() {
            execute!(
                stdout,
                style::Print(line),
                crossterm::cursor::MoveToNextLine(1)
            )?;
        }

        let status = format!(
            "{}  gen {}  pop {}  1/{}  [space] pause  [.] step  [e] clear  [g] glider  [q] quit",
            if paused { "paused " } else { "running" },
            world.generation(),
            world.grid().population(),
            step_every,
        );
        execute!(stdout, style::Print(status))?;

        let time_left = FRAMETIME.saturating_sub(dt);
        thread::sleep(time_left);
    }

    execute!(stdout, event::DisableMouseCapture, cursor::Show)?;
    terminal::disable_raw_mode()?;

    Ok(())
}
