#![forbid(unsafe_code)]

//! Showcase: drive the option picker against a real terminal.
//!
//! Runs the picker full-screen in raw mode. `j`/`k`/arrows move, `enter`
//! confirms, `q`/`esc` leaves without choosing. The picker itself never
//! touches the terminal; this binary is the host loop the widget expects
//! to live inside.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::read;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use optpick::{ColorProfile, Event, KeyCode, KeyEventKind, OptionPicker, Styles};
use std::io::{self, Write};

const MENU: [&str; 10] = [
    "Americano",
    "Cappuccino",
    "Cold Brew",
    "Espresso",
    "Flat White",
    "Latte",
    "Macchiato",
    "Mocha",
    "Pour Over",
    "Ristretto",
];

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    match result? {
        Some(choice) => writeln!(stdout, "you chose: {choice}")?,
        None => writeln!(stdout, "nothing chosen")?,
    }
    Ok(())
}

fn run(stdout: &mut impl Write) -> io::Result<Option<String>> {
    let mut picker = OptionPicker::new();
    picker.styles = Styles::with_profile(detect_profile());
    picker.options = MENU.iter().map(|option| (*option).to_string()).collect();

    let (width, height) = terminal::size()?;
    picker = picker.update(&Event::Resize { width, height });
    draw(stdout, &picker)?;

    loop {
        let Some(event) = Event::from_crossterm(read()?) else {
            continue;
        };
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if key.is_char('q') || key.code == KeyCode::Escape {
                return Ok(None);
            }
        }
        if let Some(choice) = picker.did_select(&event) {
            return Ok(Some(choice.to_string()));
        }
        picker = picker.update(&event);
        draw(stdout, &picker)?;
    }
}

fn draw(stdout: &mut impl Write, picker: &OptionPicker) -> io::Result<()> {
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    // Raw mode needs explicit carriage returns.
    for line in picker.view().lines() {
        write!(stdout, "{line}\r\n")?;
    }
    write!(stdout, "\r\n  j/k move · enter select · q quit\r\n")?;
    stdout.flush()
}

fn detect_profile() -> ColorProfile {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    let colorterm = std::env::var("COLORTERM").unwrap_or_default();
    let true_color = matches!(colorterm.as_str(), "truecolor" | "24bit");
    let term = std::env::var("TERM").unwrap_or_default();
    ColorProfile::from_flags(true_color, term.contains("256color"), no_color)
}
