//! Terminal front end for the Endereço address form.
//!
//! Plays the role of the hosting page: owns the displayed field values,
//! feeds keystrokes through the live formatters, and renders notifications.
//! Tab/Shift+Tab move between fields, Enter submits, Esc quits. Submitting
//! never leaves the form; a rejected attempt keeps everything editable.

mod model;

use std::fs::File;
use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use endereco_form::{Field, FormSurface, Notice, submit};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::model::FormModel;

fn main() -> io::Result<()> {
    let log_file = File::create("endereco-tui.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    info!("endereco-tui started");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let mut form = FormModel::new();

    loop {
        draw(&form, out)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => return Ok(()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                submit(&mut form);
            }
            KeyCode::Char(c) => form.insert(c),
            _ => {}
        }
    }
}

fn draw(form: &FormModel, out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("Cadastro de Endereço"),
        MoveTo(0, 1),
        Print("Tab muda o campo, Enter envia, Esc sai"),
    )?;

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let marker = if form.focused() == field { '>' } else { ' ' };
        queue!(
            out,
            MoveTo(0, 3 + i as u16),
            Print(format!(
                "{} {:<10} [{}]",
                marker,
                field.label(),
                form.value(field)
            )),
        )?;
    }

    if let Some(notice) = form.notice() {
        let line = match notice {
            Notice::Error(msg) => format!("!! {msg}"),
            Notice::Success(msg) => format!("ok {msg}"),
        };
        queue!(out, MoveTo(0, 8), Print(line))?;
    }

    out.flush()
}
