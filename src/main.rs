//! seat-tui - An office seat board for the terminal
//!
//! Loads a seat layout once, then lets the user inspect seats and move them
//! between available, reserved and occupied.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod theme;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;

fn main() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config = Config::load();

    // Seats are loaded before the terminal is taken over so a bad fixture
    // reports on a normal screen
    let mut source = config.seat_source();
    let mut app = match App::from_source(source.as_mut())
        .with_context(|| format!("Failed to load seats from {} source", source.name()))
    {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        tracing::error!("{:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("seat-tui exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("Draw error: {:#}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // An action may produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                tracing::trace!(action = %a, "Dispatch");
                current_action = app.update(a)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
