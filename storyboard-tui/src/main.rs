mod app;
mod error;
mod terminal;

use std::fs::File;
use std::str::FromStr;

use crossterm::event::{self, Event as CtEvent, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use storyboard::{Scene, StoryboardConfig};

use app::{App, Flow};
use error::AppError;
use terminal::TerminalGuard;

const LOG_FILE: &str = "storyboard.log";

fn main() -> Result<(), AppError> {
    let level = match std::env::var("STORYBOARD_LOG") {
        Ok(value) => LevelFilter::from_str(&value).map_err(|_| AppError::LogLevel(value))?,
        Err(_) => LevelFilter::Debug,
    };
    WriteLogger::init(level, Config::default(), File::create(LOG_FILE)?)?;

    let scenes = match std::env::args().nth(1) {
        Some(path) => load_scenes(&path)?,
        None => sample_scenes(),
    };
    log::info!("[app] starting with {} scenes", scenes.len());

    let config = StoryboardConfig::default();
    let mut term = TerminalGuard::new()?;
    let mut app = App::new(scenes, &config, term.size()?)?;

    loop {
        app.draw(&mut term)?;

        match event::read()? {
            CtEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if let Flow::Quit = app.handle_key(key_event) {
                    break;
                }
            }
            CtEvent::Resize(width, _) => app.resize(width),
            _ => {}
        }
    }

    log::info!("[app] bye");
    Ok(())
}

fn load_scenes(path: &str) -> Result<Vec<Scene>, AppError> {
    let file = File::open(path)?;
    let scenes: Vec<Scene> = serde_json::from_reader(file)?;
    log::debug!("[app] loaded {} scenes from {}", scenes.len(), path);
    Ok(scenes)
}

fn sample_scenes() -> Vec<Scene> {
    vec![
        Scene::new(12, "Opening shot", 1.0),
        Scene::new(13, "The argument", 2.0),
        Scene::new(14, "Chase", 3.0),
        Scene::new(12, "Opening shot (reprise)", 4.0),
        Scene::new(15, "Resolution", 5.0),
    ]
}
