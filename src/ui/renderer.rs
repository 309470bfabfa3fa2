//! Terminal setup and the async event loop.

use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::storage::{ExerciseStore, LocalStorage};
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};

/// Open the local store and run the application until quit.
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let storage = LocalStorage::new().await?;
    run_with_store(config, Arc::new(storage)).await
}

/// Run the UI against any store implementation.
pub async fn run_with_store(config: Config, store: Arc<dyn ExerciseStore>) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(store, config);
    let mut event_handler = EventHandler::new();

    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                // Store completions come back on ticks
                let background_actions = app.process_background_actions();
                for action in background_actions {
                    app.dispatch(action);
                    needs_render = true;
                }
            }
            EventType::Render => {
                needs_render = true;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
