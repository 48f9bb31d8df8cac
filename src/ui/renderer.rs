use crate::api::{GameApi, HttpGameApi};
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::time::Duration;

/// Run the TUI against the configured games API
pub async fn run_app(config: &Config, logger: Logger) -> anyhow::Result<()> {
    let api: Arc<dyn GameApi> = Arc::new(HttpGameApi::new(&config.api)?);
    log::info!("App: using API at {}", config.api.base_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(api, config.ui.delete_policy, logger.clone());
    let mut event_handler = EventHandler::with_tick_rate(Duration::from_millis(config.ui.tick_rate_ms));

    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    logger.flush();

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

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                let pending_before = app.active_task_count();
                for action in app.process_background_actions() {
                    app.dispatch(action);
                    needs_render = true;
                }
                // Redraw when the in-flight counter in the status bar changes
                if app.active_task_count() != pending_before {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
