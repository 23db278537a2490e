use std::sync::Arc;

use anyhow::Context;

use crate::api::{gateway_channel, ApiClient, GatewayWorker};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the browser until the user quits.
///
/// `open_character` opens the detail panel for that id right after start.
pub fn run(config: Config, open_character: Option<u32>) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api).context("failed to build HTTP client")?;
    tracing::info!(base_url = %client.base_url(), "starting character browser");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("gateway")
        .build()
        .context("failed to start async runtime")?;

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;

    // Input is read only once raw mode is on
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let (gateway, receiver) = gateway_channel();
    runtime.spawn(GatewayWorker::new(receiver).run(Arc::new(client), events.sender()));

    let mut app = App::new(&config.ui);
    app.attach_gateway(gateway);
    app.start();
    if let Some(id) = open_character {
        app.open_detail(id);
    }

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("character browser stopped");
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: std::time::Duration,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Gateway(event)) => app.on_gateway_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
