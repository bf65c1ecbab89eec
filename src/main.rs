use std::sync::Arc;

use eyre::Result;
use taskdeck::app::services::{ActionService, EventService};
use taskdeck::app::{App, destruct_terminal_for_panic};
use taskdeck::cli::Command;
use taskdeck::config::{Configuration, init_logger, verbose};
use taskdeck::models::{Action, ConfigSessionProvider, SessionProvider};
use taskdeck::remote::{ArcTaskStore, ArcWeatherApi, HttpTaskStore, OpenMeteo};
use tokio::{sync::mpsc, task};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    Configuration::init(config.clone())?;

    init_logger(&config.log)?;
    verbose!("[+] Logger initialized");

    let session = ConfigSessionProvider::new(&config.server).get_session();
    match &session {
        Some(_) => verbose!("[+] Session token found"),
        None => verbose!("[!] No session token configured, set server.token to log in"),
    }

    let store: ArcTaskStore =
        Arc::new(HttpTaskStore::from(&config.server).with_session(session.clone()));

    let weather: Option<ArcWeatherApi> = if config.weather.enabled {
        Some(Arc::new(OpenMeteo::from(&config.weather)))
    } else {
        verbose!("[!] Weather panel disabled");
        None
    };

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let mut events = EventService::default();

    let mut task_set = task::JoinSet::new();
    let token = CancellationToken::new();

    let mut action_service = ActionService::new(
        Arc::new(events.event_tx()),
        action_rx,
        store,
        weather,
        token.clone(),
    );
    task_set.spawn(async move { action_service.run().await });

    // Kick off the initial fetches so the first frames have data to wait on.
    let _ = action_tx.send(Action::LoadTasks);
    let _ = action_tx.send(Action::LoadWeather);

    let mut app = App::new(action_tx, &mut events, session, token.clone());
    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();
    task_set.abort_all();
    while let Some(res) = task_set.join_next().await {
        if let Err(err) = res {
            log::error!("Task error: {}", err);
        }
    }

    Ok(())
}
