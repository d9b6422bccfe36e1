use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::backend::Backend as TerminalBackend;
use tokio::sync::watch;

use painel::adapters::{FirebaseBackend, InMemoryBackend, ReqwestHttpClient};
use painel::app::Panel;
use painel::cli::{parse_args, run_cli_command, CliCommand};
use painel::config::{BackendChoice, PainelConfig};
use painel::input::{InputHandler, KeyOutcome};
use painel::logging;
use painel::notifications::ToastCenter;
use painel::state::StateContainer;
use painel::terminal::{install_panic_hook, Tui};
use painel::traits::{Backend, WatchRenderer};
use painel::view::ViewDocument;

/// Redraw tick while a toast is counting down.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }

    let options = match command {
        CliCommand::Run(options) => options,
        _ => return Ok(()),
    };

    color_eyre::install()?;

    let mut config = PainelConfig::load_from(options.config.as_deref())?;
    if options.demo {
        config = config.with_demo(true);
    }

    if let Err(e) = logging::init(&config.log_filter, &config.log_file) {
        eprintln!(
            "Warning: could not open log file {}: {}",
            config.log_file.display(),
            e
        );
    }

    let backend: Arc<dyn Backend> = match config.backend()? {
        BackendChoice::Demo => {
            tracing::info!("using the in-memory demo backend");
            Arc::new(InMemoryBackend::demo())
        }
        BackendChoice::Firebase(options) => {
            tracing::info!(project = %options.project_id, "using Firebase");
            Arc::new(FirebaseBackend::new(ReqwestHttpClient::new(), options))
        }
    };

    install_panic_hook();

    // Current-thread: every operation is a task on this one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (renderer, documents) = WatchRenderer::new();
    let store = Arc::new(StateContainer::new(Arc::new(renderer)));
    let toasts = Arc::new(ToastCenter::new());
    let panel = Panel::new(store, backend, toasts.clone());
    let input = InputHandler::new(panel.clone(), toasts.clone());

    let mut tui = Tui::enter()?;
    let result = runtime.block_on(run_app(&mut tui, &panel, &input, &toasts, documents));
    tui.restore();

    tracing::info!("painel exiting");
    result
}

async fn run_app<B: TerminalBackend>(
    tui: &mut Tui<B>,
    panel: &Panel,
    input: &InputHandler,
    toasts: &ToastCenter,
    mut documents: watch::Receiver<Option<ViewDocument>>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        let toast = toasts.current();
        tui.draw_if_stale(
            || {
                documents
                    .borrow_and_update()
                    .clone()
                    .unwrap_or_else(|| panel.document())
            },
            toast.as_ref(),
        )?;

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            changed = documents.changed() => {
                if changed.is_err() {
                    tracing::warn!("renderer channel closed");
                    return Ok(());
                }
                tui.invalidate();
            }

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) => match input.handle_key(key) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Handled | KeyOutcome::Spawned(_) => tui.invalidate(),
                    KeyOutcome::Ignored => {}
                },
                Some(Ok(Event::Paste(text))) => {
                    if let KeyOutcome::Handled = input.handle_paste(&text) {
                        tui.invalidate();
                    }
                }
                Some(Ok(Event::Resize(..))) => tui.invalidate(),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}
