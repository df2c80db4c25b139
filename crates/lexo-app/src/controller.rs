use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kanal::{AsyncReceiver, Sender};
use lexo_config::Config;
use lexo_core::{EventRelay, SearchOrchestrator};
use lexo_source::{DicionarioAbertoClient, FreeDictionaryClient, http_client};
use lexo_types::{ResultEvent, SearchMode};
use lexo_ui::input::HELP;
use lexo_ui::render::SEARCHING;
use lexo_ui::{Command, ErrorBoundary, SearchRequest, UiBridge, ViewState, parse_line};
use tokio_util::sync::CancellationToken;

/// Wires the services, the orchestrator and the view together
pub struct AppController {
    config: Arc<Config>,
    orchestrator: Arc<SearchOrchestrator>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let services = &config.services;
        let timeout = services.request_timeout_secs.map(Duration::from_secs);
        let client =
            http_client(&services.user_agent, timeout).context("Failed to build HTTP client")?;

        let primary = FreeDictionaryClient::with_client(
            client.clone(),
            &services.primary_url,
            &services.primary_language,
        )
        .context("Invalid primary service URL")?;
        let secondary = DicionarioAbertoClient::with_client(client, &services.secondary_url)
            .context("Invalid secondary service URL")?;

        let relay = Arc::new(EventRelay::new());
        let orchestrator = Arc::new(SearchOrchestrator::new(
            Arc::new(primary),
            Arc::new(secondary),
            relay,
        ));

        Ok(Self {
            config: Arc::new(config),
            orchestrator,
            cancel_token: CancellationToken::new(),
        })
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Single search, printed once it settles
    pub async fn run_once(&self, request: SearchRequest) -> anyhow::Result<()> {
        let (_bridge, events_rx) = UiBridge::attach(Arc::clone(self.orchestrator.relay()));
        let mut state = ViewState::new(request.mode);
        state.begin(&request);

        tokio::select! {
            _ = self.cancel_token.cancelled() => return Ok(()),
            _ = self.orchestrator.execute(&request.word, request.mode) => {}
        }

        while let Some(event) = events_rx.try_recv().context("Result channel closed")? {
            state.apply(event);
        }

        let mut boundary = ErrorBoundary::new();
        print!("{}", boundary.render(&mut state, &self.config.ui));
        Ok(())
    }

    /// Read commands from stdin until `:quit`, EOF or cancellation
    pub async fn run_interactive(&self, initial_mode: SearchMode) -> anyhow::Result<()> {
        let (commands_tx, commands_rx) = kanal::bounded(64);
        let (_bridge, events_rx) = UiBridge::attach(Arc::clone(self.orchestrator.relay()));

        // Plain thread: a blocking stdin read must not hold up runtime shutdown
        std::thread::Builder::new()
            .name("lexo-input".to_string())
            .spawn(move || input_thread(initial_mode, commands_tx))
            .context("Failed to start input thread")?;

        self.view_loop(initial_mode, events_rx, commands_rx.to_async())
            .await
    }

    async fn view_loop(
        &self,
        initial_mode: SearchMode,
        events_rx: AsyncReceiver<ResultEvent>,
        commands_rx: AsyncReceiver<Command>,
    ) -> anyhow::Result<()> {
        let mut state = ViewState::new(initial_mode);
        let mut boundary = ErrorBoundary::new();
        let interactive = atty::is(atty::Stream::Stdin);

        println!("Mode: {}. Type :help for commands.", state.mode);
        self.prompt(interactive);

        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    tracing::info!("View loop cancelled");
                    break;
                }
                event = events_rx.recv() => {
                    let event = event.context("Result channel closed")?;
                    let started = event == ResultEvent::Loading(true);

                    if state.apply(event) {
                        print!("{}", boundary.render(&mut state, &self.config.ui));
                        self.prompt(interactive);
                    } else if started {
                        println!("{SEARCHING}");
                    }
                }
                command = commands_rx.recv() => {
                    let Ok(command) = command else {
                        tracing::debug!("Input closed");
                        break;
                    };

                    match command {
                        Command::Search(request) => {
                            state.begin(&request);
                            let orchestrator = Arc::clone(&self.orchestrator);
                            tokio::spawn(async move {
                                orchestrator.execute(&request.word, request.mode).await;
                            });
                        }
                        Command::SelectMode(mode) => {
                            state.select_mode(mode);
                            println!("Mode: {mode}");
                            self.prompt(interactive);
                        }
                        Command::Reload => {
                            state.reload();
                            println!("View reloaded. Mode: {}", state.mode);
                            self.prompt(interactive);
                        }
                        Command::Help => {
                            print!("{HELP}");
                            self.prompt(interactive);
                        }
                        Command::Quit => break,
                    }
                }
            }
        }

        self.cancel_token.cancel();
        Ok(())
    }

    fn prompt(&self, interactive: bool) {
        if interactive {
            print!("{}", self.config.ui.prompt);
            std::io::stdout().flush().ok();
        }
    }
}

fn input_thread(initial_mode: SearchMode, commands_tx: Sender<Command>) {
    let mut mode = initial_mode;

    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {e}");
                break;
            }
        };

        let command = match parse_line(&line, mode) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        mode = track_mode(mode, initial_mode, &command);
        let quit = command == Command::Quit;
        if !forward(&commands_tx, command) || quit {
            return;
        }
    }

    // EOF
    forward(&commands_tx, Command::Quit);
}

/// False once the view loop has hung up
fn forward(commands_tx: &Sender<Command>, command: Command) -> bool {
    match commands_tx.send(command) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("View loop already gone: {e}");
            false
        }
    }
}

/// Mode the next plain word will be searched with
fn track_mode(current: SearchMode, initial: SearchMode, command: &Command) -> SearchMode {
    match command {
        Command::SelectMode(mode) => *mode,
        Command::Search(request) => request.mode,
        Command::Reload => initial,
        Command::Help | Command::Quit => current,
    }
}
