//! Event loop tying the coordinator, console input, and rendering together.
use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use client_frontend_core::{
    EventConsumer, EventImpact, Frontend, FrontendConfig, HistoryMessages, HistoryViewModel,
    MessageLog,
};
use runtime::{HistoryCoordinator, HistoryEvent};

use crate::input::{HELP, InputAction, parse_line};
use crate::presentation;

enum Step {
    Line(Option<String>),
    Event(Result<HistoryEvent, RecvError>),
}

/// Console frontend reading commands line by line.
///
/// Generic over its input and output so tests can drive it with in-memory
/// buffers; [`ConsoleFrontend::new`] binds it to stdin and stdout.
pub struct ConsoleFrontend<R = BufReader<io::Stdin>, W = io::Stdout> {
    config: FrontendConfig,
    input: Lines<R>,
    output: W,
    consumer: HistoryMessages,
}

impl ConsoleFrontend {
    pub fn new(config: FrontendConfig) -> Self {
        Self::with_io(config, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleFrontend<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn with_io(config: FrontendConfig, input: R, output: W) -> Self {
        let consumer = HistoryMessages::new(MessageLog::new(config.messages.capacity));
        Self {
            config,
            input: input.lines(),
            output,
            consumer,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn messages(&self) -> &MessageLog {
        self.consumer.message_log()
    }

    async fn execute(&mut self, coordinator: HistoryCoordinator) -> Result<()> {
        tracing::info!("Console frontend starting...");

        let mut events = coordinator.subscribe();
        self.write(&format!("{HELP}\n")).await?;

        coordinator.fetch_games_from_history().await;
        self.drain_events(&mut events, &coordinator).await?;

        loop {
            self.write("> ").await?;

            let step = tokio::select! {
                line = self.input.next_line() => Step::Line(line?),
                result = events.recv() => Step::Event(result),
            };

            match step {
                Step::Line(None) => break,
                Step::Line(Some(line)) => {
                    if self.handle_line(&line, &coordinator).await? {
                        break;
                    }
                    self.drain_events(&mut events, &coordinator).await?;
                }
                Step::Event(result) => {
                    let impact = self.on_received(result);
                    self.settle(impact, &mut events, &coordinator).await?;
                }
            }
        }

        tracing::info!("Console frontend exiting");
        Ok(())
    }

    /// Returns true when the user asked to quit.
    async fn handle_line(&mut self, line: &str, coordinator: &HistoryCoordinator) -> Result<bool> {
        match parse_line(line) {
            Ok(InputAction::Quit) => return Ok(true),
            Ok(InputAction::List) => self.render(coordinator).await?,
            Ok(InputAction::Retry) => coordinator.fetch_games_from_history().await,
            Ok(InputAction::Record(candidate)) => {
                tracing::debug!("Recording game with {} moves", candidate.move_history.len());
                coordinator.add_game_to_history(candidate).await;
            }
            Ok(InputAction::Help) => self.write(&format!("{HELP}\n")).await?,
            Ok(InputAction::None) => {}
            Err(err) => self.write(&format!("{err}\n")).await?,
        }
        Ok(false)
    }

    fn on_received(&mut self, result: Result<HistoryEvent, RecvError>) -> EventImpact {
        match result {
            Ok(event) => self.consumer.on_event(&event),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Console frontend lagged behind by {} events", skipped);
                EventImpact::redraw()
            }
            Err(RecvError::Closed) => EventImpact::none(),
        }
    }

    /// Apply everything already queued, then render at most once.
    async fn drain_events(
        &mut self,
        events: &mut broadcast::Receiver<HistoryEvent>,
        coordinator: &HistoryCoordinator,
    ) -> Result<()> {
        self.settle(EventImpact::none(), events, coordinator).await
    }

    async fn settle(
        &mut self,
        mut impact: EventImpact,
        events: &mut broadcast::Receiver<HistoryEvent>,
        coordinator: &HistoryCoordinator,
    ) -> Result<()> {
        loop {
            match events.try_recv() {
                Ok(event) => impact = impact.combine(self.consumer.on_event(&event)),
                Err(TryRecvError::Lagged(_)) => impact = impact.combine(EventImpact::redraw()),
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        if impact.requires_redraw {
            self.render(coordinator).await?;
        }
        Ok(())
    }

    async fn render(&mut self, coordinator: &HistoryCoordinator) -> Result<()> {
        let model = HistoryViewModel::from_snapshot(&coordinator.snapshot());
        let text = presentation::render(
            &model,
            self.consumer.message_log(),
            self.config.messages.visible_lines,
        );
        self.write(&text).await
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> Frontend for ConsoleFrontend<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn run(&mut self, coordinator: HistoryCoordinator) -> Result<()> {
        self.execute(coordinator).await
    }
}
