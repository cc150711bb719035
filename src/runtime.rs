//! Event loop plumbing between the handler and the worker thread.
//!
//! [`Runtime`] owns the application state and a spawned worker. Dispatching an
//! event runs the handler, then executes the returned actions: worker messages
//! are posted and counted as in flight, `Quit` stops the loop. Responses are
//! fed back through the handler as [`Event::WorkerResponse`].
//!
//! Responses are collected either without blocking ([`Runtime::poll`]) or by
//! waiting until nothing is in flight ([`Runtime::settle`]).

use crate::api::{BrewApi, HttpBrewApi};
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::Result;
use crate::ui;
use crate::worker::{BrewWorker, WorkerHandle};
use crate::Config;
use std::time::Duration;

/// Application state plus the worker serving its API calls.
#[derive(Debug)]
pub struct Runtime {
    state: AppState,
    worker: WorkerHandle,
    in_flight: usize,
    running: bool,
    response_timeout: Duration,
}

impl Runtime {
    /// Spawns a worker for `api` and takes ownership of `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread cannot be started.
    pub fn new(state: AppState, api: Box<dyn BrewApi>, response_timeout: Duration) -> Result<Self> {
        let worker = BrewWorker::new(api).spawn()?;
        Ok(Self {
            state,
            worker,
            in_flight: 0,
            running: true,
            response_timeout,
        })
    }

    /// Builds a runtime talking to the HTTP API named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the worker cannot be created.
    pub fn connect(config: &Config, state: AppState) -> Result<Self> {
        let api = HttpBrewApi::new(&config.api_base_url, config.request_timeout())?;
        Self::new(state, Box::new(api), config.response_timeout())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether `Quit` has not been dispatched yet.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of worker requests without a response yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Runs the handler for `event` and executes the resulting actions.
    ///
    /// Returns whether the screen needs to be redrawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler fails or the worker is gone.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.state, event)?;
        self.execute(actions)?;
        Ok(render)
    }

    fn execute(&mut self, actions: Vec<Action>) -> Result<()> {
        for action in actions {
            match action {
                Action::Quit => {
                    tracing::debug!("quit requested");
                    self.running = false;
                }
                Action::PostToWorker(message) => {
                    tracing::trace!(operation = message.operation().describe(), "posting to worker");
                    self.worker.post(message)?;
                    self.in_flight += 1;
                }
            }
        }
        Ok(())
    }

    /// Handles every response that has already arrived, without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread has stopped.
    pub fn poll(&mut self) -> Result<bool> {
        let mut render = false;
        while self.in_flight > 0 {
            match self.worker.recv_timeout(Duration::ZERO)? {
                Some(response) => {
                    self.in_flight -= 1;
                    render |= self.dispatch(&Event::WorkerResponse(response))?;
                }
                None => break,
            }
        }
        Ok(render)
    }

    /// Waits until every in-flight request has been answered.
    ///
    /// Gives up (leaving the requests counted as in flight) once a single
    /// wait exceeds the response timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread has stopped.
    pub fn settle(&mut self) -> Result<bool> {
        let mut render = false;
        while self.in_flight > 0 {
            let Some(response) = self.worker.recv_timeout(self.response_timeout)? else {
                tracing::warn!(in_flight = self.in_flight, "timed out waiting for worker");
                break;
            };
            self.in_flight -= 1;
            render |= self.dispatch(&Event::WorkerResponse(response))?;
        }
        Ok(render)
    }

    /// Renders the current state for a terminal `cols` wide.
    #[must_use]
    pub fn render(&self, cols: usize) -> String {
        ui::render(&self.state, cols)
    }
}
