//! Serialized command processing.
//!
//! One worker task owns the `GardenController` and applies commands strictly
//! in submission order, so no two events ever touch the garden at once.
//! Every submission returns a `CommandHandle`; dropping it is the
//! fire-and-forget case and the command still runs.

use garden_core::{EventReport, GardenController, GardenError, Metrics, PestAttackReport};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("garden has not been initialized")]
    NotInitialized,

    #[error("invalid garden: {0}")]
    InvalidGarden(#[from] GardenError),

    #[error("command worker has stopped")]
    WorkerClosed,

    #[error("command worker was interrupted: {0}")]
    WorkerInterrupted(String),
}

/// Alive and dead plant names, in garden order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GardenStatus {
    pub alive: Vec<String>,
    pub dead: Vec<String>,
}

/// Parallel lists describing the living plants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlantRoster {
    pub plants: Vec<String>,
    #[serde(rename = "waterRequirement")]
    pub water_requirement: Vec<i32>,
    pub parasites: Vec<Vec<String>>,
}

enum Command {
    Rain {
        amount: i32,
        reply: oneshot::Sender<EventReport>,
    },
    Temperature {
        temperature: i32,
        reply: oneshot::Sender<EventReport>,
    },
    PestAttack {
        pest: String,
        reply: oneshot::Sender<PestAttackReport>,
    },
    Pesticide {
        reply: oneshot::Sender<EventReport>,
    },
    Status {
        reply: oneshot::Sender<GardenStatus>,
    },
    Roster {
        reply: oneshot::Sender<PlantRoster>,
    },
}

impl Command {
    fn kind(&self) -> &'static str {
        match self {
            Command::Rain { .. } => "rain",
            Command::Temperature { .. } => "temperature",
            Command::PestAttack { .. } => "pest_attack",
            Command::Pesticide { .. } => "pesticide",
            Command::Status { .. } => "status",
            Command::Roster { .. } => "roster",
        }
    }
}

/// Completion handle for one submitted command.
#[must_use = "drop the handle explicitly to fire and forget"]
pub struct CommandHandle<T> {
    kind: &'static str,
    rx: oneshot::Receiver<T>,
}

impl<T> CommandHandle<T> {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Waits until the worker has applied the command.
    pub async fn completed(self) -> Result<T, DispatchError> {
        self.rx.await.map_err(|_| DispatchError::WorkerClosed)
    }
}

pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Command>,
    worker: JoinHandle<GardenController>,
    metrics: Arc<Metrics>,
}

impl Dispatcher {
    /// Starts the worker. Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(controller: GardenController) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let metrics = Arc::new(Metrics::new());
        let worker = tokio::spawn(run_worker(controller, rx, Arc::clone(&metrics)));
        Self { tx, worker, metrics }
    }

    #[must_use]
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    pub fn rain(&self, amount: i32) -> Result<CommandHandle<EventReport>, DispatchError> {
        self.submit(|reply| Command::Rain { amount, reply })
    }

    pub fn temperature(&self, temperature: i32) -> Result<CommandHandle<EventReport>, DispatchError> {
        self.submit(|reply| Command::Temperature { temperature, reply })
    }

    pub fn pest_attack(&self, pest: &str) -> Result<CommandHandle<PestAttackReport>, DispatchError> {
        let pest = pest.to_string();
        self.submit(|reply| Command::PestAttack { pest, reply })
    }

    pub fn pesticide(&self) -> Result<CommandHandle<EventReport>, DispatchError> {
        self.submit(|reply| Command::Pesticide { reply })
    }

    pub fn status(&self) -> Result<CommandHandle<GardenStatus>, DispatchError> {
        self.submit(|reply| Command::Status { reply })
    }

    pub fn roster(&self) -> Result<CommandHandle<PlantRoster>, DispatchError> {
        self.submit(|reply| Command::Roster { reply })
    }

    fn submit<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<CommandHandle<T>, DispatchError> {
        let (reply, rx) = oneshot::channel();
        let command = build(reply);
        let kind = command.kind();
        self.tx.send(command).map_err(|_| {
            tracing::warn!(kind, "Command rejected, worker has stopped");
            DispatchError::WorkerClosed
        })?;
        Ok(CommandHandle { kind, rx })
    }

    /// Closes the queue, waits for queued commands to drain and returns the controller.
    pub async fn shutdown(self) -> Result<GardenController, DispatchError> {
        drop(self.tx);
        self.worker.await.map_err(|e| {
            tracing::warn!(error = %e, "Command worker interrupted");
            DispatchError::WorkerInterrupted(e.to_string())
        })
    }
}

async fn run_worker(
    mut controller: GardenController,
    mut rx: mpsc::UnboundedReceiver<Command>,
    metrics: Arc<Metrics>,
) -> GardenController {
    while let Some(command) = rx.recv().await {
        let kind = command.kind();
        let before = controller.garden().census();
        let delivered = execute(&mut controller, command);

        let deaths = controller.garden().census().dead.saturating_sub(before.dead);
        for violation in controller.garden().audit(&before) {
            metrics.record_violation(&violation.to_string());
        }
        metrics.record_command(kind, deaths);

        if !delivered {
            tracing::trace!(kind, "Command completed without a listener");
        }
    }
    tracing::debug!("Command queue closed, worker exiting");
    controller
}

/// Applies one command. Returns whether the reply reached a listener.
fn execute(controller: &mut GardenController, command: Command) -> bool {
    match command {
        Command::Rain { amount, reply } => {
            let report = controller.simulate_rain(amount);
            tracing::info!(amount, "It rained");
            reply.send(report).is_ok()
        }
        Command::Temperature { temperature, reply } => {
            tracing::info!(temperature, "Temperature reached");
            reply.send(controller.simulate_temperature(temperature)).is_ok()
        }
        Command::PestAttack { pest, reply } => {
            tracing::info!(pest = %pest, "Parasite infested the garden");
            reply.send(controller.simulate_pest_attack(&pest)).is_ok()
        }
        Command::Pesticide { reply } => reply.send(controller.apply_pesticide()).is_ok(),
        Command::Status { reply } => {
            let status = GardenStatus {
                alive: controller.alive_plants(),
                dead: controller.dead_plants(),
            };
            reply.send(status).is_ok()
        }
        Command::Roster { reply } => {
            let mut roster = PlantRoster::default();
            for plant in controller.garden().plants().iter().filter(|p| p.is_alive()) {
                roster.plants.push(plant.name.clone());
                roster.water_requirement.push(plant.water_requirement());
                roster.parasites.push(plant.vulnerabilities().to_vec());
            }
            reply.send(roster).is_ok()
        }
    }
}
