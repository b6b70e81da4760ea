//! Headless action surface used by drivers and tests.

use super::dispatch::{CommandHandle, DispatchError, Dispatcher, GardenStatus, PlantRoster};
use garden_core::{
    EventReport, Garden, GardenController, Metrics, PestAttackReport, PlantSpec, RulesConfig,
};
use garden_io::{load_roster_or_default, RosterSource};
use std::path::Path;
use std::sync::Arc;

pub struct GardenSimulator {
    rules: RulesConfig,
    dispatcher: Option<Dispatcher>,
    known_parasites: Vec<String>,
}

impl GardenSimulator {
    #[must_use]
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            rules,
            dispatcher: None,
            known_parasites: Vec::new(),
        }
    }

    /// Loads the roster at `path` (or the defaults) and starts a fresh garden.
    pub async fn initialize_garden<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<RosterSource, DispatchError> {
        let (plants, source) = load_roster_or_default(path);
        self.initialize_with(&plants).await?;
        Ok(source)
    }

    /// Starts a fresh garden from explicit plant specs, replacing any running one.
    ///
    /// Invalid specs are refused before the running garden is touched.
    pub async fn initialize_with(&mut self, plants: &[PlantSpec]) -> Result<(), DispatchError> {
        let garden = Garden::from_specs(plants)?;

        if let Err(e) = self.shutdown().await {
            tracing::warn!(error = %e, "Previous garden did not shut down cleanly");
        }

        tracing::info!(plants = ?garden.alive_names(), "Garden initialized");
        self.known_parasites = garden.known_pests();

        let controller = GardenController::new(garden, self.rules.clone(), self.rules.rng());
        self.dispatcher = Some(Dispatcher::spawn(controller));
        Ok(())
    }

    fn dispatcher(&self) -> Result<&Dispatcher, DispatchError> {
        self.dispatcher.as_ref().ok_or(DispatchError::NotInitialized)
    }

    /// Queues rainfall and returns at once.
    pub fn rain(&self, amount: i32) -> Result<CommandHandle<EventReport>, DispatchError> {
        self.dispatcher()?.rain(amount)
    }

    /// Queues a temperature change and returns at once.
    pub fn temperature(&self, temperature_f: i32) -> Result<CommandHandle<EventReport>, DispatchError> {
        self.dispatcher()?.temperature(temperature_f)
    }

    /// Runs a pest attack and waits for it to resolve.
    pub async fn parasites(&self, pest: &str) -> Result<PestAttackReport, DispatchError> {
        self.dispatcher()?.pest_attack(pest)?.completed().await
    }

    /// Sprays pesticide directly, bypassing the random pre-emption.
    pub async fn apply_pesticide(&self) -> Result<EventReport, DispatchError> {
        self.dispatcher()?.pesticide()?.completed().await
    }

    /// Logs and returns the alive/dead partition.
    pub async fn get_status(&self) -> Result<GardenStatus, DispatchError> {
        let status = self.dispatcher()?.status()?.completed().await?;
        tracing::info!(alive = ?status.alive, "Alive plants");
        tracing::info!(dead = ?status.dead, "Dead plants");
        Ok(status)
    }

    /// Names, water requirements and vulnerabilities of the living plants.
    pub async fn get_plants(&self) -> Result<PlantRoster, DispatchError> {
        self.dispatcher()?.roster()?.completed().await
    }

    /// Pests named anywhere in the roster the garden was initialized with.
    #[must_use]
    pub fn known_parasite_names(&self) -> &[String] {
        &self.known_parasites
    }

    #[must_use]
    pub fn metrics(&self) -> Option<Arc<Metrics>> {
        self.dispatcher.as_ref().map(Dispatcher::metrics)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.dispatcher.is_some()
    }

    /// Drains pending commands and hands back the final garden, if one was running.
    pub async fn shutdown(&mut self) -> Result<Option<Garden>, DispatchError> {
        match self.dispatcher.take() {
            Some(dispatcher) => {
                let controller = dispatcher.shutdown().await?;
                Ok(Some(controller.into_garden()))
            }
            None => Ok(None),
        }
    }
}
