//! Graceful shutdown handling for the day-stepping driver.

use super::api::GardenSimulator;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tracks whether the run should stop early.
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Requests shutdown on Ctrl+C. Must be called from within a tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Drains the simulator's queue before exit.
    pub async fn cleanup(&self, sim: &mut GardenSimulator) -> Result<()> {
        tracing::info!("Performing shutdown cleanup...");
        if let Some(garden) = sim.shutdown().await? {
            tracing::info!(census = ?garden.census(), "Final garden census");
        }
        tracing::info!("Cleanup complete");
        Ok(())
    }
}
