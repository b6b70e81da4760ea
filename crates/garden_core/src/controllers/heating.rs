/// Temperature the heating system brings the garden up to, in °F.
pub const MINIMUM_SAFE_TEMPERATURE: i32 = 50;

/// Stateless heating policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatingController;

impl HeatingController {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the temperature the heaters hold the garden at.
    #[must_use]
    pub fn activate_heating(&self) -> i32 {
        tracing::info!(
            target_f = MINIMUM_SAFE_TEMPERATURE,
            "Activating heating system"
        );
        MINIMUM_SAFE_TEMPERATURE
    }
}
