pub mod api;
pub mod dispatch;
pub mod shutdown;

pub use api::GardenSimulator;
pub use dispatch::{CommandHandle, DispatchError, Dispatcher, GardenStatus, PlantRoster};
pub use shutdown::ShutdownManager;
