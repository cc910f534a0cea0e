use crate::config::RotationDefaults;
use crate::rotation::{Clock, RotationCalculator};
use std::sync::Arc;

/// État partagé passé à tous les handlers.
#[derive(Clone)]
pub struct AppState {
    pub calculator: RotationCalculator<Arc<dyn Clock>>,
    pub defaults: RotationDefaults,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>, defaults: RotationDefaults) -> Self {
        Self {
            calculator: RotationCalculator::new(clock),
            defaults,
        }
    }
}
