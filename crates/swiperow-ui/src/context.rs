use crate::ExclusivityCoordinator;
use swiperow_core::LooperHandle;
use swiperow_foundation::SwipeConfig;

/// List-level state shared by every row attached to the same list: the loop
/// animation ticks run on, the exclusivity coordinator and the gesture tuning.
#[derive(Clone, Debug)]
pub struct SwipeContext {
    looper: LooperHandle,
    coordinator: ExclusivityCoordinator,
    config: SwipeConfig,
}

impl SwipeContext {
    pub fn new(looper: LooperHandle) -> Self {
        Self::with_config(looper, SwipeConfig::default())
    }

    pub fn with_config(looper: LooperHandle, config: SwipeConfig) -> Self {
        Self {
            looper,
            coordinator: ExclusivityCoordinator::new(),
            config,
        }
    }

    pub fn looper(&self) -> &LooperHandle {
        &self.looper
    }

    pub fn coordinator(&self) -> &ExclusivityCoordinator {
        &self.coordinator
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }
}
