use std::sync::Arc;
use crate::charge::ChargeService;

#[derive(Clone)]
pub struct AppState {
    pub charges: Arc<ChargeService>,
}
