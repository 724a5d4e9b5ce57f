pub mod fsm;
mod predictor;
pub mod prompt;
pub mod sanitize;
mod types;
mod validate;

pub use fsm::{RequestEvent, RequestLifecycle, RequestState};
pub use predictor::Predictor;
pub use types::{PredictionRequest, PredictionResult, PriceRange};
pub use validate::parse_prediction_request;
