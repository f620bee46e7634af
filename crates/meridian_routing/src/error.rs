use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Unknown location \"{0}\"")]
    UnknownLocation(String),
    #[error("Invalid weight {weight} for edge {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("Accumulated path cost overflowed")]
    CostOverflow,
}
