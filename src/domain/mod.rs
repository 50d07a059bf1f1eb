// Domain layer - chart data models and shaping logic
pub mod aligner;
pub mod anomaly;
pub mod error;
pub mod palette;
pub mod series;
pub mod value;
