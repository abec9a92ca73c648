//! Owned garments: measurements, feedback and reverse estimation.

mod dimensions;
mod measurement;
mod reverse;

pub use dimensions::ClothingDimensions;
pub use measurement::{
    AnchorPoint, ClothingCategory, FitFeedback, ReverseGarment, ReverseMeasurement,
};
pub use reverse::{
    BodyEstimate, ClothingTransform, DEFAULT_RULES, ReverseEstimator, ReverseRule,
    estimate_body_from_garments, garment_from_chart_row,
};
