//! FitCheck: predict whether a garment fits without trying it on.
//!
//! Body measurements are estimated from three sources, merged in a fixed
//! priority order over a statistical baseline:
//!
//! - **Statistical baseline**: population norms looked up by gender, height
//!   and weight, blended across the nearest reference bands
//! - **Direct input**: measurements the shopper typed in, with correlated
//!   fields shifted to match
//! - **Owned garments**: measurements of clothes the shopper already owns,
//!   corrected by how each one felt when worn
//!
//! Retailer size charts are recovered from copy-pasted text and compared
//! against the estimated body part by part.
//!
//! # Example
//!
//! ```
//! use fitcheck::body::{Gender, OverrideLayers};
//! use fitcheck::FitCheck;
//!
//! let fitcheck = FitCheck::new();
//! let chart = fitcheck
//!     .parse_chart("사이즈\t어깨너비\t가슴단면\nS\t43\t51\nM\t45\t53")
//!     .unwrap();
//! let body = fitcheck
//!     .estimate_body(Gender::Male, 175.0, 70.0, &OverrideLayers::new())
//!     .unwrap();
//!
//! let best = fitcheck.recommend(&chart, &body.dimensions).unwrap();
//! println!("Recommended size: {}", best.label);
//! ```

pub mod body;
pub mod chart;
pub mod error;
pub mod fit;
pub mod garment;
pub mod wardrobe;

mod fitcheck;

pub use crate::fitcheck::{BodyReport, FitCheck, FitCheckConfig, WardrobeReport};
pub use body::{BodyDimensions, BodyField, CorrelationEstimator, Gender, StatisticalBodyTable};
pub use chart::{ParsedSizeChart, SizeChartParser, parse_size_chart};
pub use error::{FitCheckError, Result};
pub use garment::{ReverseEstimator, estimate_body_from_garments};
pub use wardrobe::Wardrobe;
