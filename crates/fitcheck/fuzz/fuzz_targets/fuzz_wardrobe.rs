//! Fuzz target for wardrobe import.
//!
//! Arbitrary documents must either load completely or fail with an error,
//! and a loaded wardrobe must survive reverse estimation.

#![no_main]

use fitcheck::{Wardrobe, estimate_body_from_garments};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(wardrobe) = Wardrobe::from_json(text) {
        assert_eq!(wardrobe.version, 1);
        let estimates = estimate_body_from_garments(&wardrobe.to_reverse_garments());
        let _ = serde_json::to_string(&estimates);
    }
});
