//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use cyclist_scatter::RawRecord;

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// A small dataset in wire form: one alleged rider between two clean ones
pub fn sample_raw_records() -> Vec<RawRecord> {
    vec![
        builders::RawRecordBuilder::new(1, 1998, "36:40").build(),
        builders::RawRecordBuilder::new(2, 2001, "37:01")
            .doping("EPO")
            .build(),
        builders::RawRecordBuilder::new(3, 2005, "39:15").build(),
    ]
}

/// `records` serialised the way the published dataset is
pub fn dataset_json(records: &[RawRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap()
}
