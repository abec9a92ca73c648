//! Built-in population reference table.
//!
//! Banded by height (cm) and weight (kg) per gender. Bands are contiguous
//! within a gender; the tallest and heaviest bands are wider. Combinations
//! with implausible BMI are absent.
//!
//! Values per row: shoulder width, chest, waist, hip, neck, arm length,
//! torso length, inseam (cm).

use super::field::Gender::{self, Female, Male};
use super::table::{AnthropometricEntry, Band};

const fn row(gender: Gender, h0: u16, h1: u16, w0: u16, w1: u16, v: [f64; 8]) -> AnthropometricEntry {
    AnthropometricEntry::new(
        gender,
        Band::new(h0 as f64, h1 as f64),
        Band::new(w0 as f64, w1 as f64),
        v,
    )
}

#[rustfmt::skip]
pub(crate) static ENTRIES: &[AnthropometricEntry] = &[
    // male
    row(Male, 155, 160, 50, 55, [40.2, 88.2, 70.4, 84.3, 34.8, 53.6, 56.1, 71.0]),
    row(Male, 155, 160, 55, 60, [41.1, 90.8, 74.5, 86.7, 35.5, 53.6, 56.2, 71.5]),
    row(Male, 155, 160, 60, 65, [41.5, 93.5, 78.7, 89.8, 36.1, 53.6, 56.2, 71.2]),
    row(Male, 155, 160, 65, 70, [41.8, 96.2, 82.8, 92.2, 36.8, 53.6, 57.0, 71.0]),
    row(Male, 155, 160, 70, 75, [42.1, 98.8, 87.7, 94.6, 37.4, 53.6, 57.0, 70.7]),
    row(Male, 155, 160, 75, 80, [42.4, 101.5, 91.8, 97.0, 38.1, 54.3, 57.1, 70.5]),
    row(Male, 155, 160, 80, 85, [42.6, 104.8, 96.0, 99.4, 38.7, 54.3, 57.1, 70.2]),
    row(Male, 155, 160, 85, 90, [43.0, 107.5, 100.1, 101.8, 40.1, 54.3, 57.2, 70.0]),
    row(Male, 160, 165, 50, 55, [41.1, 87.5, 68.9, 84.8, 34.9, 55.4, 57.6, 73.4]),
    row(Male, 160, 165, 55, 60, [42.0, 90.1, 73.0, 87.2, 35.6, 55.4, 57.7, 73.8]),
    row(Male, 160, 165, 60, 65, [42.4, 92.8, 77.2, 90.3, 36.2, 55.4, 57.7, 73.5]),
    row(Male, 160, 165, 65, 70, [42.6, 95.4, 81.3, 92.7, 36.9, 55.4, 58.5, 73.3]),
    row(Male, 160, 165, 70, 75, [43.0, 98.0, 86.2, 95.1, 37.5, 55.4, 58.5, 73.0]),
    row(Male, 160, 165, 75, 80, [43.2, 100.7, 90.3, 97.5, 38.2, 56.1, 58.6, 72.8]),
    row(Male, 160, 165, 80, 85, [43.5, 104.0, 94.5, 99.9, 38.8, 56.1, 58.6, 72.5]),
    row(Male, 160, 165, 85, 90, [43.9, 106.7, 98.6, 102.3, 40.2, 56.1, 58.7, 72.3]),
    row(Male, 160, 165, 90, 95, [44.8, 109.3, 102.8, 104.7, 40.8, 56.1, 58.7, 72.8]),
    row(Male, 165, 170, 50, 55, [42.0, 86.7, 67.4, 85.3, 35.0, 57.1, 59.1, 75.7]),
    row(Male, 165, 170, 55, 60, [42.9, 89.3, 71.5, 87.7, 35.7, 57.1, 59.2, 76.1]),
    row(Male, 165, 170, 60, 65, [43.2, 92.0, 75.7, 90.8, 36.3, 57.1, 59.2, 75.9]),
    row(Male, 165, 170, 65, 70, [43.5, 94.7, 79.8, 93.2, 37.0, 57.1, 60.0, 75.6]),
    row(Male, 165, 170, 70, 75, [43.9, 97.3, 84.7, 95.6, 37.6, 57.1, 60.0, 75.4]),
    row(Male, 165, 170, 75, 80, [44.1, 100.0, 88.8, 98.0, 38.3, 57.8, 60.1, 75.2]),
    row(Male, 165, 170, 80, 85, [44.4, 103.3, 93.0, 100.4, 38.9, 57.8, 60.1, 74.9]),
    row(Male, 165, 170, 85, 90, [44.8, 106.0, 97.1, 102.8, 40.3, 57.8, 60.2, 74.6]),
    row(Male, 165, 170, 90, 95, [45.7, 108.6, 101.3, 105.2, 40.9, 57.8, 60.2, 75.1]),
    row(Male, 165, 170, 95, 100, [46.1, 111.2, 105.4, 108.3, 41.6, 57.8, 60.3, 74.8]),
    row(Male, 170, 175, 50, 55, [42.9, 86.0, 65.9, 85.8, 35.1, 58.9, 60.6, 78.1]),
    row(Male, 170, 175, 55, 60, [43.8, 88.6, 70.0, 88.2, 35.8, 58.9, 60.7, 78.5]),
    row(Male, 170, 175, 60, 65, [44.1, 91.2, 74.2, 91.3, 36.4, 58.9, 60.7, 78.2]),
    row(Male, 170, 175, 65, 70, [44.4, 93.9, 78.3, 93.7, 37.1, 58.9, 61.5, 78.0]),
    row(Male, 170, 175, 70, 75, [44.8, 96.5, 83.2, 96.1, 37.7, 58.9, 61.5, 77.8]),
    row(Male, 170, 175, 75, 80, [45.0, 99.2, 87.3, 98.5, 38.4, 59.6, 61.6, 77.5]),
    row(Male, 170, 175, 80, 85, [45.3, 102.5, 91.5, 100.9, 39.0, 59.6, 61.6, 77.2]),
    row(Male, 170, 175, 85, 90, [45.6, 105.2, 95.6, 103.3, 40.4, 59.6, 61.7, 77.0]),
    row(Male, 170, 175, 90, 95, [46.6, 107.8, 99.8, 105.7, 41.0, 59.6, 61.7, 77.5]),
    row(Male, 170, 175, 95, 100, [47.0, 110.5, 103.9, 108.8, 41.7, 59.6, 61.8, 77.2]),
    row(Male, 175, 180, 50, 55, [43.8, 85.2, 64.4, 86.3, 35.2, 60.6, 62.1, 80.4]),
    row(Male, 175, 180, 55, 60, [44.8, 87.8, 68.5, 88.7, 35.9, 60.6, 62.2, 80.8]),
    row(Male, 175, 180, 60, 65, [45.1, 90.5, 72.7, 91.8, 36.5, 60.6, 62.2, 80.6]),
    row(Male, 175, 180, 65, 70, [45.4, 93.2, 76.8, 94.2, 37.2, 60.6, 63.0, 80.3]),
    row(Male, 175, 180, 70, 75, [45.7, 95.8, 81.7, 96.6, 37.8, 60.6, 63.0, 80.1]),
    row(Male, 175, 180, 75, 80, [46.0, 98.5, 85.8, 99.0, 38.5, 61.3, 63.1, 79.9]),
    row(Male, 175, 180, 80, 85, [46.2, 101.8, 90.0, 101.4, 39.1, 61.3, 63.1, 79.6]),
    row(Male, 175, 180, 85, 90, [46.6, 104.5, 94.1, 103.8, 40.5, 61.3, 63.2, 79.3]),
    row(Male, 175, 180, 90, 95, [47.5, 107.1, 98.3, 106.2, 41.1, 61.3, 63.2, 79.8]),
    row(Male, 175, 180, 95, 100, [47.9, 109.8, 102.4, 109.3, 41.8, 61.3, 63.3, 79.5]),
    row(Male, 175, 180, 100, 115, [48.6, 115.2, 110.8, 114.2, 43.2, 61.4, 64.2, 79.1]),
    row(Male, 180, 185, 55, 60, [45.6, 87.1, 67.0, 89.2, 36.0, 62.4, 63.7, 83.2]),
    row(Male, 180, 185, 60, 65, [46.0, 89.8, 71.2, 92.3, 36.6, 62.4, 63.7, 83.0]),
    row(Male, 180, 185, 65, 70, [46.2, 92.4, 75.3, 94.7, 37.3, 62.4, 64.5, 82.7]),
    row(Male, 180, 185, 70, 75, [46.6, 95.0, 80.2, 97.1, 37.9, 62.4, 64.5, 82.5]),
    row(Male, 180, 185, 75, 80, [46.9, 97.7, 84.3, 99.5, 38.6, 63.1, 64.6, 82.2]),
    row(Male, 180, 185, 80, 85, [47.1, 101.0, 88.5, 101.9, 39.2, 63.1, 64.6, 82.0]),
    row(Male, 180, 185, 85, 90, [47.5, 103.7, 92.6, 104.3, 40.6, 63.1, 64.7, 81.7]),
    row(Male, 180, 185, 90, 95, [48.4, 106.3, 96.8, 106.7, 41.2, 63.1, 64.7, 82.2]),
    row(Male, 180, 185, 95, 100, [48.8, 109.0, 100.9, 109.8, 41.9, 63.1, 64.8, 81.9]),
    row(Male, 180, 185, 100, 115, [49.5, 114.4, 109.3, 114.7, 43.3, 63.2, 65.7, 81.5]),
    row(Male, 185, 190, 60, 65, [46.9, 89.0, 69.7, 92.8, 36.7, 64.1, 65.2, 85.3]),
    row(Male, 185, 190, 65, 70, [47.1, 91.7, 73.8, 95.2, 37.4, 64.1, 66.0, 85.0]),
    row(Male, 185, 190, 70, 75, [47.5, 94.3, 78.7, 97.6, 38.0, 64.1, 66.0, 84.8]),
    row(Male, 185, 190, 75, 80, [47.8, 97.0, 82.8, 100.0, 38.7, 64.8, 66.1, 84.6]),
    row(Male, 185, 190, 80, 85, [48.0, 100.3, 87.0, 102.4, 39.3, 64.8, 66.1, 84.3]),
    row(Male, 185, 190, 85, 90, [48.4, 103.0, 91.1, 104.8, 40.7, 64.8, 66.2, 84.0]),
    row(Male, 185, 190, 90, 95, [49.3, 105.6, 95.3, 107.2, 41.3, 64.8, 66.2, 84.5]),
    row(Male, 185, 190, 95, 100, [49.7, 108.2, 99.4, 110.3, 42.0, 64.8, 66.3, 84.2]),
    row(Male, 185, 190, 100, 115, [50.4, 113.7, 107.8, 115.2, 43.4, 64.9, 67.2, 83.8]),
    row(Male, 190, 200, 65, 70, [48.5, 90.5, 71.6, 96.0, 37.5, 66.8, 68.2, 88.6]),
    row(Male, 190, 200, 70, 75, [48.8, 93.2, 76.4, 98.3, 38.2, 66.8, 68.3, 88.3]),
    row(Male, 190, 200, 75, 80, [49.1, 95.8, 80.6, 100.8, 38.8, 67.5, 68.3, 88.1]),
    row(Male, 190, 200, 80, 85, [49.4, 99.2, 84.7, 103.2, 39.5, 67.5, 68.4, 87.8]),
    row(Male, 190, 200, 85, 90, [49.7, 101.8, 88.9, 105.5, 40.8, 67.4, 68.4, 87.6]),
    row(Male, 190, 200, 90, 95, [50.7, 104.5, 93.0, 108.0, 41.5, 67.5, 68.5, 88.0]),
    row(Male, 190, 200, 95, 100, [51.0, 107.1, 97.2, 111.0, 42.1, 67.5, 68.5, 87.8]),
    row(Male, 190, 200, 100, 115, [51.7, 112.5, 105.6, 116.0, 43.5, 67.5, 69.4, 87.4]),
    // female
    row(Female, 145, 150, 40, 45, [35.5, 79.4, 61.6, 82.6, 30.5, 49.1, 52.5, 66.4]),
    row(Female, 145, 150, 45, 50, [36.5, 82.3, 65.5, 85.5, 31.0, 49.1, 52.5, 66.9]),
    row(Female, 145, 150, 50, 55, [36.7, 85.2, 69.4, 89.1, 31.5, 49.1, 52.6, 66.6]),
    row(Female, 145, 150, 55, 60, [37.0, 88.1, 73.3, 92.0, 32.0, 49.1, 53.3, 66.4]),
    row(Female, 145, 150, 60, 65, [37.2, 91.0, 77.9, 94.9, 32.5, 49.1, 53.4, 66.1]),
    row(Female, 145, 150, 65, 70, [37.5, 93.9, 81.8, 97.8, 33.0, 49.8, 53.4, 65.9]),
    row(Female, 145, 150, 70, 75, [37.7, 97.5, 85.7, 100.7, 33.5, 49.8, 53.5, 65.6]),
    row(Female, 145, 150, 75, 80, [38.0, 100.4, 89.6, 103.6, 34.7, 49.8, 53.5, 65.4]),
    row(Female, 150, 155, 40, 45, [36.3, 78.8, 60.4, 83.2, 30.6, 50.7, 53.9, 68.7]),
    row(Female, 150, 155, 45, 50, [37.3, 81.7, 64.3, 86.1, 31.1, 50.7, 53.9, 69.2]),
    row(Female, 150, 155, 50, 55, [37.5, 84.6, 68.2, 89.7, 31.6, 50.7, 54.0, 68.9]),
    row(Female, 150, 155, 55, 60, [37.8, 87.5, 72.1, 92.6, 32.1, 50.7, 54.7, 68.7]),
    row(Female, 150, 155, 60, 65, [38.0, 90.4, 76.7, 95.5, 32.6, 50.7, 54.8, 68.4]),
    row(Female, 150, 155, 65, 70, [38.3, 93.3, 80.6, 98.4, 33.1, 51.4, 54.8, 68.2]),
    row(Female, 150, 155, 70, 75, [38.5, 96.9, 84.5, 101.3, 33.6, 51.4, 54.9, 67.9]),
    row(Female, 150, 155, 75, 80, [38.8, 99.8, 88.4, 104.2, 34.8, 51.4, 54.9, 67.7]),
    row(Female, 150, 155, 80, 85, [39.7, 102.7, 92.3, 107.1, 35.3, 51.4, 55.0, 68.1]),
    row(Female, 155, 160, 40, 45, [37.1, 78.2, 59.1, 83.8, 30.7, 52.4, 55.3, 71.0]),
    row(Female, 155, 160, 45, 50, [38.1, 81.1, 63.0, 86.7, 31.2, 52.4, 55.3, 71.5]),
    row(Female, 155, 160, 50, 55, [38.3, 84.0, 66.9, 90.3, 31.7, 52.4, 55.4, 71.2]),
    row(Female, 155, 160, 55, 60, [38.6, 86.9, 70.8, 93.2, 32.2, 52.4, 56.1, 71.0]),
    row(Female, 155, 160, 60, 65, [38.8, 89.8, 75.4, 96.1, 32.7, 52.4, 56.2, 70.7]),
    row(Female, 155, 160, 65, 70, [39.1, 92.7, 79.3, 99.0, 33.2, 53.1, 56.2, 70.5]),
    row(Female, 155, 160, 70, 75, [39.3, 96.3, 83.2, 101.9, 33.7, 53.1, 56.3, 70.2]),
    row(Female, 155, 160, 75, 80, [39.6, 99.2, 87.1, 104.8, 34.9, 53.1, 56.3, 70.0]),
    row(Female, 155, 160, 80, 85, [40.5, 102.1, 91.0, 107.7, 35.4, 53.1, 56.4, 70.4]),
    row(Female, 160, 165, 45, 50, [38.9, 80.5, 61.8, 87.3, 31.3, 54.0, 56.7, 73.8]),
    row(Female, 160, 165, 50, 55, [39.1, 83.4, 65.7, 90.9, 31.8, 54.0, 56.8, 73.5]),
    row(Female, 160, 165, 55, 60, [39.4, 86.3, 69.6, 93.8, 32.3, 54.0, 57.5, 73.3]),
    row(Female, 160, 165, 60, 65, [39.6, 89.2, 74.2, 96.7, 32.8, 54.0, 57.6, 73.0]),
    row(Female, 160, 165, 65, 70, [39.9, 92.1, 78.1, 99.6, 33.3, 54.7, 57.6, 72.8]),
    row(Female, 160, 165, 70, 75, [40.1, 95.7, 82.0, 102.5, 33.8, 54.7, 57.7, 72.5]),
    row(Female, 160, 165, 75, 80, [40.4, 98.6, 85.9, 105.4, 35.0, 54.7, 57.7, 72.3]),
    row(Female, 160, 165, 80, 85, [41.3, 101.5, 89.8, 108.3, 35.5, 54.7, 57.8, 72.7]),
    row(Female, 160, 165, 85, 100, [41.9, 107.4, 97.7, 114.9, 36.6, 54.8, 58.0, 72.3]),
    row(Female, 165, 170, 45, 50, [39.7, 79.9, 60.5, 87.9, 31.4, 55.7, 58.1, 76.1]),
    row(Female, 165, 170, 50, 55, [39.9, 82.8, 64.4, 91.5, 31.9, 55.7, 58.2, 75.8]),
    row(Female, 165, 170, 55, 60, [40.2, 85.7, 68.3, 94.4, 32.4, 55.7, 58.9, 75.6]),
    row(Female, 165, 170, 60, 65, [40.4, 88.6, 72.9, 97.3, 32.9, 55.7, 59.0, 75.3]),
    row(Female, 165, 170, 65, 70, [40.7, 91.5, 76.8, 100.2, 33.4, 56.4, 59.0, 75.1]),
    row(Female, 165, 170, 70, 75, [40.9, 95.1, 80.7, 103.1, 33.9, 56.4, 59.1, 74.8]),
    row(Female, 165, 170, 75, 80, [41.2, 98.0, 84.6, 106.0, 35.1, 56.4, 59.1, 74.6]),
    row(Female, 165, 170, 80, 85, [42.1, 100.9, 88.5, 108.9, 35.6, 56.4, 59.2, 75.0]),
    row(Female, 165, 170, 85, 100, [42.7, 106.8, 96.4, 115.5, 36.7, 56.5, 59.4, 74.6]),
    row(Female, 170, 175, 50, 55, [40.7, 82.2, 63.2, 92.1, 32.0, 57.3, 59.6, 78.1]),
    row(Female, 170, 175, 55, 60, [41.0, 85.1, 67.1, 95.0, 32.5, 57.3, 60.3, 77.9]),
    row(Female, 170, 175, 60, 65, [41.2, 88.0, 71.7, 97.9, 33.0, 57.3, 60.4, 77.6]),
    row(Female, 170, 175, 65, 70, [41.5, 90.9, 75.6, 100.8, 33.5, 58.0, 60.4, 77.4]),
    row(Female, 170, 175, 70, 75, [41.7, 94.5, 79.5, 103.7, 34.0, 58.0, 60.5, 77.1]),
    row(Female, 170, 175, 75, 80, [42.0, 97.4, 83.4, 106.6, 35.2, 58.0, 60.5, 76.9]),
    row(Female, 170, 175, 80, 85, [42.9, 100.3, 87.3, 109.5, 35.7, 58.0, 60.6, 77.3]),
    row(Female, 170, 175, 85, 100, [43.5, 106.2, 95.2, 116.1, 36.8, 58.1, 60.8, 76.9]),
    row(Female, 175, 180, 50, 55, [41.5, 81.6, 61.9, 92.7, 32.1, 59.0, 61.0, 80.4]),
    row(Female, 175, 180, 55, 60, [41.8, 84.5, 65.8, 95.6, 32.6, 59.0, 61.7, 80.2]),
    row(Female, 175, 180, 60, 65, [42.0, 87.4, 70.4, 98.5, 33.1, 59.0, 61.8, 79.9]),
    row(Female, 175, 180, 65, 70, [42.3, 90.3, 74.3, 101.4, 33.6, 59.7, 61.8, 79.7]),
    row(Female, 175, 180, 70, 75, [42.5, 93.9, 78.2, 104.3, 34.1, 59.7, 61.9, 79.4]),
    row(Female, 175, 180, 75, 80, [42.8, 96.8, 82.1, 107.2, 35.3, 59.7, 61.9, 79.2]),
    row(Female, 175, 180, 80, 85, [43.7, 99.7, 86.0, 110.1, 35.8, 59.7, 62.0, 79.6]),
    row(Female, 175, 180, 85, 100, [44.3, 105.6, 93.9, 116.7, 36.9, 59.8, 62.2, 79.2]),
];
