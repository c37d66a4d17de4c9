//! Quantized color frequency histogram
//!
//! Samples are grouped by rounding each channel to the nearest multiple of
//! the quantization step. Each bucket keeps its population and the channel
//! sums of its members so the representative color is the members' average
//! rather than the bucket corner.

use std::collections::HashMap;

use crate::Color;

/// One histogram bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Quantized key (bucket center)
    pub key: [u8; 3],
    /// Number of samples that fell into the bucket
    pub population: u64,
    sums: [u64; 3],
}

impl Bucket {
    /// Average of the member samples
    pub fn average(&self) -> Color {
        let channel = |sum: u64| ((sum as f64 / self.population as f64).round()).clamp(0.0, 255.0) as u8;
        Color::new(channel(self.sums[0]), channel(self.sums[1]), channel(self.sums[2]))
    }
}

/// Frequency histogram keyed by quantized RGB
#[derive(Debug, Clone)]
pub struct Histogram {
    step: u8,
    buckets: HashMap<[u8; 3], Bucket>,
    samples: u64,
}

impl Histogram {
    /// Create an empty histogram; a step of 0 is treated as 1
    pub fn new(step: u8) -> Self {
        Self {
            step: step.max(1),
            buckets: HashMap::new(),
            samples: 0,
        }
    }

    /// Round a channel to the nearest bucket center
    pub fn quantize(&self, channel: u8) -> u8 {
        let step = self.step as u32;
        (((channel as u32 + step / 2) / step) * step).min(255) as u8
    }

    pub fn add(&mut self, r: u8, g: u8, b: u8) {
        let key = [self.quantize(r), self.quantize(g), self.quantize(b)];
        let bucket = self.buckets.entry(key).or_insert(Bucket {
            key,
            population: 0,
            sums: [0; 3],
        });
        bucket.population += 1;
        bucket.sums[0] += r as u64;
        bucket.sums[1] += g as u64;
        bucket.sums[2] += b as u64;
        self.samples += 1;
    }

    /// Total number of samples added
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets by descending population, ties broken by key for determinism
    pub fn into_ranked(self) -> Vec<Bucket> {
        let mut ranked: Vec<Bucket> = self.buckets.into_values().collect();
        ranked.sort_by(|a, b| b.population.cmp(&a.population).then(a.key.cmp(&b.key)));
        ranked
    }
}
