//! Dense lookup table from sparse control points
//!
//! Each channel is expanded independently by linear interpolation between
//! consecutive control points. Point x positions are scaled to the domain
//! and rounded to the nearest integer step; each segment writes the steps
//! `[a_step, b_step)`, so a segment's end value is produced as the start of
//! the next one.

use crate::channel::{Channel, ChannelStore, NUM_CHANNELS};

/// Sampled transfer function: `domain` rows of interleaved R, G, B, A values
#[derive(Debug, Clone, PartialEq)]
pub struct SampledTable {
    domain: usize,
    values: Vec<f32>,
}

impl SampledTable {
    /// Number of rows (domain steps)
    pub fn domain(&self) -> usize {
        self.domain
    }

    /// Row for one domain step, in channel order
    pub fn row(&self, step: usize) -> Option<[f32; NUM_CHANNELS]> {
        let start = step.checked_mul(NUM_CHANNELS)?;
        let row = self.values.get(start..start + NUM_CHANNELS)?;
        Some([row[0], row[1], row[2], row[3]])
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = [f32; NUM_CHANNELS]> + '_ {
        self.values
            .chunks_exact(NUM_CHANNELS)
            .map(|row| [row[0], row[1], row[2], row[3]])
    }

    /// Values of a single channel across the domain
    pub fn channel(&self, channel: Channel) -> impl Iterator<Item = f32> + '_ {
        self.values
            .iter()
            .skip(channel.index())
            .step_by(NUM_CHANNELS)
            .copied()
    }

    /// Flat row-major values, `domain * 4` long
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }
}

/// Expand all channels of `store` into a table with `domain` rows
///
/// Channels with fewer than two points stay at zero. Segments that collapse
/// to zero steps after rounding are skipped.
pub fn sample(store: &ChannelStore, domain: usize) -> SampledTable {
    let mut values = vec![0.0f32; domain * NUM_CHANNELS];
    let scale = domain as f32;

    for (channel, points) in store.iter() {
        let column = channel.index();
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let a_step = (a.x * scale).round() as i64;
            let b_step = (b.x * scale).round() as i64;
            let interval = b_step - a_step;
            if interval <= 0 {
                continue;
            }

            let slope = (b.y - a.y) / interval as f32;
            for i in 0..interval {
                let step = a_step + i;
                if step < 0 {
                    continue;
                }
                let step = step as usize;
                if step >= domain {
                    break;
                }
                values[step * NUM_CHANNELS + column] = a.y + i as f32 * slope;
            }
        }
    }

    SampledTable { domain, values }
}
