// src/analysis/sampling.rs

use crate::simulation::engine::{DayRecord, Trace};

/// Number of rows shown in the sampled detail table.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Picks up to `n` evenly spaced indices over `0..len`, always including the
/// first and last position.
///
/// Positions are the linear spacing from 0 to `len - 1` truncated to integers,
/// computed in integer arithmetic so no float error can shift an index.
pub fn sample_indices(len: usize, n: usize) -> Vec<usize> {
    let count = n.min(len);
    match count {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let mut indices: Vec<usize> = (0..count)
                .map(|i| i * (len - 1) / (count - 1))
                .collect();
            indices.dedup();
            indices
        }
    }
}

/// Clones the records at [`sample_indices`] positions.
pub fn sample_rows(trace: &Trace, n: usize) -> Vec<DayRecord> {
    let records = trace.records();
    sample_indices(records.len(), n)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::PolicyParams;
    use crate::simulation::engine::simulate;

    #[test]
    fn spans_first_to_last() {
        let indices = sample_indices(181, 20);
        assert_eq!(indices.len(), 20);
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&180));
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        // 180 / 19 = 9.47..., truncated
        assert_eq!(&indices[..4], &[0, 9, 18, 28]);
    }

    #[test]
    fn short_traces_are_taken_whole() {
        assert_eq!(sample_indices(5, 20), vec![0, 1, 2, 3, 4]);
        assert_eq!(sample_indices(1, 20), vec![0]);
        assert!(sample_indices(0, 20).is_empty());
        assert!(sample_indices(10, 0).is_empty());
    }

    #[test]
    fn sampled_rows_keep_day_order() {
        let params = PolicyParams {
            days: 60,
            ..PolicyParams::default()
        };
        let trace = simulate(&params).unwrap();
        let rows = sample_rows(&trace, DEFAULT_SAMPLE_SIZE);

        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].day, 0);
        assert_eq!(rows[19].day, 60);
        assert!(rows.windows(2).all(|w| w[0].day < w[1].day));
    }
}
