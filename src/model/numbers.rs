// src/model/numbers.rs

/// Rounds to two decimal places, half away from zero.
///
/// Demand is rounded before it touches any arithmetic, stock and backlog only
/// when a day is recorded.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(120.0), 120.0);
    }
}
