use serde::Serialize;

use super::stats::{mean, pct};
use crate::model::{ApiLogEntry, Direction};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLogStats {
    pub total: usize,
    pub success: usize,
    pub success_rate: f64,
    pub avg_response_ms: u64,
    pub inbound: usize,
    pub outbound: usize,
}

/// Traffic figures over the whole log snapshot. A log without a latency
/// counts as 0 ms in the mean.
pub fn api_log_stats(logs: &[ApiLogEntry]) -> ApiLogStats {
    let total = logs.len();
    let success = logs.iter().filter(|l| l.is_success()).count();
    let latencies: Vec<f64> = logs
        .iter()
        .map(|l| l.response_time_ms.unwrap_or(0.0))
        .collect();
    let inbound = logs
        .iter()
        .filter(|l| l.direction_kind() == Some(Direction::Inbound))
        .count();
    let outbound = logs
        .iter()
        .filter(|l| l.direction_kind() == Some(Direction::Outbound))
        .count();

    ApiLogStats {
        total,
        success,
        success_rate: pct(success, total),
        avg_response_ms: mean(&latencies).round().max(0.0) as u64,
        inbound,
        outbound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(direction: &str, status: u16, ms: Option<f64>) -> ApiLogEntry {
        ApiLogEntry {
            direction: Some(direction.to_string()),
            status_code: Some(status),
            response_time_ms: ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty() {
        let stats = api_log_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.avg_response_ms, 0);
    }

    #[test]
    fn test_mixed_traffic() {
        let logs = vec![
            log("inbound", 200, Some(100.0)),
            log("inbound", 201, Some(151.0)),
            log("outbound", 500, Some(300.0)),
            log("outbound", 404, None),
        ];
        let stats = api_log_stats(&logs);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.success, 2);
        assert_eq!(stats.success_rate, 50.0);
        // (100 + 151 + 300 + 0) / 4 = 137.75 → 138
        assert_eq!(stats.avg_response_ms, 138);
        assert_eq!(stats.inbound, 2);
        assert_eq!(stats.outbound, 2);
    }

    #[test]
    fn test_unknown_direction_counts_in_neither() {
        let logs = vec![log("sideways", 200, Some(10.0)), log("inbound", 200, Some(10.0))];
        let stats = api_log_stats(&logs);
        assert_eq!(stats.inbound + stats.outbound, 1);
        assert_eq!(stats.total, 2);
    }
}
