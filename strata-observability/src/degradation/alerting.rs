//! Alert thresholds: more than 3 degradations of one component in an hour is
//! a warning; a component degraded for over 24 hours is critical.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::tracker::DegradationTracker;

const WARNING_BURST: usize = 3;

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Critical,
}

/// A degradation alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationAlert {
    pub level: AlertLevel,
    pub component: String,
    pub message: String,
}

/// Evaluate alerts based on the current degradation tracker state.
pub fn evaluate_alerts(tracker: &DegradationTracker, now: DateTime<Utc>) -> Vec<DegradationAlert> {
    let mut alerts = Vec::new();
    let mut seen = HashSet::new();

    for tracked in tracker.events() {
        let component = &tracked.event.component;
        if !seen.insert(component.clone()) {
            continue;
        }

        if let Some(duration) = tracker.degraded_duration(component, now) {
            if duration > Duration::hours(24) {
                alerts.push(DegradationAlert {
                    level: AlertLevel::Critical,
                    component: component.clone(),
                    message: format!("{component} has been degraded for over 24 hours"),
                });
                continue;
            }
        }

        let recent = tracker.count_recent(component, Duration::hours(1), now);
        if recent > WARNING_BURST {
            alerts.push(DegradationAlert {
                level: AlertLevel::Warning,
                component: component.clone(),
                message: format!("{component} has {recent} degradation events in the last hour"),
            });
        }
    }

    alerts
}
