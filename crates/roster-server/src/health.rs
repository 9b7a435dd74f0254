//! Liveness report for `GET /api/health`.

use std::time::{Duration, Instant};

use chrono::Utc;

use roster_core::health::{
    DatabaseHealth, DatabaseStatus, HealthCheckResponse, HealthStatus, ServiceHealth,
};
use roster_db::error::DatabaseError;
use roster_db::service::RosterService;

/// Builds health reports; remembers when the process started.
#[derive(Debug, Clone)]
pub struct HealthService {
    started: Instant,
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Probe the database and assemble the report. Never fails: a failed
    /// probe yields an `unhealthy` report.
    pub async fn check(&self, service: &RosterService) -> HealthCheckResponse {
        self.report(service.ping().await)
    }

    /// Assemble the report from the outcome of a database probe.
    #[must_use]
    pub fn report(&self, probe: Result<Duration, DatabaseError>) -> HealthCheckResponse {
        let (status, database) = match probe {
            Ok(elapsed) => (
                HealthStatus::Healthy,
                DatabaseHealth {
                    status: DatabaseStatus::Connected,
                    response_time: Some(elapsed.as_secs_f64() * 1000.0),
                },
            ),
            Err(error) => {
                tracing::warn!(%error, "database health probe failed");
                (
                    HealthStatus::Unhealthy,
                    DatabaseHealth {
                        status: DatabaseStatus::Error,
                        response_time: None,
                    },
                )
            }
        };

        HealthCheckResponse {
            status,
            timestamp: Utc::now(),
            uptime: self.uptime().as_secs_f64(),
            services: Some(ServiceHealth {
                database: Some(database),
            }),
        }
    }
}
