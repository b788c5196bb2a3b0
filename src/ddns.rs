use crate::{api::DnsUpdateClient, logging::Logger};
use log::kv::ToValue;
use reqwest::StatusCode;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated { status: StatusCode },
    Rejected { status: StatusCode, body: String },
    Failed,
}

pub struct Updater<C> {
    client: C,
    logger: Logger,
    period: Duration,
}

impl<C: DnsUpdateClient> Updater<C> {
    pub fn new(client: C, logger: Logger, period: Duration) -> Self {
        Self {
            client,
            logger,
            period,
        }
    }

    /// Runs a single update cycle and logs its outcome.
    pub async fn update_once(&self) -> UpdateOutcome {
        self.logger.debug("sending DNS update request", &[]);

        match self.client.send_update().await {
            Ok(response) if response.is_failure() => {
                self.logger.error(
                    "got error response from DNS server",
                    &[
                        ("status_code", response.status.as_u16().to_value()),
                        ("status", response.status_text().to_value()),
                        ("response_body", response.body.to_value()),
                    ],
                );
                UpdateOutcome::Rejected {
                    status: response.status,
                    body: response.body,
                }
            }
            Ok(response) => {
                self.logger.info(
                    "successfully updated DNS entry",
                    &[("status_code", response.status.as_u16().to_value())],
                );
                UpdateOutcome::Updated {
                    status: response.status,
                }
            }
            Err(e) => {
                self.logger.error(
                    "failed to send DNS update request",
                    &[("error", format!("{e:#}").to_value())],
                );
                UpdateOutcome::Failed
            }
        }
    }

    /// Updates once per period until `shutdown` is cancelled.
    ///
    /// The first cycle runs one full period after start. A request in flight when
    /// `shutdown` fires is allowed to finish; the loop notices on its next wait.
    pub async fn run(&self, shutdown: CancellationToken) {
        let mut ticker = time::interval_at(Instant::now() + self.period, self.period);
        // A slow request pushes the schedule back instead of bursting missed ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.logger.info(
            "starting DNS updater",
            &[("update_period", format!("{:?}", self.period).to_value())],
        );

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    self.update_once().await;
                }
            }
        }

        self.logger.info("shutting down", &[]);
        self.logger.flush();
    }
}
