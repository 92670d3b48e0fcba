use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::api::HomeworkSource;
use crate::config::AppConfig;
use crate::domain::{Cursor, Delivery};
use crate::error::CycleError;
use crate::message;
use crate::notifier::Notifier;

/// How long to wait between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// After a status change was delivered.
    pub poll_interval: Duration,
    /// After a poll that returned no changes.
    pub idle_interval: Duration,
    /// After a failed cycle.
    pub retry_interval: Duration,
    /// Stop after this many cycles; `None` runs until the process is killed.
    pub max_cycles: Option<u64>,
}

impl Schedule {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            poll_interval: config.poll_interval,
            idle_interval: config.idle_interval,
            retry_interval: config.retry_interval,
            max_cycles: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing new since the cursor.
    Idle,
    Notified { delivery: Delivery, cursor: Cursor },
}

pub struct HomeworkWatcher {
    source: Arc<dyn HomeworkSource>,
    notifier: Arc<dyn Notifier>,
    schedule: Schedule,
    cursor: Cursor,
}

impl HomeworkWatcher {
    pub fn new(
        source: Arc<dyn HomeworkSource>,
        notifier: Arc<dyn Notifier>,
        schedule: Schedule,
        cursor: Cursor,
    ) -> Self {
        Self {
            source,
            notifier,
            schedule,
            cursor,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Fetches one page, reports the newest item and moves the cursor.
    ///
    /// The cursor is left untouched unless the message was delivered.
    pub async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let page = self.source.fetch(self.cursor).await?;

        let Some(homework) = page.latest() else {
            return Ok(CycleOutcome::Idle);
        };

        let text = message::compose(homework);
        let delivery = self.notifier.send(&text).await?;
        info!("📬 Status update delivered: {:?}", delivery);

        match page.current_date {
            Some(current_date) => {
                if !self.cursor.advance(current_date) {
                    warn!(
                        "⚠️  API returned current_date {} not after cursor {}; keeping cursor",
                        current_date,
                        self.cursor.value()
                    );
                }
            }
            None => warn!("⚠️  API response has no current_date; keeping cursor"),
        }

        Ok(CycleOutcome::Notified {
            delivery,
            cursor: self.cursor,
        })
    }

    /// Polls until `max_cycles` is reached or a fatal error occurs.
    pub async fn run(&mut self) -> Result<(), CycleError> {
        info!(
            "👁️  Watching homework statuses from {} (poll every {:?})",
            self.cursor.value(),
            self.schedule.poll_interval
        );

        let mut cycles = 0u64;
        loop {
            let pause = match self.poll_once().await {
                Ok(CycleOutcome::Notified { .. }) => self.schedule.poll_interval,
                Ok(CycleOutcome::Idle) => self.schedule.idle_interval,
                Err(e) => {
                    self.report_failure(&e).await;
                    if e.is_fatal() {
                        error!("🛑 Giving up: {}", e);
                        return Err(e);
                    }
                    self.schedule.retry_interval
                }
            };

            cycles += 1;
            if self.schedule.max_cycles.is_some_and(|max| cycles >= max) {
                info!("Stopping after {} cycles", cycles);
                return Ok(());
            }

            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }
    }

    async fn report_failure(&self, err: &CycleError) {
        error!("❌ Polling cycle failed: {} ({:?})", err, err);

        let text = message::failure(err);
        if let Err(relay_err) = self.notifier.send(&text).await {
            warn!("Could not relay failure notice: {}", relay_err);
        }
    }
}
