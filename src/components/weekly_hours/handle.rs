use super::actor::{WeeklyHoursActor, WeeklyHoursActorHandle};
use super::models::{Day, WeeklyHours};
use super::range_editor::RangeEdit;
use crate::config::Config;
use crate::error::HoursResult;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle for interacting with the weekly hours actor
#[derive(Clone)]
pub struct WeeklyHoursHandle {
    actor_handle: WeeklyHoursActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl WeeklyHoursHandle {
    /// Create a new WeeklyHoursHandle and spawn the actor
    pub fn new(hours: WeeklyHours, config: &Config) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = WeeklyHoursActor::new(hours, config);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Get the current mapping
    pub async fn get_hours(&self) -> HoursResult<WeeklyHours> {
        self.actor_handle.get_hours().await
    }

    /// Set start, end and closed flag for one day at once
    pub async fn set_day_fields(
        &self,
        day: Day,
        start: impl Into<String>,
        end: impl Into<String>,
        closed: bool,
    ) -> HoursResult<WeeklyHours> {
        self.actor_handle
            .set_day_fields(day, start, end, closed)
            .await
    }

    /// Change the opening time for one day
    pub async fn set_start(&self, day: Day, start: impl Into<String>) -> HoursResult<WeeklyHours> {
        self.actor_handle.set_start(day, start).await
    }

    /// Change the closing time for one day
    pub async fn set_end(&self, day: Day, end: impl Into<String>) -> HoursResult<WeeklyHours> {
        self.actor_handle.set_end(day, end).await
    }

    /// Open or close one day
    pub async fn set_closed(&self, day: Day, closed: bool) -> HoursResult<WeeklyHours> {
        self.actor_handle.set_closed(day, closed).await
    }

    /// Apply an edit raised by a day row
    pub async fn apply(&self, day: Day, edit: RangeEdit) -> HoursResult<WeeklyHours> {
        match edit {
            RangeEdit::Start(start) => self.set_start(day, start).await,
            RangeEdit::End(end) => self.set_end(day, end).await,
            RangeEdit::Closed(closed) => self.set_closed(day, closed).await,
        }
    }

    pub async fn set_weekdays(&self) -> HoursResult<WeeklyHours> {
        self.actor_handle.set_weekdays().await
    }

    pub async fn set_weekends_closed(&self) -> HoursResult<WeeklyHours> {
        self.actor_handle.set_weekends_closed().await
    }

    pub async fn set_all_days(&self) -> HoursResult<WeeklyHours> {
        self.actor_handle.set_all_days().await
    }

    /// Watch the mapping as it changes
    pub fn subscribe(&self) -> watch::Receiver<WeeklyHours> {
        self.actor_handle.subscribe()
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> HoursResult<()> {
        self.actor_handle.shutdown().await
    }
}
