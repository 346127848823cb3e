use crate::components::weekly_hours::editor::WeeklyHoursEditor;
use crate::components::weekly_hours::models::{Day, WeeklyHours};
use crate::config::Config;
use crate::error::{editor_error, HoursResult};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

/// Mailbox size for the editor actor
const MAILBOX_SIZE: usize = 32;

type Reply = mpsc::Sender<HoursResult<WeeklyHours>>;

/// The weekly hours actor that owns the editor and processes edits in order
pub struct WeeklyHoursActor {
    editor: WeeklyHoursEditor,
    command_rx: mpsc::Receiver<WeeklyHoursCommand>,
}

/// Commands that can be sent to the weekly hours actor
pub enum WeeklyHoursCommand {
    GetHours(Reply),
    SetDayFields(Day, String, String, bool, Reply),
    SetStart(Day, String, Reply),
    SetEnd(Day, String, Reply),
    SetClosed(Day, bool, Reply),
    SetWeekdays(Reply),
    SetWeekendsClosed(Reply),
    SetAllDays(Reply),
    Shutdown,
}

/// Handle for communicating with the weekly hours actor
#[derive(Clone)]
pub struct WeeklyHoursActorHandle {
    command_tx: mpsc::Sender<WeeklyHoursCommand>,
    hours_rx: watch::Receiver<WeeklyHours>,
}

impl WeeklyHoursActorHandle {
    /// Send a command and wait for the updated mapping
    async fn request(
        &self,
        command: impl FnOnce(Reply) -> WeeklyHoursCommand,
    ) -> HoursResult<WeeklyHours> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(command(response_tx))
            .await
            .map_err(|e| editor_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| editor_error("Response channel closed"))?
    }

    pub async fn get_hours(&self) -> HoursResult<WeeklyHours> {
        self.request(WeeklyHoursCommand::GetHours).await
    }

    pub async fn set_day_fields(
        &self,
        day: Day,
        start: impl Into<String>,
        end: impl Into<String>,
        closed: bool,
    ) -> HoursResult<WeeklyHours> {
        let (start, end) = (start.into(), end.into());
        self.request(|tx| WeeklyHoursCommand::SetDayFields(day, start, end, closed, tx))
            .await
    }

    pub async fn set_start(&self, day: Day, start: impl Into<String>) -> HoursResult<WeeklyHours> {
        let start = start.into();
        self.request(|tx| WeeklyHoursCommand::SetStart(day, start, tx))
            .await
    }

    pub async fn set_end(&self, day: Day, end: impl Into<String>) -> HoursResult<WeeklyHours> {
        let end = end.into();
        self.request(|tx| WeeklyHoursCommand::SetEnd(day, end, tx)).await
    }

    pub async fn set_closed(&self, day: Day, closed: bool) -> HoursResult<WeeklyHours> {
        self.request(|tx| WeeklyHoursCommand::SetClosed(day, closed, tx))
            .await
    }

    pub async fn set_weekdays(&self) -> HoursResult<WeeklyHours> {
        self.request(WeeklyHoursCommand::SetWeekdays).await
    }

    pub async fn set_weekends_closed(&self) -> HoursResult<WeeklyHours> {
        self.request(WeeklyHoursCommand::SetWeekendsClosed).await
    }

    pub async fn set_all_days(&self) -> HoursResult<WeeklyHours> {
        self.request(WeeklyHoursCommand::SetAllDays).await
    }

    /// Receiver that sees the full mapping after every change
    pub fn subscribe(&self) -> watch::Receiver<WeeklyHours> {
        self.hours_rx.clone()
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> HoursResult<()> {
        let _ = self.command_tx.send(WeeklyHoursCommand::Shutdown).await;
        Ok(())
    }
}

impl WeeklyHoursActor {
    /// Create a new actor and return its handle
    pub fn new(hours: WeeklyHours, config: &Config) -> (Self, WeeklyHoursActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(MAILBOX_SIZE);
        let (hours_tx, hours_rx) = watch::channel(hours.clone());

        let editor = WeeklyHoursEditor::new(hours, config).on_change(move |hours| {
            // Fails only once every receiver is dropped
            let _ = hours_tx.send(hours.clone());
        });

        let actor = Self { editor, command_rx };
        let handle = WeeklyHoursActorHandle {
            command_tx,
            hours_rx,
        };

        (actor, handle)
    }

    /// Run the actor, processing commands until shutdown
    pub async fn run(&mut self) {
        info!("Weekly hours actor started");

        while let Some(command) = self.command_rx.recv().await {
            let (result, reply) = match command {
                WeeklyHoursCommand::GetHours(reply) => (Ok(self.editor.hours().clone()), reply),
                WeeklyHoursCommand::SetDayFields(day, start, end, closed, reply) => (
                    self.editor
                        .set_day_fields(day, &start, &end, closed)
                        .cloned(),
                    reply,
                ),
                WeeklyHoursCommand::SetStart(day, start, reply) => {
                    (self.editor.set_start(day, &start).cloned(), reply)
                }
                WeeklyHoursCommand::SetEnd(day, end, reply) => {
                    (self.editor.set_end(day, &end).cloned(), reply)
                }
                WeeklyHoursCommand::SetClosed(day, closed, reply) => {
                    (self.editor.set_closed(day, closed).cloned(), reply)
                }
                WeeklyHoursCommand::SetWeekdays(reply) => {
                    (Ok(self.editor.set_weekdays().clone()), reply)
                }
                WeeklyHoursCommand::SetWeekendsClosed(reply) => {
                    (Ok(self.editor.set_weekends_closed().clone()), reply)
                }
                WeeklyHoursCommand::SetAllDays(reply) => {
                    (Ok(self.editor.set_all_days().clone()), reply)
                }
                WeeklyHoursCommand::Shutdown => {
                    info!("Weekly hours actor shutting down");
                    break;
                }
            };

            if let Err(e) = &result {
                warn!("Rejected edit: {}", e);
            }
            let _ = reply.send(result).await;
        }
    }
}
