use weekly_hours::components::weekly_hours::{Day, WeeklyHours};
use weekly_hours::components::WeeklyHoursHandle;
use weekly_hours::error::{other_error, HoursResult};
use weekly_hours::utils::time::normalize_time;

/// Usage text for the command line
pub const USAGE: &str = "usage: weekly-hours <hours.json> <command> [args]

commands:
  show                  print the current hours
  weekdays              open Monday to Friday with the default hours
  weekends-closed       close Saturday and Sunday
  all-days              open every day with the default hours
  close <day>           close one day
  open <day>            open one day, restoring its last hours
  start <day> <HH:MM>   change a day's opening time
  end <day> <HH:MM>     change a day's closing time";

/// An edit requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoursCommand {
    Show,
    Weekdays,
    WeekendsClosed,
    AllDays,
    Close(Day),
    Open(Day),
    Start(Day, String),
    End(Day, String),
}

impl HoursCommand {
    /// Parse the command name and its arguments
    pub fn parse(args: &[String]) -> HoursResult<Self> {
        let usage = || other_error(USAGE);
        let name = args.first().ok_or_else(usage)?;
        let day = |index: usize| -> HoursResult<Day> {
            args.get(index).ok_or_else(usage)?.parse()
        };
        let time = |index: usize| -> HoursResult<String> {
            normalize_time(args.get(index).ok_or_else(usage)?)
        };

        let command = match name.as_str() {
            "show" => HoursCommand::Show,
            "weekdays" => HoursCommand::Weekdays,
            "weekends-closed" => HoursCommand::WeekendsClosed,
            "all-days" => HoursCommand::AllDays,
            "close" => HoursCommand::Close(day(1)?),
            "open" => HoursCommand::Open(day(1)?),
            "start" => HoursCommand::Start(day(1)?, time(2)?),
            "end" => HoursCommand::End(day(1)?, time(2)?),
            _ => return Err(usage()),
        };

        Ok(command)
    }

    /// Whether running the command changes the stored hours
    pub fn is_edit(&self) -> bool {
        !matches!(self, HoursCommand::Show)
    }

    /// Run the command against the editor
    pub async fn run(self, handle: &WeeklyHoursHandle) -> HoursResult<WeeklyHours> {
        match self {
            HoursCommand::Show => handle.get_hours().await,
            HoursCommand::Weekdays => handle.set_weekdays().await,
            HoursCommand::WeekendsClosed => handle.set_weekends_closed().await,
            HoursCommand::AllDays => handle.set_all_days().await,
            HoursCommand::Close(day) => handle.set_closed(day, true).await,
            HoursCommand::Open(day) => handle.set_closed(day, false).await,
            HoursCommand::Start(day, start) => handle.set_start(day, start).await,
            HoursCommand::End(day, end) => handle.set_end(day, end).await,
        }
    }
}
