use std::fs;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use weekly_hours::components::weekly_hours::{Day, WeeklyHours};
use weekly_hours::components::WeeklyHoursHandle;
use weekly_hours::config::Config;
use weekly_hours::error::{other_error, HoursResult};

use crate::commands::{HoursCommand, USAGE};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and validate the editor config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Read the hours file; a missing file is an empty week
pub fn read_hours(path: &Path) -> HoursResult<WeeklyHours> {
    if !path.exists() {
        warn!("{} does not exist, starting from an empty week", path.display());
        return Ok(WeeklyHours::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the hours file as pretty JSON
pub fn write_hours(path: &Path, hours: &WeeklyHours) -> HoursResult<()> {
    let json = serde_json::to_string_pretty(hours)?;
    fs::write(path, json + "\n")?;
    Ok(())
}

/// Parse arguments, apply the command and persist the result
pub async fn run(config: Config, args: Vec<String>) -> miette::Result<()> {
    let (path, command_args) = args.split_first().ok_or_else(|| other_error(USAGE))?;
    let path = Path::new(path);
    let command = HoursCommand::parse(command_args)?;

    let hours = read_hours(path)?;
    let handle = WeeklyHoursHandle::new(hours, &config);

    let is_edit = command.is_edit();
    let updated = command.run(&handle).await?;
    handle.shutdown().await?;

    if is_edit {
        write_hours(path, &updated)?;
        info!("Saved hours to {}", path.display());
    }

    for day in Day::ALL {
        let range = updated.get(day).unwrap_or("-");
        println!("{:<12} {}", day.label_in(&config.locale), range);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fresh per-test path under the system temp dir
    fn temp_hours_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "weekly_hours_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    fn args(path: &Path, command: &[&str]) -> Vec<String> {
        let mut args = vec![path.to_string_lossy().to_string()];
        args.extend(command.iter().map(|s| s.to_string()));
        args
    }

    #[test]
    fn test_missing_file_reads_as_empty_week() {
        let path = temp_hours_path("missing");
        assert!(read_hours(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let path = temp_hours_path("round_trip");
        let mut hours = WeeklyHours::new();
        hours.set(Day::Monday, "9:00 AM - 6:00 PM");
        hours.set(Day::Sunday, "Closed");

        write_hours(&path, &hours).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"monday\": \"9:00 AM - 6:00 PM\""));
        assert!(content.ends_with('\n'));
        assert_eq!(read_hours(&path).unwrap(), hours);

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_edit_commands_write_back() {
        let path = temp_hours_path("edit");

        run(Config::default(), args(&path, &["weekdays"])).await.unwrap();
        run(Config::default(), args(&path, &["close", "friday"])).await.unwrap();

        let saved = read_hours(&path).unwrap();
        assert_eq!(saved.len(), 5);
        assert_eq!(saved.get(Day::Monday), Some("9:00 AM - 6:00 PM"));
        assert_eq!(saved.get(Day::Friday), Some("Closed"));

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["thursday"], "9:00 AM - 6:00 PM");

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_show_never_writes() {
        let path = temp_hours_path("show");

        run(Config::default(), args(&path, &["show"])).await.unwrap();
        assert!(!path.exists());

        let compact = r#"{"tuesday":"10:30 AM - 7:15 PM"}"#;
        fs::write(&path, compact).unwrap();
        run(Config::default(), args(&path, &["show"])).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), compact);

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_bad_command_leaves_file_alone() {
        let path = temp_hours_path("bad_command");

        assert!(run(Config::default(), args(&path, &["start", "monday", "9"]))
            .await
            .is_err());
        assert!(!path.exists());
    }
}
