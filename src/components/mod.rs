// Export components
pub mod weekly_hours;

// Re-export Weekly Hours handle
pub use weekly_hours::WeeklyHoursHandle;
