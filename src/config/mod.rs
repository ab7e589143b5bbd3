use crate::errors::{AppError, AppResult};
use crate::models::policy::{OvertimeRounding, Policy};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Start/end pair as written in the config file (`HH:MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTimes {
    pub start: String,
    pub end: String,
}

impl ScheduleTimes {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Largest accepted overtime rounding step, in minutes.
pub const MAX_ROUNDING_STEP: i64 = 60;

/// One weekday of a weekly schedule. `work_day: false` marks a day off; a
/// working day without times falls through to the next schedule level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default = "default_work_day")]
    pub work_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

fn default_work_day() -> bool {
    true
}

impl DaySchedule {
    pub fn working(start: &str, end: &str) -> Self {
        Self {
            work_day: true,
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    pub fn off() -> Self {
        Self {
            work_day: false,
            start: None,
            end: None,
        }
    }

    pub fn times(&self) -> Option<ScheduleTimes> {
        match (self.work_day, &self.start, &self.end) {
            (true, Some(start), Some(end)) => Some(ScheduleTimes::new(start, end)),
            _ => None,
        }
    }
}

/// Per-weekday overrides. Missing days defer to the next schedule level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DaySchedule>,
}

impl WeeklySchedule {
    /// Saturday and Sunday off, other days left to the default schedule.
    pub fn weekends_off() -> Self {
        Self {
            saturday: Some(DaySchedule::off()),
            sunday: Some(DaySchedule::off()),
            ..Self::default()
        }
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    pub fn set(mut self, weekday: Weekday, day: DaySchedule) -> Self {
        let slot = match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = Some(day);
        self
    }

    fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter_map(|w| self.day(w).map(|d| (w, d)))
    }

    fn validate(&self, owner: &str) -> AppResult<()> {
        for (weekday, day) in self.days() {
            if day.work_day && day.start.is_some() != day.end.is_some() {
                return Err(AppError::Config(format!(
                    "{} {}: set both start and end, or neither",
                    owner, weekday
                )));
            }
        }
        Ok(())
    }
}

/// Named preset assigned to an employee for a date range (both ends inclusive,
/// open when absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetAssignment {
    pub preset: String,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub until: Option<NaiveDate>,
}

impl PresetAssignment {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|f| date >= f) && self.until.is_none_or(|u| date <= u)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub expected_start: Option<String>,
    #[serde(default)]
    pub expected_end: Option<String>,
    #[serde(default)]
    pub tolerance_minutes: Option<i64>,
    #[serde(default)]
    pub weekly_schedule: WeeklySchedule,
    #[serde(default)]
    pub presets: Vec<PresetAssignment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub policy: Policy,
    #[serde(default)]
    pub default_schedule: Option<ScheduleTimes>,
    #[serde(default = "WeeklySchedule::weekends_off")]
    pub weekly_schedule: WeeklySchedule,
    #[serde(default)]
    pub presets: BTreeMap<String, ScheduleTimes>,
    #[serde(default)]
    pub employees: BTreeMap<String, EmployeeProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            policy: Policy {
                tolerance_minutes: Some(10),
                ..Policy::default()
            },
            default_schedule: Some(ScheduleTimes::new("09:00", "18:00")),
            weekly_schedule: WeeklySchedule::weekends_off(),
            presets: BTreeMap::new(),
            employees: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.sqlite")
    }

    /// Load configuration from `path` (or the standard file), falling back to
    /// defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject references that would only fail later, at resolution time.
    pub fn validate(&self) -> AppResult<()> {
        if self.policy.max_tolerance_minutes < 0 {
            return Err(AppError::Config(
                "max_tolerance_minutes must not be negative".into(),
            ));
        }
        if self.policy.auto_break_minutes < 0 {
            return Err(AppError::Config(
                "auto_break_minutes must not be negative".into(),
            ));
        }

        if let OvertimeRounding::Step(step) = self.policy.overtime_rounding
            && !(1..=MAX_ROUNDING_STEP).contains(&step)
        {
            return Err(AppError::Config(format!(
                "overtime_rounding step must be between 1 and {}, got {}",
                MAX_ROUNDING_STEP, step
            )));
        }

        self.weekly_schedule.validate("weekly_schedule")?;

        for (id, profile) in &self.employees {
            if profile.expected_start.is_some() != profile.expected_end.is_some() {
                return Err(AppError::Config(format!(
                    "employee '{}' must set both expected_start and expected_end",
                    id
                )));
            }
            profile
                .weekly_schedule
                .validate(&format!("employee '{}' weekly_schedule", id))?;
        }

        Ok(())
    }

    /// Write the default configuration and create the database file.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}
