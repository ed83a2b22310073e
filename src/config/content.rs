use serde::Deserialize;

/// Parsed form of the configuration file. Every section and field is
/// optional; missing values fall back to the classic tomato defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub duration: DurationSection,
    #[serde(default)]
    pub cycle: CycleSection,
    #[serde(default)]
    pub notification: NotificationSection,
}

/// Interval lengths in minutes.
#[derive(Debug, Clone, Deserialize)]
pub struct DurationSection {
    #[serde(default = "default_work_minutes")]
    pub work: u64,
    #[serde(rename = "break", default = "default_break_minutes")]
    pub rest: u64,
}

impl Default for DurationSection {
    fn default() -> Self {
        Self {
            work: default_work_minutes(),
            rest: default_break_minutes(),
        }
    }
}

/// How many work/break pairs to run.
#[derive(Debug, Clone, Deserialize)]
pub struct CycleSection {
    #[serde(default = "default_cycle_count")]
    pub count: u32,
}

impl Default for CycleSection {
    fn default() -> Self {
        Self {
            count: default_cycle_count(),
        }
    }
}

/// Messages announced at interval boundaries.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSection {
    #[serde(default = "default_work_message")]
    pub work: MessageSection,
    #[serde(rename = "break", default = "default_break_message")]
    pub rest: MessageSection,
}

impl Default for NotificationSection {
    fn default() -> Self {
        Self {
            work: default_work_message(),
            rest: default_break_message(),
        }
    }
}

/// One message: a summary plus an optional body for desktop popups.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSection {
    pub summary: String,
    #[serde(default)]
    pub body: Option<String>,
}

fn default_work_minutes() -> u64 {
    25
}

fn default_break_minutes() -> u64 {
    5
}

fn default_cycle_count() -> u32 {
    4
}

fn default_work_message() -> MessageSection {
    MessageSection {
        summary: "It is time to work".to_owned(),
        body: None,
    }
}

fn default_break_message() -> MessageSection {
    MessageSection {
        summary: "It is time to take a break".to_owned(),
        body: None,
    }
}
