use log::*;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

fn default_theme() -> String {
    Theme::Default.to_string()
}

/// The two values that survive restarts: chosen theme and project count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub project_count: u32,
}

impl Preferences {
    pub fn default() -> Self {
        Self {
            theme: default_theme(),
            project_count: 0,
        }
    }
}

pub struct ConfigManager {
    path: String,
    prefs: Preferences,
}

impl ConfigManager {
    pub fn new(path: &str) -> Self {
        let f: Result<std::fs::File, std::io::Error> = std::fs::File::open(path);

        match f {
            Ok(file) => {
                let prefs = match serde_yaml::from_reader::<_, Preferences>(file) {
                    Ok(prefs) => prefs,
                    Err(e) => {
                        // a corrupt file loses the saved values but never
                        // blocks startup
                        warn!("ignoring malformed preferences at {path}: {e}");
                        Preferences::default()
                    }
                };
                Self {
                    path: String::from(path),
                    prefs,
                }
            }
            Err(_) => {
                let mut man = Self {
                    path: String::from(path),
                    prefs: Preferences::default(),
                };
                man.write();
                man
            }
        }
    }

    pub fn get(&self) -> Preferences {
        self.prefs.clone()
    }

    pub fn update(&mut self, prefs: Preferences) {
        self.prefs = prefs;
        self.write();
    }

    fn write(&mut self) {
        match serde_yaml::to_string(&self.prefs) {
            Ok(serialized) => {
                if let Err(e) = std::fs::write(&self.path, serialized) {
                    warn!("failed to write preferences to {}: {e}", self.path);
                }
            }
            Err(e) => warn!("failed to serialize preferences: {e}"),
        }
    }
}
