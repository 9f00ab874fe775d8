use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub flag_commit_mode: FlagCommitMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            flag_commit_mode: FlagCommitMode::Assign,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}

/// How draft flags are written through the store's toggle-only API.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum FlagCommitMode {
    /// Toggle a flag only when the draft disagrees with the store, so the
    /// store ends up holding the draft value.
    #[default]
    Assign,
    /// Toggle every flag that is on in the draft. Unchecking a flag never
    /// turns it off and committing an already-on flag flips it off.
    Toggle,
}

impl FlagCommitMode {
    pub fn label(&self) -> &'static str {
        match self {
            FlagCommitMode::Assign => "Assign (store matches the form)",
            FlagCommitMode::Toggle => "Toggle (legacy)",
        }
    }
}
