use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Closed set of navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Jobs,
    Cvs,
    Configuration,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Jobs, Tab::Cvs, Tab::Configuration];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Jobs => "jobs",
            Tab::Cvs => "cvs",
            Tab::Configuration => "configuration",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Tab::Dashboard),
            "jobs" => Ok(Tab::Jobs),
            "cvs" => Ok(Tab::Cvs),
            "configuration" => Ok(Tab::Configuration),
            other => Err(Error::Input(format!("Unknown tab: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabEntry {
    pub tab: Tab,
    pub nav_active: bool,
    pub panel_active: bool,
}

/// Nav strip plus content panels. Activation clears every entry before
/// marking the target, so exactly one nav element and one panel are active
/// at any time.
#[derive(Debug, Clone)]
pub struct TabStrip {
    entries: Vec<TabEntry>,
}

impl TabStrip {
    pub fn new(initial: Tab) -> Self {
        let entries = Tab::ALL
            .iter()
            .map(|&tab| TabEntry {
                tab,
                nav_active: false,
                panel_active: false,
            })
            .collect();
        let mut strip = Self { entries };
        strip.activate(initial);
        strip
    }

    pub fn activate(&mut self, tab: Tab) {
        for entry in &mut self.entries {
            entry.nav_active = false;
            entry.panel_active = false;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.tab == tab) {
            entry.nav_active = true;
            entry.panel_active = true;
        }
    }

    pub fn active(&self) -> Tab {
        self.entries
            .iter()
            .find(|e| e.nav_active)
            .map(|e| e.tab)
            .unwrap_or(Tab::Dashboard)
    }

    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }
}
