use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub name: fn(&str) -> String,
    pub category: fn(&str) -> String,
    pub detail: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "park" | "" => Self::park(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::park()
            }
        }
    }

    fn park() -> Self {
        Self {
            title: |s| s.green().bold().underline().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            name: |s| s.bright_green().bold().to_string(),
            category: |s| s.yellow().italic().to_string(),
            detail: |s| s.white().to_string(),
            error: |s| s.red().to_string(),
        }
    }

    fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            line: |s| s.to_string(),
            idx: |s| s.to_string(),
            name: |s| s.to_string(),
            category: |s| s.to_string(),
            detail: |s| s.to_string(),
            error: |s| s.to_string(),
        }
    }
}
