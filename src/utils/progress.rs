// Human-readable progress output on stdout

/// Prints export progress unless silenced by `--json` or `--quiet`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    enabled: bool,
}

impl Progress {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn silent() -> Self {
        Self::new(false)
    }

    /// Print a section banner, e.g. `CREATING FOLDERS`
    pub fn section(&self, title: &str) {
        if self.enabled {
            println!("\n\t{title}\n");
        }
    }

    /// Print a single progress line
    pub fn line(&self, message: impl AsRef<str>) {
        if self.enabled {
            println!("{}", message.as_ref());
        }
    }
}
