use std::env;
use std::path::PathBuf;

pub const DEFAULT_FORM_LEN: usize = 5;
const MAX_FORM_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub form_len: usize,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            form_len: DEFAULT_FORM_LEN,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Reads `STANDINGS_DATA`, `STANDINGS_FORM_LEN` and `STANDINGS_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_path = lookup("STANDINGS_DATA")
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(v.trim()));
        let form_len = lookup("STANDINGS_FORM_LEN")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(clamp_form_len)
            .unwrap_or(defaults.form_len);
        let format = lookup("STANDINGS_FORMAT")
            .and_then(|v| OutputFormat::parse(&v))
            .unwrap_or(defaults.format);
        Self {
            data_path,
            form_len,
            format,
        }
    }

    /// Applies `--data=PATH`, `--data PATH`, `--form=N` and `--json` on top.
    pub fn apply_args(&mut self, args: &[String]) {
        for (idx, arg) in args.iter().enumerate() {
            if let Some(path) = arg.strip_prefix("--data=") {
                let trimmed = path.trim();
                if !trimmed.is_empty() {
                    self.data_path = Some(PathBuf::from(trimmed));
                }
            } else if arg == "--data" {
                let Some(next) = args.get(idx + 1) else {
                    continue;
                };
                if !next.trim().is_empty() && !next.starts_with("--") {
                    self.data_path = Some(PathBuf::from(next));
                }
            } else if let Some(n) = arg.strip_prefix("--form=") {
                if let Ok(n) = n.trim().parse::<usize>() {
                    self.form_len = clamp_form_len(n);
                }
            } else if arg == "--json" {
                self.format = OutputFormat::Json;
            }
        }
    }
}

fn clamp_form_len(n: usize) -> usize {
    n.clamp(1, MAX_FORM_LEN)
}
