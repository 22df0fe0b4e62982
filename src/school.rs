//! Static school reference data.
//!
//! DESIGN
//! ======
//! `SchoolInfo` is the single read-only dataset behind both the model's
//! context preamble and the local fallback answers. It is loaded once at
//! startup — built-in defaults, optionally overridden by a YAML file named
//! in `SCHOOL_INFO_PATH` — and shared via `AppState` thereafter.

use std::fmt::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// Errors produced while loading school data at startup.
#[derive(Debug, thiserror::Error)]
pub enum SchoolInfoError {
    /// The override file named in `SCHOOL_INFO_PATH` could not be read.
    #[error("school info read failed: {0}")]
    Read(#[from] std::io::Error),

    /// The override file is not valid YAML for [`SchoolInfo`].
    #[error("school info parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One language course offered by the school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub price_kzt: u32,
    pub levels: Vec<String>,
    pub duration_months: u32,
}

/// School contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contacts {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub telegram: String,
}

/// Immutable school reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolInfo {
    pub name: String,
    pub formats: Vec<String>,
    pub languages: Vec<Course>,
    pub schedule: Vec<String>,
    pub contacts: Contacts,
}

// =============================================================================
// LOADING
// =============================================================================

impl SchoolInfo {
    /// Load school data: the YAML file named in `SCHOOL_INFO_PATH` when set,
    /// the built-in dataset otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the override file cannot be read or parsed.
    pub fn from_env() -> Result<Self, SchoolInfoError> {
        match std::env::var("SCHOOL_INFO_PATH") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Ok(Self::builtin()),
        }
    }

    /// Load school data from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SchoolInfoError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Built-in dataset used when no override file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            name: "LinguaWave".into(),
            formats: vec!["онлайн".into(), "офлайн".into()],
            languages: vec![
                Course {
                    name: "Английский".into(),
                    price_kzt: 35_000,
                    levels: vec!["A1".into(), "A2".into(), "B1".into(), "B2".into(), "C1".into()],
                    duration_months: 6,
                },
                Course {
                    name: "Немецкий".into(),
                    price_kzt: 38_000,
                    levels: vec!["A1".into(), "A2".into(), "B1".into(), "B2".into()],
                    duration_months: 6,
                },
                Course {
                    name: "Испанский".into(),
                    price_kzt: 36_000,
                    levels: vec!["A1".into(), "A2".into(), "B1".into()],
                    duration_months: 5,
                },
                Course {
                    name: "Китайский".into(),
                    price_kzt: 45_000,
                    levels: vec!["HSK 1".into(), "HSK 2".into(), "HSK 3".into()],
                    duration_months: 8,
                },
            ],
            schedule: vec!["Пн–Ср–Пт 19:00".into(), "Вт–Чт 19:00".into(), "Сб 11:00".into()],
            contacts: Contacts {
                phone: "+7 (727) 300-45-67".into(),
                email: "hello@linguawave.kz".into(),
                address: "Алматы, ул. Абая 150, офис 12".into(),
                telegram: "@linguawave_school".into(),
            },
        }
    }
}

// =============================================================================
// RENDERINGS
// =============================================================================

impl SchoolInfo {
    /// Itemized price list, one language per line.
    #[must_use]
    pub fn render_price_list(&self) -> String {
        let lines: Vec<String> = self
            .languages
            .iter()
            .map(|c| format!("{} — {} ₸ в месяц", c.name, c.price_kzt))
            .collect();
        lines.join("\n")
    }

    /// Weekly schedule lines.
    #[must_use]
    pub fn render_schedule(&self) -> String {
        self.schedule.join("\n")
    }

    /// Course list with levels and duration.
    #[must_use]
    pub fn render_courses(&self) -> String {
        let lines: Vec<String> = self
            .languages
            .iter()
            .map(|c| format!("{}: уровни {}, курс {} мес.", c.name, c.levels.join("–"), c.duration_months))
            .collect();
        lines.join("\n")
    }

    /// Canned delivery-format description.
    #[must_use]
    pub fn render_formats(&self) -> String {
        format!(
            "Занятия проходят {} — выбирайте удобный формат. Программа и преподаватели одинаковые.",
            self.formats.join(" и ")
        )
    }

    /// Full rendering used as the model's context preamble.
    #[must_use]
    pub fn render_context(&self) -> String {
        let mut out = format!("Школа: {}\nФорматы: {}\n\nКурсы:\n", self.name, self.formats.join(", "));
        for course in &self.languages {
            let _ = writeln!(
                out,
                "- {}: {} ₸ в месяц, уровни {}, {} мес.",
                course.name,
                course.price_kzt,
                course.levels.join("–"),
                course.duration_months,
            );
        }
        out.push_str("\nРасписание:\n");
        for line in &self.schedule {
            let _ = writeln!(out, "- {line}");
        }
        let _ = write!(
            out,
            "\nКонтакты: тел. {}, {}, {}, Telegram {}",
            self.contacts.phone, self.contacts.email, self.contacts.address, self.contacts.telegram,
        );
        out
    }
}
