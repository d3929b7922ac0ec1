use std::fmt;
use std::path::Path;

use super::error::{Result, ThemeError};

/// An INI-style settings document that round-trips untouched content exactly.
///
/// Backend settings files (GTK `settings.ini`, `kdeglobals`, Kvantum and
/// qt5ct configs) share the same `[section]` / `key=value` shape. This model
/// keeps every line it did not modify verbatim, comments and blank lines
/// included, and remembers whether the source ended with a newline, so a
/// read-modify-write cycle leaves unrelated sections and keys byte-identical
/// on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    /// Comment and blank lines before the first section header.
    preamble: Vec<String>,
    sections: Vec<Section>,
    /// Whether the serialized form ends with a newline. Parsed documents
    /// keep the source file's style; fresh documents get one.
    final_newline: bool,
}

impl Default for IniDocument {
    fn default() -> Self {
        Self {
            preamble: Vec::new(),
            sections: Vec::new(),
            final_newline: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    lines: Vec<SectionLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SectionLine {
    /// Comment or blank line, reproduced verbatim.
    Verbatim(String),

    /// A `key=value` entry. `raw` holds the original line so untouched
    /// entries keep their exact spelling (spacing around `=` and all).
    Entry {
        key: String,
        value: String,
        raw: String,
    },
}

impl IniDocument {
    /// Parses INI content. `path` is used only for error context.
    ///
    /// Section names and keys are case-sensitive. Lines starting with `#` or
    /// `;` and blank lines are preserved verbatim; values are everything
    /// after the first `=`, trimmed.
    ///
    /// # Errors
    /// Returns [`ThemeError::Parse`] for a line that is neither a comment,
    /// a section header nor a `key=value` entry, and for an entry appearing
    /// before any section header.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut doc = Self::default();
        let mut current: Option<Section> = None;

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                match current.as_mut() {
                    Some(section) => section.lines.push(SectionLine::Verbatim(line.to_owned())),
                    None => doc.preamble.push(line.to_owned()),
                }
            } else if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                if let Some(section) = current.take() {
                    doc.sections.push(section);
                }
                current = Some(Section {
                    name: name.trim().to_owned(),
                    lines: Vec::new(),
                });
            } else if let Some((key, value)) = trimmed.split_once('=') {
                let Some(section) = current.as_mut() else {
                    return Err(ThemeError::Parse {
                        path: path.to_path_buf(),
                        line: index + 1,
                        details: "entry found before any section header".to_owned(),
                    });
                };
                section.lines.push(SectionLine::Entry {
                    key: key.trim().to_owned(),
                    value: value.trim().to_owned(),
                    raw: line.to_owned(),
                });
            } else {
                return Err(ThemeError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    details: format!("expected 'key=value', found '{trimmed}'"),
                });
            }
        }

        if let Some(section) = current.take() {
            doc.sections.push(section);
        }
        doc.final_newline = content.is_empty() || content.ends_with('\n');

        Ok(doc)
    }

    /// Returns the value for `key` in `section`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .lines
            .iter()
            .find_map(|line| match line {
                SectionLine::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
                _ => None,
            })
    }

    /// Sets `key` in `section` to `value`, creating the section if needed.
    ///
    /// An existing entry is rewritten in place; a new entry is inserted after
    /// the section's last entry so trailing blank separator lines stay where
    /// they are.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        if !self.sections.iter().any(|s| s.name == section) {
            self.sections.push(Section {
                name: section.to_owned(),
                lines: Vec::new(),
            });
        }
        let Some(section) = self.sections.iter_mut().find(|s| s.name == section) else {
            return;
        };

        for line in &mut section.lines {
            if let SectionLine::Entry { key: k, value: v, raw } = line {
                if k == key {
                    *v = value.to_owned();
                    *raw = format!("{key}={value}");
                    return;
                }
            }
        }

        let insert_at = section
            .lines
            .iter()
            .rposition(|line| matches!(line, SectionLine::Entry { .. }))
            .map_or(0, |pos| pos + 1);
        section.lines.insert(
            insert_at,
            SectionLine::Entry {
                key: key.to_owned(),
                value: value.to_owned(),
                raw: format!("{key}={value}"),
            },
        );
    }

    /// Whether the document has no sections and no preamble.
    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.sections.is_empty()
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        for section in &self.sections {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for line in &section.lines {
                match line {
                    SectionLine::Verbatim(raw) | SectionLine::Entry { raw, .. } => {
                        out.push_str(raw);
                        out.push('\n');
                    }
                }
            }
        }
        if !self.final_newline && out.ends_with('\n') {
            out.pop();
        }
        f.write_str(&out)
    }
}
