use std::path::Path;

/// A named check file held in memory. Lines are numbered from 1.
#[derive(Debug, Clone)]
pub struct CheckFile {
    pub name: String,
    pub content: String,
}

impl CheckFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), content))
    }

    /// `(line_number, line)` pairs with line terminators stripped.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content.lines().enumerate().map(|(i, line)| (i + 1, line))
    }
}
