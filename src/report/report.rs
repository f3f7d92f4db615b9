use std::fmt;
use std::path::Path;

use colored::{Color, Colorize};

use crate::comparison::{Category, Classification};

const PATH_INDENT: &str = "    ";

/// Console rendering of a classification.
///
/// Sections appear in the order new, deleted, changed and only when non-empty,
/// each followed by a blank line. Every path is printed joined onto the source
/// root, including new files that actually live under the target root.
pub struct Report<'a> {
    source_root: &'a Path,
    classification: &'a Classification,
    colorize: bool,
}

impl<'a> Report<'a> {
    pub fn new(source_root: &'a Path, classification: &'a Classification, colorize: bool) -> Self {
        Self {
            source_root,
            classification,
            colorize,
        }
    }

    fn header(&self, category: Category) -> String {
        let header = category.to_string();
        if !self.colorize {
            return header;
        }
        let color = match category {
            Category::New => Color::Green,
            Category::Deleted => Color::Red,
            Category::Changed => Color::Yellow,
        };
        header.as_str().color(color).bold().to_string()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::ALL {
            let files = self.classification.files(category);
            if files.is_empty() {
                continue;
            }

            writeln!(f, "{}", self.header(category))?;
            for relative in files {
                writeln!(
                    f,
                    "{PATH_INDENT}{}",
                    self.source_root.join(relative).display()
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
