use std::path::PathBuf;

use derive_more::Display;

/// One of the three disjoint outcomes for a relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Category {
    #[display("New files:")]
    New,
    #[display("Deleted files:")]
    Deleted,
    #[display("Changed files:")]
    Changed,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 3] = [Category::New, Category::Deleted, Category::Changed];
}

/// Relative paths sorted into new, deleted and changed.
///
/// Paths present in both trees with identical content appear in none of the
/// lists, and no path appears in more than one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    new: Vec<PathBuf>,
    deleted: Vec<PathBuf>,
    changed: Vec<PathBuf>,
}

impl Classification {
    pub fn new(new: Vec<PathBuf>, deleted: Vec<PathBuf>, changed: Vec<PathBuf>) -> Self {
        Self {
            new,
            deleted,
            changed,
        }
    }

    pub fn new_files(&self) -> &[PathBuf] {
        &self.new
    }

    pub fn deleted_files(&self) -> &[PathBuf] {
        &self.deleted
    }

    pub fn changed_files(&self) -> &[PathBuf] {
        &self.changed
    }

    pub fn files(&self, category: Category) -> &[PathBuf] {
        match category {
            Category::New => &self.new,
            Category::Deleted => &self.deleted,
            Category::Changed => &self.changed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.deleted.is_empty() && self.changed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_headers() {
        let headers = Category::ALL.map(|category| category.to_string());
        assert_eq!(headers, ["New files:", "Deleted files:", "Changed files:"]);
    }

    #[test]
    fn files_by_category() {
        let classification = Classification::new(
            vec![PathBuf::from("added")],
            vec![PathBuf::from("removed")],
            vec![PathBuf::from("edited")],
        );

        assert_eq!(classification.files(Category::New), classification.new_files());
        assert_eq!(
            classification.files(Category::Deleted),
            [PathBuf::from("removed")]
        );
        assert_eq!(
            classification.files(Category::Changed),
            [PathBuf::from("edited")]
        );
        assert!(!classification.is_empty());
        assert!(Classification::default().is_empty());
    }
}
