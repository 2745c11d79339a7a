//! Ingredient list loading stage.
//!
//! Resolves each side's [`IngredientSource`] to raw label text.

use crate::config::IngredientSource;
use crate::error::IngredientDiffError;
use anyhow::Result;
use std::path::Path;

/// Raw text for one product plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedIngredients {
    /// Comma-separated ingredient text
    pub text: String,
    /// Description for report metadata ("argument" or a file path)
    pub source: String,
}

/// Load the raw ingredient text of one product.
pub fn load_ingredients(source: &IngredientSource, quiet: bool) -> Result<LoadedIngredients> {
    match source {
        IngredientSource::Inline(text) => Ok(LoadedIngredients {
            text: text.clone(),
            source: source.describe(),
        }),
        IngredientSource::File(path) => {
            if !quiet {
                tracing::info!("Reading ingredient list: {}", path.display());
            }
            Ok(LoadedIngredients {
                text: read_ingredient_file(path)?,
                source: source.describe(),
            })
        }
    }
}

/// Read a label file and fold its lines into one comma-separated list.
///
/// Lists copied from packaging often wrap across lines. A line break is
/// treated as a separator unless the line already ends with a comma, and
/// blank lines are skipped.
pub fn read_ingredient_file(path: &Path) -> crate::Result<String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| IngredientDiffError::io(path, e))?;
    Ok(join_lines(&content))
}

fn join_lines(content: &str) -> String {
    let mut joined = String::with_capacity(content.len());
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !joined.is_empty() && !joined.ends_with(',') {
            joined.push(',');
        }
        joined.push_str(line);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines("water, glycerin\nfragrance\n"), "water, glycerin,fragrance");
        assert_eq!(join_lines("water,\nglycerin"), "water,glycerin");
        assert_eq!(join_lines("\n\n"), "");
        assert_eq!(join_lines("water, aqua"), "water, aqua");
    }

    #[test]
    fn test_load_inline() {
        let loaded = load_ingredients(&IngredientSource::Inline("Water".into()), true).unwrap();
        assert_eq!(loaded.text, "Water");
        assert_eq!(loaded.source, "argument");
    }

    #[test]
    fn test_load_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cream.txt");
        std::fs::write(&path, "Water, Glycerin,\nFragrance\n").unwrap();

        let loaded = load_ingredients(&IngredientSource::File(path.clone()), true).unwrap();
        assert_eq!(loaded.text, "Water, Glycerin,Fragrance");
        assert_eq!(loaded.source, path.display().to_string());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_ingredient_file(Path::new("/nonexistent/list.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/list.txt"));
        match err {
            IngredientDiffError::Io { path, source, .. } => {
                assert_eq!(path, Path::new("/nonexistent/list.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
