// Path conversion utilities
//
// Resources are identified by their path relative to the workspace root, in
// Unix-style form with the TypeScript extension removed (`/src/models/user`).

use anyhow::{Context, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Extensions stripped from module identifiers, longest first so `.d.ts` wins over `.ts`
const MODULE_EXTENSIONS: [&str; 4] = [".d.ts", ".tsx", ".ts", ".js"];

/// Convert an absolute path to a relative Unix-style path (with `/` separators)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tsdecl_core::utils::paths::to_relative_unix_style;
///
/// let relative = to_relative_unix_style(
///     Path::new("/home/dev/project/src/main.ts"),
///     Path::new("/home/dev/project"),
/// )
/// .unwrap();
/// assert_eq!(relative, "src/main.ts");
/// ```
pub fn to_relative_unix_style(absolute: &Path, workspace_root: &Path) -> Result<String> {
    // Canonicalize both sides when possible so symlinked roots (/var -> /private/var) still match
    let (path_to_use, root_to_use) = match (absolute.canonicalize(), workspace_root.canonicalize())
    {
        (Ok(canonical_abs), Ok(canonical_root)) => (canonical_abs, canonical_root),
        _ => (absolute.to_path_buf(), workspace_root.to_path_buf()),
    };

    let relative = path_to_use.strip_prefix(&root_to_use).with_context(|| {
        format!(
            "File path '{}' is not within workspace root '{}'",
            path_to_use.display(),
            root_to_use.display()
        )
    })?;

    let path_str = relative.to_str().context("Path contains invalid UTF-8")?;

    let unix_style = if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    };

    Ok(unix_style)
}

/// Build the module identifier for a file: `/` + relative path without extension
///
/// Falls back to the file path as given when it does not live under the root.
pub fn module_identifier(file_path: &Path, workspace_root: &Path) -> String {
    let relative = to_relative_unix_style(file_path, workspace_root)
        .unwrap_or_else(|_| file_path.to_string_lossy().replace('\\', "/"));
    let trimmed = relative.trim_start_matches('/');

    let without_extension = MODULE_EXTENSIONS
        .iter()
        .find_map(|ext| trimmed.strip_suffix(ext))
        .unwrap_or(trimmed);

    format!("/{}", without_extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_linux_absolute_to_relative() {
        let workspace = PathBuf::from("/home/dev/source/app");
        let absolute = PathBuf::from("/home/dev/source/app/src/models/user.ts");

        let result = to_relative_unix_style(&absolute, &workspace).unwrap();

        assert_eq!(result, "src/models/user.ts");
    }

    #[test]
    fn test_file_outside_workspace_rejected() {
        let workspace = PathBuf::from("/home/dev/source/app");
        let outside_file = PathBuf::from("/etc/passwd");

        let result = to_relative_unix_style(&outside_file, &workspace);

        assert!(result.is_err(), "Should reject files outside workspace");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not within workspace"));
    }

    #[test]
    fn test_module_identifier_strips_extensions() {
        let workspace = PathBuf::from("/home/dev/source/app");

        assert_eq!(
            module_identifier(Path::new("/home/dev/source/app/src/user.ts"), &workspace),
            "/src/user"
        );
        assert_eq!(
            module_identifier(Path::new("/home/dev/source/app/typings/lib.d.ts"), &workspace),
            "/typings/lib"
        );
        assert_eq!(
            module_identifier(Path::new("/home/dev/source/app/view.tsx"), &workspace),
            "/view"
        );
    }

    #[test]
    fn test_module_identifier_outside_root_keeps_path() {
        let workspace = PathBuf::from("/home/dev/source/app");

        assert_eq!(
            module_identifier(Path::new("/opt/shared/util.ts"), &workspace),
            "/opt/shared/util"
        );
    }
}
