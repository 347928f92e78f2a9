//! Common password list
//!
//! Holds the set of passwords considered trivially guessable. The analyzer
//! ships with a small built-in set; a larger list can be loaded from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable naming a custom common-password file.
pub const COMMON_PASSWORDS_ENV: &str = "PWD_AUDIT_COMMON_PASSWORDS";

const BUILTIN: [&str; 6] = ["password", "123456", "qwerty", "admin", "letmein", "welcome"];

static BUILTIN_SET: LazyLock<CommonPasswords> =
    LazyLock::new(|| CommonPasswords::from_entries(BUILTIN));

#[derive(Error, Debug)]
pub enum CommonPasswordsError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Lowercase set of passwords that are guessed first by any attacker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// The built-in list, shared for the whole process.
    pub fn builtin() -> &'static CommonPasswords {
        &BUILTIN_SET
    }

    /// Builds a set from arbitrary entries. Entries are trimmed and
    /// lowercased; blank ones are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a newline-separated list from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonPasswordsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: FileNotFound {:?}", path);
            return Err(CommonPasswordsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let set = Self::from_entries(content.lines());

        if set.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: Empty file {:?}", path);
            return Err(CommonPasswordsError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", set.len(), path);

        Ok(set)
    }

    /// Loads the list named by `PWD_AUDIT_COMMON_PASSWORDS`, falling back to
    /// the built-in set when the variable is unset.
    pub fn from_env() -> Result<Self, CommonPasswordsError> {
        match std::env::var_os(COMMON_PASSWORDS_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin().clone()),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: env-var tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: env-var tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_builtin_contents() {
        let set = CommonPasswords::builtin();
        assert_eq!(set.len(), 6);
        for pwd in ["password", "123456", "qwerty", "admin", "letmein", "welcome"] {
            assert!(set.contains(pwd), "{pwd} should be common");
        }
    }

    #[test]
    fn test_contains_case_insensitive() {
        let set = CommonPasswords::builtin();
        assert!(set.contains("PassWord"));
        assert!(set.contains("ADMIN"));
        assert!(!set.contains("password1"));
    }

    #[test]
    fn test_from_entries_normalizes() {
        let set = CommonPasswords::from_entries(["  Dragon ", "", "MONKEY", "   "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("dragon"));
        assert!(set.contains("monkey"));
    }

    #[test]
    fn test_from_path_not_found() {
        let result = CommonPasswords::from_path("/nonexistent/path/common.txt");
        assert!(matches!(result, Err(CommonPasswordsError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "   ").expect("Failed to write");

        let result = CommonPasswords::from_path(temp_file.path());
        assert!(matches!(result, Err(CommonPasswordsError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password123").expect("Failed to write");
        writeln!(temp_file, "Sunshine").expect("Failed to write");

        let set = CommonPasswords::from_path(temp_file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("sunshine"));
        assert!(!set.contains("password"));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_uses_builtin() {
        remove_env(COMMON_PASSWORDS_ENV);
        let set = CommonPasswords::from_env().unwrap();
        assert_eq!(&set, CommonPasswords::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_path() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "hunter2").expect("Failed to write");
        set_env(COMMON_PASSWORDS_ENV, temp_file.path().to_str().unwrap());

        let set = CommonPasswords::from_env().unwrap();
        assert!(set.contains("hunter2"));
        assert_eq!(set.len(), 1);

        remove_env(COMMON_PASSWORDS_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_bad_path() {
        set_env(COMMON_PASSWORDS_ENV, "/nonexistent/common.txt");
        assert!(CommonPasswords::from_env().is_err());
        remove_env(COMMON_PASSWORDS_ENV);
    }
}
