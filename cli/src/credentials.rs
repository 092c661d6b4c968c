//! File-based session storage for the CLI.
//!
//! Persists the authenticated session in TOML with secure file permissions
//! (0600 on Unix), keyed by instance name so several deployments can be
//! logged in at once.
//!
//! # File Location
//!
//! - Windows: `~/.tienda/session.toml`
//! - Linux/macOS: `~/.config/tienda/session.toml`
//!
//! # File Format
//!
//! ```toml
//! [instances.local]
//! accessToken = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! refreshToken = "..."
//!
//! [instances.local.user]
//! id = "u1"
//! email = "admin@example.com"
//! name = "Admin"
//! role = "admin"
//! isActive = true
//! createdAt = "2025-01-01T00:00:00Z"
//! updatedAt = "2025-01-01T00:00:00Z"
//! ```
//!
//! A file that fails to parse is deleted and treated as absent: corruption
//! never resurfaces and never takes the CLI down.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use tienda_link::error::TiendaLinkError;
use tienda_link::{Result, Session, SessionStore};

/// File-backed session store.
///
/// Every read goes to disk; there is no cache layer, so a session written
/// by one process is immediately visible to the next.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    file_path: PathBuf,
    instance: String,
}

/// Top-level TOML structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    instances: HashMap<String, Session>,
}

impl FileSessionStore {
    /// Default session file path
    /// - Windows: `~/.tienda/session.toml`
    /// - Linux/macOS: `~/.config/tienda/session.toml`
    pub fn default_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".tienda").join("session.toml")
            } else {
                PathBuf::from(".tienda").join("session.toml")
            }
        }

        #[cfg(not(target_os = "windows"))]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("tienda").join("session.toml")
            } else if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("tienda").join("session.toml")
            } else {
                PathBuf::from(".tienda").join("session.toml")
            }
        }
    }

    /// Store for an instance at the default location
    pub fn new(instance: impl Into<String>) -> Self {
        Self::with_path(Self::default_path(), instance)
    }

    /// Store for an instance at a custom location
    pub fn with_path(file_path: PathBuf, instance: impl Into<String>) -> Self {
        Self {
            file_path,
            instance: instance.into(),
        }
    }

    /// The file path used by this store
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole session file.
    ///
    /// A missing file is an empty store. A file that fails to parse is
    /// deleted on the spot and reported empty, so the corruption cannot
    /// resurface on later reads.
    fn read_file(&self) -> SessionFile {
        let contents = match fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(_) => return SessionFile::default(),
        };

        match toml::from_str::<SessionFile>(&contents) {
            Ok(file) => file,
            Err(err) => {
                warn!(
                    "[SESSION] Discarding corrupted session file {}: {}",
                    self.file_path.display(),
                    err
                );
                if let Err(err) = fs::remove_file(&self.file_path) {
                    warn!(
                        "[SESSION] Failed to delete corrupted session file {}: {}",
                        self.file_path.display(),
                        err
                    );
                }
                SessionFile::default()
            }
        }
    }

    fn write_file(&self, file: &SessionFile) -> Result<()> {
        let contents = toml::to_string_pretty(file).map_err(|e| {
            TiendaLinkError::Configuration(format!("Failed to serialize session: {}", e))
        })?;

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TiendaLinkError::Configuration(format!(
                    "Failed to create session directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&self.file_path, contents).map_err(|e| {
            TiendaLinkError::Configuration(format!(
                "Failed to write session file at '{}': {}",
                self.file_path.display(),
                e
            ))
        })?;

        // Owner read/write only: the file can carry tokens
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.file_path, permissions).map_err(|e| {
                TiendaLinkError::Configuration(format!(
                    "Failed to set file permissions for '{}': {}",
                    self.file_path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&mut self, session: &Session) -> Result<()> {
        let mut file = self.read_file();
        file.instances.insert(self.instance.clone(), session.clone());
        self.write_file(&file)
    }

    fn load(&self) -> Option<Session> {
        self.read_file().instances.get(&self.instance).cloned()
    }

    fn clear(&mut self) -> Result<()> {
        let mut file = self.read_file();
        if file.instances.remove(&self.instance).is_some() {
            self.write_file(&file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tienda_link::models::{User, UserRole};

    fn test_user(active: bool) -> User {
        User {
            id: "u1".into(),
            email: "admin@example.com".into(),
            name: "Admin".into(),
            role: UserRole::Admin,
            is_active: active,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    fn create_temp_store() -> (FileSessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.toml");
        let store = FileSessionStore::with_path(file_path, "local");
        (store, temp_dir)
    }

    #[test]
    fn test_file_store_roundtrip() {
        let (mut store, _temp_dir) = create_temp_store();

        assert_eq!(store.load(), None);
        assert!(!store.is_authenticated());

        let session = Session::new(test_user(true), Some("tok".into()), Some("refresh".into()));
        store.save(&session).unwrap();

        assert_eq!(store.load(), Some(session));
        assert!(store.is_authenticated());

        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances_of_the_store() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.toml");

        {
            let mut store = FileSessionStore::with_path(file_path.clone(), "prod");
            store
                .save(&Session::new(test_user(true), Some("tok".into()), None))
                .unwrap();
        }

        assert!(file_path.exists());

        let store = FileSessionStore::with_path(file_path, "prod");
        let session = store.load().unwrap();
        assert_eq!(session.access_token.as_deref(), Some("tok"));
        assert_eq!(session.user.unwrap().email, "admin@example.com");
    }

    #[test]
    fn test_corrupted_file_is_discarded_and_deleted() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.toml");
        fs::write(&file_path, "this is [not valid toml").unwrap();

        let store = FileSessionStore::with_path(file_path.clone(), "local");
        assert_eq!(store.load(), None);
        // The corrupted file is gone, not just ignored
        assert!(!file_path.exists());
        // And it stays gone on subsequent reads
        assert_eq!(store.load(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_multiple_instances_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.toml");

        let mut local = FileSessionStore::with_path(file_path.clone(), "local");
        let mut prod = FileSessionStore::with_path(file_path.clone(), "prod");

        local
            .save(&Session::new(test_user(true), Some("local-tok".into()), None))
            .unwrap();
        prod.save(&Session::new(test_user(true), Some("prod-tok".into()), None))
            .unwrap();

        assert_eq!(local.load().unwrap().access_token.as_deref(), Some("local-tok"));
        assert_eq!(prod.load().unwrap().access_token.as_deref(), Some("prod-tok"));

        local.clear().unwrap();
        assert_eq!(local.load(), None);
        assert!(prod.load().is_some());
    }

    #[test]
    fn test_inactive_user_is_unauthenticated() {
        let (mut store, _temp_dir) = create_temp_store();
        store
            .save(&Session::new(test_user(false), Some("tok".into()), None))
            .unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    #[cfg(unix)]
    fn test_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let (mut store, _temp_dir) = create_temp_store();
        store
            .save(&Session::new(test_user(true), Some("tok".into()), None))
            .unwrap();

        let metadata = fs::metadata(store.path()).unwrap();
        assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
    }

    #[test]
    fn test_toml_format() {
        let (mut store, _temp_dir) = create_temp_store();
        store
            .save(&Session::new(
                test_user(true),
                Some("tok-local".into()),
                Some("refresh-local".into()),
            ))
            .unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("[instances.local]"));
        assert!(contents.contains("accessToken = \"tok-local\""));
        assert!(contents.contains("refreshToken = \"refresh-local\""));
        assert!(contents.contains("email = \"admin@example.com\""));
    }
}
