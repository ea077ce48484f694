use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::Error;

/// Client-side session state for the identity provider.
///
/// The identity provider issues bearer tokens out of band; this adapter
/// keeps the current token in memory, persists it in the user's data
/// directory, and exposes the log-in/log-out actions. While no token is
/// present the app shows the sign-in screen instead of the content views.
#[derive(Debug)]
pub struct Session {
    token: Option<String>,
    store: PathBuf,
}

impl Session {
    /// Load the persisted session, if any.
    pub fn load() -> Self {
        Self::from_store(Self::token_file())
    }

    /// A session backed by a specific token file.
    pub fn from_store(store: PathBuf) -> Self {
        let token = fs::read_to_string(&store)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty());

        Session { token, store }
    }

    /// Path of the persisted token, alongside the app's other data:
    /// - Linux: ~/.local/share/gif-gallery/token
    /// - macOS: ~/Library/Application Support/gif-gallery/token
    /// - Windows: %APPDATA%\gif-gallery\token
    fn token_file() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("could not determine user data directory");

        path.push("gif-gallery");
        path.push("token");
        path
    }

    /// The current bearer token, when signed in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Adopt a token issued by the identity provider and persist it.
    pub fn log_in(&mut self, token: String) -> Result<(), Error> {
        if let Some(parent) = self.store.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::SessionStorage(err.to_string()))?;
        }

        fs::write(&self.store, &token).map_err(|err| Error::SessionStorage(err.to_string()))?;
        self.token = Some(token);
        Ok(())
    }

    /// Drop the session and delete the persisted token.
    pub fn log_out(&mut self) -> Result<(), Error> {
        self.token = None;

        match fs::remove_file(&self.store) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::SessionStorage(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_log_in_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("token");

        let mut session = Session::from_store(store.clone());
        assert_eq!(session.token(), None);

        session.log_in("abc.def.ghi".to_string()).unwrap();
        assert_eq!(session.token(), Some("abc.def.ghi"));

        let reloaded = Session::from_store(store);
        assert_eq!(reloaded.token(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_log_out_removes_token() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("token");

        let mut session = Session::from_store(store.clone());
        session.log_in("abc".to_string()).unwrap();
        session.log_out().unwrap();

        assert_eq!(session.token(), None);
        assert_eq!(Session::from_store(store).token(), None);
    }

    #[test]
    fn test_log_out_without_token_is_ok() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::from_store(dir.path().join("token"));
        assert!(session.log_out().is_ok());
    }

    #[test]
    fn test_blank_token_file_means_signed_out() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("token");
        fs::write(&store, "  \n").unwrap();

        assert_eq!(Session::from_store(store).token(), None);
    }
}
