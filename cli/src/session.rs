//! Cookie session persisted between invocations.
//!
//! The API authenticates with an HttpOnly session cookie and a readable CSRF
//! cookie. The browser keeps both in its jar; the CLI keeps them as a JSON
//! object of `name -> value` pairs and replays them as one `Cookie` header.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use cookie::Cookie;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::error::CliError;

pub const DEFAULT_SESSION_FILE: &str = ".smc-admin-session.json";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    cookies: BTreeMap<String, String>,
}

impl Session {
    /// Read `path`; a missing file is an empty session.
    ///
    /// # Errors
    ///
    /// Unreadable or malformed files.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(CliError::SessionIo { path: path.to_path_buf(), source }),
        };
        serde_json::from_str(&raw).map_err(|source| CliError::SessionFormat { path: path.to_path_buf(), source })
    }

    /// Write the session as pretty JSON, readable by the owner only on unix.
    ///
    /// # Errors
    ///
    /// Filesystem failures.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let io_err = |source| CliError::SessionIo { path: path.to_path_buf(), source };
        let body = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(path).map_err(io_err)?;
        std::io::Write::write_all(&mut file, body.as_bytes()).map_err(io_err)
    }

    /// Remove the session file. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Filesystem failures other than "not found".
    pub fn delete(path: &Path) -> Result<bool, CliError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CliError::SessionIo { path: path.to_path_buf(), source }),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Apply one `Set-Cookie` value. Returns whether the jar changed.
    pub fn absorb(&mut self, set_cookie: &str) -> bool {
        self.absorb_at(set_cookie, OffsetDateTime::now_utc())
    }

    /// [`Session::absorb`] against a fixed clock. Empty values, a
    /// non-positive `Max-Age` and an `Expires` at or before `now` clear the
    /// cookie.
    pub fn absorb_at(&mut self, set_cookie: &str, now: OffsetDateTime) -> bool {
        let cookie = match Cookie::parse(set_cookie) {
            Ok(cookie) => cookie,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed Set-Cookie");
                return false;
            }
        };
        let name = cookie.name();
        let value = cookie.value().trim_matches('"');
        let expired = cookie.max_age().is_some_and(|age| age <= Duration::ZERO)
            || cookie.expires_datetime().is_some_and(|at| at <= now);

        if value.is_empty() || expired {
            return self.cookies.remove(name).is_some();
        }
        self.cookies.insert(name.to_owned(), value.to_owned()).as_deref() != Some(value)
    }

    /// `name=value; name=value` for the `Cookie` request header.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self.cookies.iter().map(|(name, value)| format!("{name}={value}")).collect();
        Some(pairs.join("; "))
    }
}
