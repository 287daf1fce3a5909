//! Screens reachable through the navigator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::Error;

/// A full-view UI unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Signup,
    Home,
}

impl Screen {
    /// Route name, as registered with the navigation stack
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Signup => "Signup",
            Screen::Home => "Home",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Login" => Ok(Screen::Login),
            "Signup" => Ok(Screen::Signup),
            "Home" => Ok(Screen::Home),
            other => Err(Error::Other(format!("Unknown screen: {}", other))),
        }
    }
}
