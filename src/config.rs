use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// Process-wide settings for the command line tools. The parser itself
/// never reads these.
pub static CONFIG: Lazy<Arc<RwLock<Config>>> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

pub struct Config {
    entries: HashMap<String, ValKind>,
}

pub enum ValKind {
    Bool(bool),
    Str(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigErr {
    pub name: String,
    pub message: String,
}

impl ConfigErr {
    pub fn new(name: &str, message: &str) -> Self {
        Self { name: name.to_owned(), message: message.to_owned() }
    }

    fn name_not_known(name: &str) -> Self {
        Self::new(name, "unknown config name")
    }

    fn value_is_not_valid(name: &str, message: &str) -> Self {
        Self::new(name, message)
    }
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

type NameResult = Result<(), ConfigErr>;

impl Default for Config {
    fn default() -> Self {
        use ValKind::*;
        let mut entries = HashMap::new();
        entries.insert("debug".to_owned(), Bool(false));
        entries.insert("format".to_owned(), Str("tuple".to_owned()));
        Self { entries }
    }
}

impl Config {
    fn get(&self, name: &str) -> Result<&ValKind, ConfigErr> {
        self.entries.get(name).ok_or_else(|| ConfigErr::name_not_known(name))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, ConfigErr> {
        let val = self.get(name)?;
        if let ValKind::Bool(val) = val {
            Ok(*val)
        } else {
            Err(ConfigErr::value_is_not_valid(name, "expected bool"))
        }
    }

    pub fn get_str(&self, name: &str) -> Result<&String, ConfigErr> {
        let val = self.get(name)?;
        if let ValKind::Str(val) = val {
            Ok(val)
        } else {
            Err(ConfigErr::value_is_not_valid(name, "expected string"))
        }
    }

    /// Replace an existing entry. The new value must have the same type
    /// as the current one.
    fn set(&mut self, name: &str, val: ValKind) -> NameResult {
        let current = self.get(name)?;
        let same_type = matches!(
            (current, &val),
            (ValKind::Bool(_), ValKind::Bool(_)) | (ValKind::Str(_), ValKind::Str(_))
        );
        if !same_type {
            return Err(ConfigErr::value_is_not_valid(name, "type mismatch"));
        }
        self.entries.insert(name.to_owned(), val);
        Ok(())
    }

    pub fn set_bool(&mut self, name: &str, val: bool) -> NameResult {
        self.set(name, ValKind::Bool(val))
    }

    pub fn set_str(&mut self, name: &str, val: &str) -> NameResult {
        self.set(name, ValKind::Str(val.to_owned()))
    }

    /// Default log filter. Debug mode traces every transition of the
    /// parsing machine.
    pub fn log_filter(&self) -> Result<&'static str, ConfigErr> {
        Ok(if self.get_bool("debug")? { "opparse=trace" } else { "warn" })
    }
}
