//! Extraction of `--flag=value` tokens that follow the verb and entity.
//!
//! Tokens that are not of that shape, and flags nobody asks for, are ignored.
//! When a flag repeats, the last occurrence wins.

#![deny(clippy::all, clippy::pedantic)]

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::client::CliError;

const LIST_DELIM: char = ',';

/// Flags whose values never show up in logs.
const SECRET_FLAGS: [&str; 3] = ["password", "secret", "key"];

#[derive(Default, Clone)]
pub struct Flags {
    values: HashMap<String, String>,
}

impl Flags {
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let values = tokens
            .iter()
            .filter_map(|token| split_flag(token.as_ref()))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value of `--name`, or an empty string when absent.
    pub fn string(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Comma separated values of `--name`.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|v| v.split(LIST_DELIM).map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn bool(&self, name: &str) -> Result<Option<bool>, CliError> {
        match self.get(name) {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(CliError::usage(format!(
                "wrong value for option --{name}: {other}"
            ))),
        }
    }

    pub fn integer<T>(&self, name: &str) -> Result<Option<T>, CliError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)
            .map(|v| {
                v.parse::<T>().map_err(|e| {
                    CliError::usage(format!("value for option --{name} must be an integer: {e}"))
                })
            })
            .transpose()
    }

    /// Parses `--name` into one of the variants of `T`.
    pub fn choice<T: ValueEnum>(&self, name: &str) -> Result<Option<T>, CliError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        <T as ValueEnum>::from_str(value, false).map(Some).map_err(|_| {
            let valid: Vec<String> = T::value_variants()
                .iter()
                .filter_map(T::to_possible_value)
                .map(|p| p.get_name().to_string())
                .collect();
            CliError::usage(format!(
                "invalid value for option --{name}: {value} (valid values: {})",
                valid.join(", ")
            ))
        })
    }

    /// Value of an identifying flag, required by item and nested operations.
    pub fn required(&self, name: &str, entity: &str) -> Result<&str, CliError> {
        self.get(name).ok_or_else(|| {
            CliError::usage(format!(
                "missing {entity} id: option --{name}={{id}} required for this command"
            ))
        })
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.values {
            if SECRET_FLAGS.contains(&name.as_str()) {
                map.entry(name, &"***");
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}

fn split_flag(token: &str) -> Option<(&str, &str)> {
    let (name, value) = token.strip_prefix("--")?.split_once('=')?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name, value))
}
