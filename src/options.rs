use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::ROOT_PATH;

/// Per-lookup matching options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchOptions {
    /// Fixed prefix the route tree is mounted under; stripped from
    /// incoming pathnames before matching.
    pub basepath: String,
    /// When false, static segments compare by lower-cased form.
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            basepath: ROOT_PATH.to_string(),
            case_sensitive: false,
        }
    }
}

impl MatchOptions {
    pub fn builder() -> MatchOptionsBuilder {
        MatchOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), MatchOptionsError> {
        if !self.basepath.starts_with('/') {
            return Err(MatchOptionsError::BasepathNotAbsolute {
                provided: self.basepath.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatchOptionsBuilder {
    options: MatchOptions,
}

impl MatchOptionsBuilder {
    pub fn basepath<S: Into<String>>(mut self, basepath: S) -> Self {
        self.options.basepath = basepath.into();
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn build(self) -> Result<MatchOptions, MatchOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchOptionsError {
    #[error("basepath must be absolute (got '{provided}')")]
    BasepathNotAbsolute { provided: String },
}
