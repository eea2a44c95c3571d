//! TOML projection definitions.
//!
//! ```toml
//! kind = "LAMBERT_CONFORMAL_CONIC"
//! central_meridian = 90.0
//! standard_parallels = [50.0, 70.0]
//! ```
//!
//! Omitted parameters take the defaults of the chosen kind. One definition
//! per kind is compiled in from `projections/`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
    Projection, ProjectionError,
    equirectangular::{Equirectangular, EquirectangularParams},
    lambert::{LambertConformalConic, LambertParams},
};

/// Embedded TOML definitions, one per [`ProjectionKind`].
const BUILTIN_TOMLS: &[(ProjectionKind, &str)] = &[
    (
        ProjectionKind::LambertConformalConic,
        include_str!("../projections/lambert_conformal_conic.toml"),
    ),
    (
        ProjectionKind::Equirectangular,
        include_str!("../projections/equirectangular.toml"),
    ),
];

/// The supported projection families.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProjectionKind {
    LambertConformalConic,
    Equirectangular,
}

/// A projection definition as read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionConfig {
    LambertConformalConic(LambertParams),
    Equirectangular(EquirectangularParams),
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::LambertConformalConic(LambertParams::default())
    }
}

impl ProjectionConfig {
    #[must_use]
    pub const fn kind(&self) -> ProjectionKind {
        match self {
            Self::LambertConformalConic(_) => ProjectionKind::LambertConformalConic,
            Self::Equirectangular(_) => ProjectionKind::Equirectangular,
        }
    }

    /// Parses a projection definition.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Toml`] if the document is malformed or
    /// names an unknown `kind`.
    pub fn from_toml(toml_str: &str) -> Result<Self, ProjectionError> {
        Ok(toml::de::from_str(toml_str)?)
    }

    /// Reads and parses a projection definition file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, ProjectionError> {
        log::debug!("Loading projection definition from {}", path.display());
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    /// Returns the compiled-in definition for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded definition fails to parse.
    pub fn builtin(kind: ProjectionKind) -> Result<Self, ProjectionError> {
        let (_, toml_str) = BUILTIN_TOMLS
            .iter()
            .find(|(k, _)| *k == kind)
            .ok_or(ProjectionError::MissingBuiltin { kind })?;
        Self::from_toml(toml_str)
    }

    /// Builds the projection described by this definition.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidParameter`] if the parameters do
    /// not describe a valid projection.
    pub fn build(&self) -> Result<Box<dyn Projection>, ProjectionError> {
        let projection: Box<dyn Projection> = match self {
            Self::LambertConformalConic(params) => Box::new(LambertConformalConic::new(params)?),
            Self::Equirectangular(params) => Box::new(Equirectangular::new(params)?),
        };
        Ok(projection)
    }
}
