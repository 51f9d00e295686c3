use std::{fmt::Display, str::FromStr};

use crate::IndexError;

/// `{element_type}/{name}/{id}`
///
/// The type is [ElementPath::ROUTE_TYPE] for routes. Anything else is treated as a point feature.
/// The name sits between the first and the last `/`, so it may contain slashes itself. Ids may not.
/// None of the segments may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementPath {
    pub element_type: String,
    pub name: String,
    pub id: String,
}

impl ElementPath {
    pub const ROUTE_TYPE: &'static str = "route";
    pub const FEATURE_TYPE: &'static str = "feature";

    pub fn route(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            element_type: Self::ROUTE_TYPE.to_owned(),
            name: name.into(),
            id: id.into(),
        }
    }
    pub fn feature(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            element_type: Self::FEATURE_TYPE.to_owned(),
            name: name.into(),
            id: id.into(),
        }
    }
    pub fn is_route(&self) -> bool {
        self.element_type == Self::ROUTE_TYPE
    }
}

impl FromStr for ElementPath {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IndexError::InvalidElementPath(s.to_owned());
        let (element_type, rest) = s.split_once('/').ok_or_else(invalid)?;
        let (name, id) = rest.rsplit_once('/').ok_or_else(invalid)?;
        if element_type.is_empty() || name.is_empty() || id.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            element_type: element_type.to_owned(),
            name: name.to_owned(),
            id: id.to_owned(),
        })
    }
}

impl Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.element_type, self.name, self.id)
    }
}
