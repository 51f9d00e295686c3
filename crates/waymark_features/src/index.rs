use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Element, ElementPath, Feature, IndexError, IndexWarning, Route};

/// Resolves permalink ids to elements in two steps: id -> path, then path -> element.
///
/// Paths come back in their `type/name/id` text form. Callers parse them into an [ElementPath].
pub trait FeatureIndex {
    fn path_for_id(&self, id: &str) -> Option<String>;
    fn element_for_path(&self, path: &ElementPath) -> Option<&Element>;
}

/// The on-disk layout of feature data.
///
/// ```json
/// {
///   "features": { "mondstadt-anemoculus": [ { "id": "abc123", "coordinates": [12.5, -40.0] } ] },
///   "routes": { "MainTrail": [ { "id": "42", "coordinates": [[1.0, 2.0], [3.0, 4.0]] } ] }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FeatureData {
    features: IndexMap<String, Vec<FeatureEntry>>,
    routes: IndexMap<String, Vec<RouteEntry>>,
}

#[derive(Debug, Deserialize)]
struct FeatureEntry {
    id: String,
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    id: String,
    coordinates: Vec<[f64; 2]>,
}

/// Feature index that keeps every element in memory.
#[derive(Debug, Default)]
pub struct MemoryFeatureIndex {
    /// id -> path. ids are unique across features and routes
    paths: BTreeMap<String, ElementPath>,
    /// elements in the order they were inserted
    elements: IndexMap<ElementPath, Element>,
}

impl MemoryFeatureIndex {
    /// Loads feature data json. Entries that can't be indexed are skipped and reported as warnings.
    pub fn from_json(src: &str) -> Result<(Self, Vec<IndexWarning>), IndexError> {
        let data: FeatureData = serde_json::from_str(src)?;
        let mut index = Self::default();
        let mut warnings = vec![];
        for (name, entries) in data.features {
            for entry in entries {
                if let Err(w) = index.insert_feature(&name, entry.id, entry.coordinates) {
                    warnings.push(w);
                }
            }
        }
        for (name, entries) in data.routes {
            for entry in entries {
                if let Err(w) = index.insert_route(&name, entry.id, entry.coordinates) {
                    warnings.push(w);
                }
            }
        }
        for w in &warnings {
            warn!(%w, "skipped feature data entry");
        }
        debug!(
            elements = index.len(),
            warnings = warnings.len(),
            "loaded feature index"
        );
        Ok((index, warnings))
    }

    pub fn insert_feature(
        &mut self,
        name: &str,
        id: impl Into<String>,
        coordinates: [f64; 2],
    ) -> Result<(), IndexWarning> {
        let id = id.into();
        let path = ElementPath::feature(name, id.clone());
        self.insert(path, Element::Feature(Feature { id, coordinates }))
    }

    pub fn insert_route(
        &mut self,
        name: &str,
        id: impl Into<String>,
        coordinates: Vec<[f64; 2]>,
    ) -> Result<(), IndexWarning> {
        let id = id.into();
        if coordinates.is_empty() {
            return Err(IndexWarning::EmptyRoute {
                name: name.to_owned(),
                id,
            });
        }
        let path = ElementPath::route(name, id.clone());
        self.insert(path, Element::Route(Route { id, coordinates }))
    }

    fn insert(&mut self, path: ElementPath, element: Element) -> Result<(), IndexWarning> {
        if path.id.is_empty() || path.id.contains('/') {
            return Err(IndexWarning::InvalidId {
                name: path.name,
                id: path.id,
            });
        }
        if let Some(existing) = self.paths.get(&path.id) {
            return Err(IndexWarning::DuplicateId {
                id: path.id.clone(),
                existing: existing.to_string(),
                skipped: path.to_string(),
            });
        }
        self.paths.insert(path.id.clone(), path.clone());
        self.elements.insert(path, element);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&ElementPath, &Element)> {
        self.elements.iter()
    }
}

impl FeatureIndex for MemoryFeatureIndex {
    fn path_for_id(&self, id: &str) -> Option<String> {
        self.paths.get(id).map(ToString::to_string)
    }

    fn element_for_path(&self, path: &ElementPath) -> Option<&Element> {
        self.elements.get(path)
    }
}
