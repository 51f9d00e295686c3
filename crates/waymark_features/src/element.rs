use serde::{Deserialize, Serialize};

/// A position on the map. Feature data stores these as `[lat, lng]` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: String,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    /// ordered nodes of the route. the index never stores a route without nodes
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Feature(Feature),
    Route(Route),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Feature(f) => &f.id,
            Element::Route(r) => &r.id,
        }
    }
    /// where the camera should look at when highlighting this element.
    /// features use their only coordinate pair and routes use their first node.
    pub fn focus_position(&self) -> Option<LatLng> {
        match self {
            Element::Feature(f) => Some(f.coordinates.into()),
            Element::Route(r) => r.coordinates.first().copied().map(LatLng::from),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn route_focuses_on_first_node() {
        let route = Element::Route(Route {
            id: "42".to_owned(),
            coordinates: vec![[10.5, -3.25], [11.0, -4.0], [12.0, -5.0]],
        });
        assert_eq!(
            route.focus_position(),
            Some(LatLng {
                lat: 10.5,
                lng: -3.25
            })
        );
        assert_eq!(route.id(), "42");
    }

    #[test]
    fn feature_focuses_on_its_coordinates() {
        let feature = Element::Feature(Feature {
            id: "abc123".to_owned(),
            coordinates: [-20.0, 31.5],
        });
        assert_eq!(
            feature.focus_position(),
            Some(LatLng {
                lat: -20.0,
                lng: 31.5
            })
        );
    }

    #[test]
    fn empty_route_has_no_focus() {
        let route = Element::Route(Route {
            id: "1".to_owned(),
            coordinates: vec![],
        });
        assert_eq!(route.focus_position(), None);
    }
}
