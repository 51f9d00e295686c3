use std::collections::BTreeMap;

use url::{form_urlencoded, Url};

use crate::Clipboard;

/// name of the query parameter that carries the element id
pub const PERMALINK_ID_PARAM: &str = "id";

/// `{host}/?id={id}`. The id is form-urlencoded so that it survives [QueryParams::from_location].
pub fn generate_permalink(host: &str, id: &str) -> String {
    let id: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("{host}/?{PERMALINK_ID_PARAM}={id}")
}

/// writes the permalink of `id` to the clipboard and returns it
pub fn copy_permalink(clipboard: &mut dyn Clipboard, host: &str, id: &str) -> String {
    let permalink = generate_permalink(host, id);
    clipboard.set_text(&permalink);
    tracing::debug!(%permalink, "copied permalink");
    permalink
}

/// Query parameters of a page url. A parameter may appear more than once, so each name maps to all of its values in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, Vec<String>>);

impl QueryParams {
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    /// Accepts anything that looks like a location: full urls, host relative urls like the ones
    /// [generate_permalink] produces, or just the `?a=b` search part.
    /// The fragment is ignored. A location without a query has no parameters.
    pub fn from_location(location: &str) -> Self {
        if let Ok(url) = Url::parse(location) {
            if url.scheme() == "http" || url.scheme() == "https" {
                return Self::from_url(&url);
            }
        }
        let without_fragment = location
            .split_once('#')
            .map(|(before, _)| before)
            .unwrap_or(location);
        match without_fragment.split_once('?') {
            Some((_, query)) => Self::from_pairs(form_urlencoded::parse(query.as_bytes())),
            None => Self::default(),
        }
    }

    fn from_pairs<'a>(
        pairs: impl Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    ) -> Self {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in pairs {
            params
                .entry(name.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        Self(params)
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }
    /// the first value of `name`, if the parameter is present at all
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
