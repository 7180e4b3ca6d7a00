//! Flat key/value query building with repeated keys for list values.

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    One(String),
    /// Encoded as one `key=value` pair per element.
    Many(Vec<String>),
}

/// An ordered multi-map of transport parameters.
///
/// ```
/// use translate_v2::translation::Query;
///
/// let query = Query::for_text(vec!["Hello".into(), "Bye".into()])
///     .param("target", "bn")
///     .param("key", "secret");
/// assert_eq!(query.serialize(), "q=Hello&q=Bye&target=bn&key=secret");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(&'static str, Param)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a query carrying `texts` under the `q` key.
    pub fn for_text(texts: Vec<String>) -> Self {
        Self::new().many("q", texts)
    }

    /// Appends a scalar parameter.
    #[must_use]
    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, Param::One(value.into())));
        self
    }

    /// Appends a scalar parameter only when `value` is present.
    #[must_use]
    pub fn optional(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Appends a list parameter.
    #[must_use]
    pub fn many(mut self, key: &'static str, values: Vec<String>) -> Self {
        self.params.push((key, Param::Many(values)));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.params.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Serializes into `k=v&k=v` form.
    ///
    /// List parameters come first, one pair per element in input order,
    /// followed by scalar parameters in insertion order.
    pub fn serialize(&self) -> String {
        let lists = self.params.iter().filter_map(|(key, param)| match param {
            Param::Many(values) => Some(values.iter().map(move |v| encode_pair(key, v))),
            Param::One(_) => None,
        });

        let scalars = self.params.iter().filter_map(|(key, param)| match param {
            Param::One(value) => Some(encode_pair(key, value)),
            Param::Many(_) => None,
        });

        lists.flatten().chain(scalars).collect::<Vec<_>>().join("&")
    }
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}
