use indexmap::IndexMap;

/// Ordered mapping from parameter name to value.
///
/// Insertion order is iteration order, and re-inserting an existing key
/// replaces its value while keeping the key's original position. Both
/// properties are part of the SCL contract: documents rely on "last write
/// wins at the first occurrence's position" for duplicate keys.
pub type Map = IndexMap<String, Value>;

/// An SCL value.
///
/// A closed union over the six shapes the language can express. Integers and
/// floats are distinct (an `fl` block widens integer literals to floats, but
/// a `num` block never holds a float). Multiline strings parse to ordinary
/// [`Value::String`]s; whether a string re-serializes as `str { ... }` or
/// `ml { ... }` depends only on whether it contains a newline.
///
/// # Examples
///
/// ```
/// use scl_lang::{Map, Value};
///
/// let mut server = Map::new();
/// server.insert("port".to_string(), Value::Integer(8080));
/// server.insert("tls".to_string(), Value::Boolean(true));
///
/// let config = Value::Object(server);
/// assert!(config.as_object().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `bool { true }`
    Boolean(bool),

    /// `num { 42 }`
    Integer(i64),

    /// `fl { 2.5 }`
    Float(f64),

    /// `str { "..." }` or `ml { '...' }`
    String(String),

    /// `list(kind) { ... }` - elements share one declared scalar kind
    List(Vec<Value>),

    /// `class { ... }` - ordered parameters
    Object(Map),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as float, widening integers the way `fl` blocks do.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key on an object value; `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}
