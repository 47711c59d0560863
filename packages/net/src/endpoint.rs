//! Caller-supplied capability traits.
//!
//! An [`Endpoint`] names a destination; a [`QueryParameter`] contributes one
//! URL query item. Both are typically implemented by an enumerated set of
//! destinations owned by the caller.

/// A destination the client can be pointed at.
///
/// `path` must return an absolute URL. Anything else makes the call fail
/// with [`Error::MalformedRequest`](crate::Error::MalformedRequest) before
/// touching the network.
///
/// # Example
///
/// ```ignore
/// enum Api {
///     Users,
///     User(u64),
/// }
///
/// impl Endpoint for Api {
///     fn path(&self) -> String {
///         match self {
///             Api::Users => "https://api.example.com/users".to_string(),
///             Api::User(id) => format!("https://api.example.com/users/{id}"),
///         }
///     }
/// }
/// ```
pub trait Endpoint {
    /// Absolute URL of this destination.
    fn path(&self) -> String;
}

impl Endpoint for str {
    fn path(&self) -> String {
        self.to_string()
    }
}

impl Endpoint for String {
    fn path(&self) -> String {
        self.clone()
    }
}

impl Endpoint for url::Url {
    fn path(&self) -> String {
        self.as_str().to_string()
    }
}

/// A single URL query item.
pub trait QueryParameter {
    /// The `(name, value)` pair to append to the URL query.
    fn query_item(&self) -> (String, String);
}

impl QueryParameter for (String, String) {
    fn query_item(&self) -> (String, String) {
        self.clone()
    }
}

impl QueryParameter for (&str, &str) {
    fn query_item(&self) -> (String, String) {
        (self.0.to_string(), self.1.to_string())
    }
}
