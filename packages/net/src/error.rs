/// Terminal failure of a single call.
///
/// Status-derived variants come straight out of the classifier table;
/// `MalformedRequest` is produced before any network I/O, `ServerInternal`
/// wraps transport-level anomalies, and `Cancelled` is the outcome of an
/// operation abandoned by [`Client::cancel_all`](crate::Client::cancel_all).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("request could not be built from the endpoint and parameters")]
    MalformedRequest,

    #[error("400 Bad Request")]
    BadRequest,

    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("403 Forbidden")]
    Forbidden,

    #[error("404 Not Found")]
    NotFound,

    #[error("500 Internal Server Error")]
    InternalError,

    #[error("501 Not Implemented")]
    NotImplemented,

    #[error("503 Service Unavailable")]
    ServiceUnavailable,

    #[error("backend returned status {code}")]
    BackendError { code: u16 },

    #[error("transport failure: {message}")]
    ServerInternal { message: String },

    #[error("operation cancelled")]
    Cancelled,
}
