mod environment;
mod error;
mod invocation;

pub use environment::{Environment, EnvironmentError, UPLOAD_URL_EXPIRY_SECS};
pub use error::{IssueError, IssueResult};
pub use invocation::{Invocation, InvocationResponse, OBJECT_NAME_PARAM};
