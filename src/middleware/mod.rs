pub mod guard;
pub mod response;
pub mod session;

pub use guard::{authorize_creation, authorize_target, require_feature, require_restricted, require_route};
pub use response::{ApiResponse, ApiResult};
pub use session::{extract_bearer_token, session_middleware, Session, SessionError, SessionVerifier, SharedVerifier};
