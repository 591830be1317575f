pub mod current_user;
pub mod resource_id;
pub mod validated_json;

pub use current_user::CurrentUser;
pub use resource_id::{Resource, ResourceId};
pub use validated_json::ValidatedJson;
