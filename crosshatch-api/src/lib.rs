mod comment;
mod notification;
mod puzzle;
mod user;

pub use comment::{Comment, CommentId};
pub use notification::{Notification, NotificationKind};
pub use puzzle::{Puzzle, PuzzleId};
pub use user::UserId;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");
