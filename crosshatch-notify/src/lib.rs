mod diff;
pub use diff::{diff_comments, NewComment};

mod notify;
pub use notify::{notifications_for_puzzle_change, synthesize};

pub mod api {
    pub use crosshatch_api::*;
}
