use uuid::Uuid;

use crate::{Comment, CommentId, UserId, STUB_UUID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PuzzleId(pub Uuid);

impl PuzzleId {
    pub fn stub() -> PuzzleId {
        PuzzleId(STUB_UUID)
    }
}

/// One observed state of a puzzle and its comment thread
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Puzzle {
    pub id: PuzzleId,

    /// The puzzle's constructor, ie. its owner
    pub author_id: UserId,

    pub title: String,

    /// Top-level comments in thread order
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Puzzle {
    /// Appends `comment` under the comment with id `parent_id`, or as a
    /// top-level comment when `parent_id` is absent or cannot be found
    pub fn add_comment(&mut self, parent_id: Option<CommentId>, comment: Comment) {
        if let Some(parent) = parent_id.and_then(|p| Comment::find_in(&mut self.comments, &p)) {
            parent.replies.push(comment);
        } else {
            self.comments.push(comment);
        }
    }
}
