use crate::{CommentId, PuzzleId, Time, UserId};

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NotificationKind {
    /// A new top-level comment on the puzzle
    NewComment,
    /// A new reply to an existing comment
    Reply,
}

/// One "tell `recipient_id` about this comment" record. Created once per
/// (new comment, recipient) pair; the notification store takes it from
/// there (persistence, read state, delivery, per-recipient opt-outs).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Notification {
    pub kind: NotificationKind,

    pub puzzle_id: PuzzleId,
    pub puzzle_title: String,
    pub comment_id: CommentId,

    pub recipient_id: UserId,

    /// Who wrote the new comment
    pub author_id: UserId,
    pub author_name: String,

    pub excerpt: String,
    pub date: Time,
}
