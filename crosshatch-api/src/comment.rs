use uuid::Uuid;

use crate::{Time, UserId, STUB_UUID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    /// Unique across the whole tree of the owning puzzle
    pub id: CommentId,

    pub author_id: UserId,

    /// Display name as it was when the comment was written, never re-resolved
    pub author_name: String,

    pub text: String,

    /// Used for display and ordering only, never for identity
    pub date: Time,

    /// Child comments in thread order
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn find_in<'a>(comments: &'a mut Vec<Comment>, id: &CommentId) -> Option<&'a mut Comment> {
        for c in comments.iter_mut() {
            if c.id == *id {
                return Some(c);
            }
            if let Some(res) = Comment::find_in(&mut c.replies, id) {
                return Some(res);
            }
        }
        None
    }

    /// Display excerpt carried on notification records: at most 160 chars,
    /// cut at a word boundary with a trailing ellipsis when truncated
    pub fn excerpt(&self) -> String {
        const MAX_CHARS: usize = 160;
        if self.text.chars().count() <= MAX_CHARS {
            return self.text.clone();
        }
        let mut res = String::new();
        for word in self.text.split_whitespace() {
            let sep = if res.is_empty() { 0 } else { 1 };
            if res.chars().count() + sep + word.chars().count() > MAX_CHARS - 1 {
                break;
            }
            if sep == 1 {
                res.push(' ');
            }
            res.push_str(word);
        }
        if res.is_empty() {
            // first word alone does not fit, hard-cut it
            res = self.text.chars().take(MAX_CHARS - 1).collect();
        }
        res.push('…');
        res
    }
}
