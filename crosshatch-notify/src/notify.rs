use crate::api::{Notification, NotificationKind, Puzzle, PuzzleId, UserId};
use crate::diff::{diff_comments, NewComment};

/// Builds the notification records for one new comment, one per recipient.
///
/// Recipients are the puzzle owner plus, for a reply, the author of the
/// parent comment; whoever wrote the comment is then taken back out, so
/// nobody ever hears about their own comment and nobody is listed twice.
pub fn synthesize(
    event: &NewComment<'_>,
    owner_id: UserId,
    puzzle_id: PuzzleId,
    puzzle_title: &str,
) -> Vec<Notification> {
    let comment = event.comment;
    let kind = match event.parent_author_id {
        None => NotificationKind::NewComment,
        Some(_) => NotificationKind::Reply,
    };

    let mut recipients = Vec::new();
    if owner_id != comment.author_id {
        recipients.push(owner_id);
    }
    if let Some(parent_author) = event.parent_author_id {
        if parent_author != comment.author_id && !recipients.contains(&parent_author) {
            recipients.push(parent_author);
        }
    }

    recipients
        .into_iter()
        .map(|recipient_id| Notification {
            kind,
            puzzle_id,
            puzzle_title: puzzle_title.to_string(),
            comment_id: comment.id,
            recipient_id,
            author_id: comment.author_id,
            author_name: comment.author_name.clone(),
            excerpt: comment.excerpt(),
            date: comment.date,
        })
        .collect()
}

/// Lists the notifications to send out after a puzzle's comment thread went
/// from the `old` snapshot to the `new` one.
///
/// Records come out in pre-order of the new tree: a comment's records
/// precede its replies', siblings in thread order. The computation is pure
/// and stateless, so running it twice on the same pair of snapshots yields
/// the same records again; remembering which snapshot was already notified
/// is the caller's job.
pub fn notifications_for_puzzle_change(
    old: &Puzzle,
    new: &Puzzle,
    puzzle_id: PuzzleId,
) -> Vec<Notification> {
    diff_comments(&old.comments, &new.comments)
        .iter()
        .flat_map(|event| synthesize(event, new.author_id, puzzle_id, &new.title))
        .collect()
}
