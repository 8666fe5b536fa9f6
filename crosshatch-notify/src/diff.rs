use std::collections::HashMap;

use crate::api::{Comment, UserId};

/// One comment present in the new snapshot but not in the old one, tagged
/// with the author of its immediate parent (None for a top-level comment)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NewComment<'a> {
    pub comment: &'a Comment,
    pub parent_author_id: Option<UserId>,
}

/// Lists the comments of `new` that are not in `old`, in pre-order DFS of
/// the new tree.
///
/// Matching is by id only: between two snapshots of the same thread,
/// comments are assumed to only ever be added, never removed, edited or
/// re-parented. An old comment whose id is missing from `new` is skipped
/// (with a warning), and edits to a matched comment are invisible here.
pub fn diff_comments<'a>(old: &[Comment], new: &'a [Comment]) -> Vec<NewComment<'a>> {
    let mut res = Vec::new();
    diff_siblings(old, new, None, &mut res);
    res
}

fn diff_siblings<'a>(
    old: &[Comment],
    new: &'a [Comment],
    parent_author_id: Option<UserId>,
    res: &mut Vec<NewComment<'a>>,
) {
    let mut old_by_id = HashMap::with_capacity(old.len());
    for o in old {
        // first match wins if a duplicate id slipped in upstream
        old_by_id.entry(o.id).or_insert(o);
    }
    let mut matched = 0;
    for n in new {
        match old_by_id.get(&n.id) {
            None => {
                res.push(NewComment {
                    comment: n,
                    parent_author_id,
                });
                // everything under a new comment is new as well
                diff_siblings(&[], &n.replies, Some(n.author_id), res);
            }
            Some(o) => {
                matched += 1;
                diff_siblings(&o.replies, &n.replies, Some(n.author_id), res);
            }
        }
    }
    if matched < old.len() {
        tracing::warn!(
            num_missing = old.len() - matched,
            "comments disappeared between two snapshots of an append-only thread"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommentId, Uuid};
    use chrono::Utc;

    fn uid(n: u128) -> UserId {
        UserId(Uuid::from_u128(n))
    }

    fn cid(n: u128) -> CommentId {
        CommentId(Uuid::from_u128(n))
    }

    fn comment(id: CommentId, author_id: UserId, replies: Vec<Comment>) -> Comment {
        Comment {
            id,
            author_id,
            author_name: String::from("Mike D"),
            text: String::from("I hope you all got it anyway!"),
            date: Utc::now(),
            replies,
        }
    }

    fn ids_and_parents(events: &[NewComment]) -> Vec<(CommentId, Option<UserId>)> {
        events
            .iter()
            .map(|e| (e.comment.id, e.parent_author_id))
            .collect()
    }

    #[test]
    fn diffing_a_thread_against_itself_finds_nothing() {
        let comments = vec![
            comment(cid(1), uid(1), vec![comment(cid(2), uid(2), vec![])]),
            comment(cid(3), uid(3), vec![]),
        ];
        assert_eq!(diff_comments(&comments, &comments), vec![]);
    }

    #[test]
    fn a_new_subtree_is_reported_node_by_node() {
        let old = vec![];
        let new = vec![comment(
            cid(1),
            uid(1),
            vec![
                comment(cid(2), uid(2), vec![comment(cid(3), uid(3), vec![])]),
                comment(cid(4), uid(4), vec![]),
            ],
        )];

        // every descendant is tagged with its own immediate parent's author
        assert_eq!(
            ids_and_parents(&diff_comments(&old, &new)),
            vec![
                (cid(1), None),
                (cid(2), Some(uid(1))),
                (cid(3), Some(uid(2))),
                (cid(4), Some(uid(1))),
            ],
        );
    }

    #[test]
    fn a_reply_appended_under_a_known_comment_is_found_at_any_depth() {
        let old = vec![comment(
            cid(1),
            uid(1),
            vec![comment(cid(2), uid(2), vec![])],
        )];
        let new = vec![comment(
            cid(1),
            uid(1),
            vec![comment(
                cid(2),
                uid(2),
                vec![comment(cid(3), uid(3), vec![])],
            )],
        )];

        assert_eq!(
            ids_and_parents(&diff_comments(&old, &new)),
            vec![(cid(3), Some(uid(2)))],
        );
    }

    #[test]
    fn siblings_come_out_in_thread_order_parents_before_replies() {
        let old = vec![comment(cid(1), uid(1), vec![])];
        let new = vec![
            comment(cid(2), uid(2), vec![comment(cid(3), uid(3), vec![])]),
            comment(cid(1), uid(1), vec![comment(cid(4), uid(4), vec![])]),
            comment(cid(5), uid(5), vec![]),
        ];

        assert_eq!(
            ids_and_parents(&diff_comments(&old, &new)),
            vec![
                (cid(2), None),
                (cid(3), Some(uid(2))),
                (cid(4), Some(uid(1))),
                (cid(5), None),
            ],
        );
    }

    #[test]
    fn a_comment_removed_upstream_yields_no_event() {
        let old = vec![
            comment(cid(1), uid(1), vec![]),
            comment(cid(2), uid(2), vec![]),
        ];
        let new = vec![comment(cid(1), uid(1), vec![])];

        assert_eq!(diff_comments(&old, &new), vec![]);
    }
}
