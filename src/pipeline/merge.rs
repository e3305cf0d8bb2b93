//! Block merger: collapse same-role runs into turns.

use crate::model::{Block, Ticketed};

/// Merge consecutive entries sharing room, ticket, and role into one block each.
///
/// Output order follows input order; nothing is reordered.
pub fn merge_blocks(entries: &[Ticketed<'_>]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for ticketed in entries {
        if let Some(block) = blocks.last_mut()
            && block.continues(ticketed)
        {
            block.push(&ticketed.entry.text);
            continue;
        }
        blocks.push(Block::open(ticketed));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{LogEntry, Role};
    use crate::pipeline::fixtures::*;
    use crate::pipeline::sessionize;

    fn merge(entries: &[LogEntry]) -> Vec<Block> {
        merge_blocks(&sessionize(entries, FIFTEEN_MINUTES))
    }

    fn texts(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn joins_consecutive_same_role_messages() {
        let blocks = merge(&[
            user(1, "R1", 0, "hi"),
            user(2, "R1", 1, "are you there?"),
            agent(3, "R1", 2, "yes"),
            agent(4, "R1", 3, "how can I help"),
        ]);

        assert_eq!(texts(&blocks), ["hi\nare you there?", "yes\nhow can I help"]);
        assert_eq!(blocks[0].messages, 2);
        assert_eq!(blocks[0].role, Role::User);
        assert_eq!(blocks[1].role, Role::Agent);
    }

    #[test]
    fn role_flip_opens_new_block() {
        let blocks = merge(&[
            user(1, "R1", 0, "hi"),
            agent(2, "R1", 1, "hello"),
            user(3, "R1", 2, "more"),
        ]);
        assert_eq!(texts(&blocks), ["hi", "hello", "more"]);
    }

    #[test]
    fn ticket_boundary_splits_same_role_run() {
        let blocks = merge(&[user(1, "R1", 0, "old"), user(2, "R1", 30, "new")]);

        assert_eq!(texts(&blocks), ["old", "new"]);
        assert_eq!(blocks[0].ticket, 1);
        assert_eq!(blocks[1].ticket, 2);
    }

    #[test]
    fn room_boundary_splits_same_role_run() {
        let blocks = merge(&[agent(1, "R1", 0, "a"), agent(2, "R2", 0, "b")]);

        // Both land on ticket 0, but in different rooms.
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].ticket, 0);
        assert_eq!(blocks[1].ticket, 0);
        assert_ne!(blocks[0].room, blocks[1].room);
    }

    #[test]
    fn embedded_newlines_are_preserved() {
        let blocks = merge(&[user(1, "R1", 0, "line one\nline two"), user(2, "R1", 1, "three")]);
        assert_eq!(texts(&blocks), ["line one\nline two\nthree"]);
    }

    #[test]
    fn adjacent_blocks_in_a_ticket_never_share_a_role() {
        let blocks = merge(&[
            user(1, "R1", 0, "a"),
            user(2, "R1", 1, "b"),
            agent(3, "R1", 2, "c"),
            user(4, "R1", 3, "d"),
            agent(5, "R1", 4, "e"),
            agent(6, "R1", 5, "f"),
            user(7, "R2", 0, "g"),
            user(8, "R2", 1, "h"),
        ]);

        for pair in blocks.windows(2) {
            if pair[0].same_ticket(&pair[1]) {
                assert_ne!(pair[0].role, pair[1].role);
            }
        }
        assert_eq!(blocks.len(), 5);
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(merge_blocks(&[]).is_empty());
    }
}
