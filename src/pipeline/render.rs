//! Section renderer: turn each ticket's blocks into question/answer text.

use crate::model::{Block, Labels, Section};

/// Rendered sections plus the number of tickets that were too short to render.
#[derive(Debug, Default)]
pub struct Rendered {
    pub sections: Vec<Section>,
    pub dropped: usize,
}

/// Group merged blocks by `(room, ticket)`, in order of first appearance.
///
/// Blocks from one ticket are always contiguous after merging, so a
/// linear split is enough.
pub fn tickets(blocks: &[Block]) -> impl Iterator<Item = &[Block]> {
    blocks.chunk_by(Block::same_ticket)
}

/// Render one section per ticket with at least two blocks.
///
/// The first block is the question, the second the answer, and the rest are
/// numbered exchanges. Question numbers are global and consecutive: a dropped
/// ticket does not use one up.
pub fn render_sections(blocks: &[Block], labels: &Labels) -> Rendered {
    let mut rendered = Rendered::default();
    let mut number = 0;

    for ticket in tickets(blocks) {
        let [question, answer, exchanges @ ..] = ticket else {
            let first = &ticket[0];
            tracing::debug!(room = %first.room, ticket = first.ticket, "dropped ticket with a single block");
            rendered.dropped += 1;
            continue;
        };

        number += 1;
        let mut lines = vec![
            format!("{}{number}: {}", labels.question, question.text),
            format!("{}: {}", labels.answer, answer.text),
        ];
        lines.extend(
            exchanges
                .iter()
                .enumerate()
                .map(|(i, block)| format!("{}{}: {}", labels.exchange, i + 1, block.text)),
        );

        rendered.sections.push(Section {
            number,
            room: question.room.clone(),
            ticket: question.ticket,
            text: lines.join("\n"),
        });
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Role, RoomId};

    fn block(room: &str, ticket: u32, role: Role, text: &str) -> Block {
        Block {
            room: RoomId::new(room),
            ticket,
            role,
            text: text.into(),
            messages: 1,
        }
    }

    fn texts(rendered: &Rendered) -> Vec<&str> {
        rendered.sections.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn question_and_answer_only() {
        let blocks = [
            block("R1", 1, Role::User, "hi"),
            block("R1", 1, Role::Agent, "hello"),
        ];

        let rendered = render_sections(&blocks, &Labels::english());

        assert_eq!(texts(&rendered), ["question1: hi\nanswer: hello"]);
        assert_eq!(rendered.dropped, 0);
    }

    #[test]
    fn exchanges_are_numbered_from_one() {
        let blocks = [
            block("R1", 1, Role::User, "q"),
            block("R1", 1, Role::Agent, "a"),
            block("R1", 1, Role::User, "x"),
            block("R1", 1, Role::Agent, "y"),
        ];

        let rendered = render_sections(&blocks, &Labels::english());

        assert_eq!(
            texts(&rendered),
            ["question1: q\nanswer: a\nexchange1: x\nexchange2: y"]
        );
    }

    #[test]
    fn single_block_tickets_are_dropped_and_numbering_stays_consecutive() {
        let blocks = [
            block("R1", 0, Role::Agent, "welcome"),
            block("R1", 1, Role::User, "q1"),
            block("R1", 1, Role::Agent, "a1"),
            block("R1", 2, Role::User, "unanswered"),
            block("R2", 1, Role::User, "q2"),
            block("R2", 1, Role::Agent, "a2"),
        ];

        let rendered = render_sections(&blocks, &Labels::english());

        assert_eq!(
            texts(&rendered),
            ["question1: q1\nanswer: a1", "question2: q2\nanswer: a2"]
        );
        let numbers: Vec<u32> = rendered.sections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, [1, 2]);
        assert_eq!(rendered.dropped, 2);
    }

    #[test]
    fn answer_only_ticket_zero_renders_when_it_has_two_blocks() {
        // A leading agent message followed by a question inside the gap
        // keeps the whole exchange on ticket 0.
        let blocks = [
            block("R1", 0, Role::Agent, "welcome"),
            block("R1", 0, Role::User, "thanks"),
        ];

        let rendered = render_sections(&blocks, &Labels::english());

        assert_eq!(texts(&rendered), ["question1: welcome\nanswer: thanks"]);
        assert_eq!(rendered.sections[0].ticket, 0);
    }

    #[test]
    fn groups_by_room_and_ticket() {
        let blocks = [
            block("R1", 1, Role::User, "a"),
            block("R2", 1, Role::Agent, "b"),
        ];

        let groups: Vec<usize> = tickets(&blocks).map(<[Block]>::len).collect();
        assert_eq!(groups, [1, 1]);
    }

    #[test]
    fn no_blocks_render_nothing() {
        let rendered = render_sections(&[], &Labels::english());
        assert!(rendered.sections.is_empty());
        assert_eq!(rendered.dropped, 0);
    }
}
