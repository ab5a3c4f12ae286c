//! Board Arithmetic
//!
//! Pure helpers for the kanban board: grouping cards into columns and the
//! optimistic splice/renumber logic behind drag-and-drop, kept free of any
//! UI or IPC so it can be tested directly.
//!
//! Conventions mirrored from the server: card sort_order is dense and
//! 0-based within a status; pipeline and status sort_order is 1-based
//! within their parent.

use crate::models::{Card, Pipeline, Status};
use serde::Serialize;
use std::collections::HashMap;

/// One entry of a bulk sort-order update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortEntry {
    pub id: u32,
    pub sort_order: i32,
}

/// Group a pipeline's cards by status, ordered by (sort_order, id) and
/// renumbered to dense 0-based sort_order. The server may hand back
/// duplicate or sparse orders after concurrent edits; normalizing here
/// keeps splice indices and sort_order in lockstep.
pub fn group_cards(cards: Vec<Card>) -> HashMap<u32, Vec<Card>> {
    let mut grouped: HashMap<u32, Vec<Card>> = HashMap::new();
    for card in cards {
        grouped.entry(card.status_id).or_default().push(card);
    }
    for column in grouped.values_mut() {
        column.sort_by_key(|c| (c.sort_order, c.id));
        renumber(column);
    }
    grouped
}

/// Reorder a card within its status: splice out `from`, insert at `to`,
/// renumber the whole column.
pub fn reorder_cards(cards: &[Card], from: usize, to: usize) -> Vec<Card> {
    let mut column = cards.to_vec();
    if from >= column.len() {
        return column;
    }
    let moved = column.remove(from);
    let to = to.min(column.len());
    column.insert(to, moved);
    renumber(&mut column);
    column
}

/// Move a card across statuses. Returns the updated (source, target)
/// columns, both renumbered; the moved card's status_id is rewritten.
pub fn move_card_between(
    source: &[Card],
    target: &[Card],
    from: usize,
    to: usize,
    target_status: u32,
) -> (Vec<Card>, Vec<Card>) {
    let mut source = source.to_vec();
    let mut target = target.to_vec();
    if from >= source.len() {
        return (source, target);
    }
    let mut moved = source.remove(from);
    moved.status_id = target_status;
    let to = to.min(target.len());
    target.insert(to, moved);
    renumber(&mut source);
    renumber(&mut target);
    (source, target)
}

/// Bulk sort payload for a column (ids in display order, 0-based)
pub fn card_sort_payload(cards: &[Card]) -> Vec<SortEntry> {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| SortEntry { id: c.id, sort_order: i as i32 })
        .collect()
}

/// sort_order for a card appended to a column
pub fn next_card_sort_order(cards: &[Card]) -> i32 {
    cards.len() as i32
}

/// Reorder pipelines within a project (1-based sort_order)
pub fn reorder_pipelines(pipelines: &[Pipeline], from: usize, to: usize) -> Vec<Pipeline> {
    let mut list = pipelines.to_vec();
    if from >= list.len() {
        return list;
    }
    let moved = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, moved);
    for (i, p) in list.iter_mut().enumerate() {
        p.sort_order = i as i32 + 1;
    }
    list
}

/// Bulk sort payload for pipelines (1-based)
pub fn pipeline_sort_payload(pipelines: &[Pipeline]) -> Vec<SortEntry> {
    pipelines
        .iter()
        .enumerate()
        .map(|(i, p)| SortEntry { id: p.id, sort_order: i as i32 + 1 })
        .collect()
}

/// 1-based renumbering for an ordered status list, returning only the
/// entries whose sort_order changes. Repairs duplicates and the gaps a
/// delete leaves behind.
pub fn status_order_repairs(statuses: &[Status]) -> Vec<SortEntry> {
    statuses
        .iter()
        .enumerate()
        .filter(|(i, s)| s.sort_order != *i as i32 + 1)
        .map(|(i, s)| SortEntry { id: s.id, sort_order: i as i32 + 1 })
        .collect()
}

fn renumber(cards: &mut [Card]) {
    for (i, card) in cards.iter_mut().enumerate() {
        card.sort_order = i as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(id: u32, status_id: u32, sort_order: i32) -> Card {
        Card {
            id,
            title: format!("Card {}", id),
            description: None,
            status_id,
            user_id: 1,
            sort_order,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn make_pipeline(id: u32, sort_order: i32) -> Pipeline {
        Pipeline {
            id,
            name: format!("Pipeline {}", id),
            color: "#3B82F6".to_string(),
            project_id: 1,
            sort_order,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_group_cards_sorts_and_normalizes() {
        // Sparse and duplicated sort_order, two statuses
        let cards = vec![
            make_card(1, 10, 5),
            make_card(2, 10, 5), // duplicate order, lower id wins the tie
            make_card(3, 10, 0),
            make_card(4, 20, 7),
        ];

        let grouped = group_cards(cards);

        let col = &grouped[&10];
        assert_eq!(col.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(col.iter().map(|c| c.sort_order).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(grouped[&20][0].sort_order, 0);
    }

    #[test]
    fn test_reorder_within_status() {
        let cards = vec![make_card(1, 10, 0), make_card(2, 10, 1), make_card(3, 10, 2)];

        // Drag first card below the last
        let reordered = reorder_cards(&cards, 0, 2);
        assert_eq!(reordered.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        assert_eq!(reordered.iter().map(|c| c.sort_order).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_clamps_target_index() {
        let cards = vec![make_card(1, 10, 0), make_card(2, 10, 1)];
        let reordered = reorder_cards(&cards, 0, 99);
        assert_eq!(reordered.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_move_between_statuses() {
        let source = vec![make_card(1, 10, 0), make_card(2, 10, 1)];
        let target = vec![make_card(3, 20, 0)];

        let (source, target) = move_card_between(&source, &target, 0, 1, 20);

        assert_eq!(source.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(source[0].sort_order, 0);
        assert_eq!(target.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(target[1].status_id, 20);
        assert_eq!(target.iter().map(|c| c.sort_order).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_move_into_empty_status() {
        let source = vec![make_card(1, 10, 0)];
        let (source, target) = move_card_between(&source, &[], 0, 0, 20);
        assert!(source.is_empty());
        assert_eq!(target[0].status_id, 20);
        assert_eq!(target[0].sort_order, 0);
    }

    #[test]
    fn test_card_sort_payload_is_zero_based() {
        let cards = vec![make_card(7, 10, 0), make_card(8, 10, 1)];
        let payload = card_sort_payload(&cards);
        assert_eq!(payload[0], SortEntry { id: 7, sort_order: 0 });
        assert_eq!(payload[1], SortEntry { id: 8, sort_order: 1 });
    }

    fn make_status(id: u32, sort_order: i32) -> Status {
        Status {
            id,
            name: format!("Status {}", id),
            color: "#3B82F6".to_string(),
            pipeline_id: 1,
            sort_order,
            is_collapsed: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_status_repairs_duplicates_and_gaps() {
        // Duplicate order from a concurrent edit plus a gap after a delete
        let statuses = vec![make_status(1, 1), make_status(2, 1), make_status(3, 4)];
        let repairs = status_order_repairs(&statuses);
        assert_eq!(repairs, vec![
            SortEntry { id: 2, sort_order: 2 },
            SortEntry { id: 3, sort_order: 3 },
        ]);
    }

    #[test]
    fn test_status_repairs_empty_for_canonical_order() {
        let statuses = vec![make_status(1, 1), make_status(2, 2), make_status(3, 3)];
        assert!(status_order_repairs(&statuses).is_empty());
    }

    #[test]
    fn test_pipeline_reorder_is_one_based() {
        let pipelines = vec![make_pipeline(1, 1), make_pipeline(2, 2), make_pipeline(3, 3)];

        let reordered = reorder_pipelines(&pipelines, 2, 0);
        assert_eq!(reordered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(reordered.iter().map(|p| p.sort_order).collect::<Vec<_>>(), vec![1, 2, 3]);

        let payload = pipeline_sort_payload(&reordered);
        assert_eq!(payload[0], SortEntry { id: 3, sort_order: 1 });
    }
}
