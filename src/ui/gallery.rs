//! Gallery selection: one card is shown expanded at a time.
//!
//! In gallery mode a click on a collapsed card only expands it. A click on the
//! card that is already expanded goes through to the modal. Outside gallery
//! mode every click opens the modal.

use super::page::NoteCard;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClick {
    /// The click was consumed to expand the card.
    Expanded,
    /// The click should open the detail modal.
    OpenDetail,
}

pub fn active_index(cards: &[NoteCard]) -> Option<usize> {
    cards.iter().position(|c| c.classes.contains(ACTIVE_CLASS))
}

/// Mark the first card active unless some card already is.
pub fn init_gallery(cards: &mut [NoteCard]) {
    if active_index(cards).is_none() {
        if let Some(first) = cards.first_mut() {
            first.classes.add(ACTIVE_CLASS);
        }
    }
}

/// Make `index` the only active card.
pub fn activate(cards: &mut [NoteCard], index: usize) {
    if index >= cards.len() {
        return;
    }
    for (i, card) in cards.iter_mut().enumerate() {
        card.classes.set(ACTIVE_CLASS, i == index);
    }
}

/// Decide what a click on `cards[index]` does.
pub fn dispatch_click(cards: &mut [NoteCard], index: usize, gallery_mode: bool) -> CardClick {
    if !gallery_mode || index >= cards.len() {
        return CardClick::OpenDetail;
    }
    if cards[index].classes.contains(ACTIVE_CLASS) {
        return CardClick::OpenDetail;
    }
    activate(cards, index);
    CardClick::Expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteSummary;

    fn cards(n: u64) -> Vec<NoteCard> {
        (1..=n)
            .map(|id| {
                NoteCard::new(NoteSummary {
                    id,
                    title: format!("n{}", id),
                    content: String::new(),
                    image_url: None,
                    color: "card-blue".to_string(),
                    tags: vec![],
                    is_public: false,
                    public_id: None,
                })
            })
            .collect()
    }

    fn active_count(cards: &[NoteCard]) -> usize {
        cards.iter().filter(|c| c.classes.contains(ACTIVE_CLASS)).count()
    }

    #[test]
    fn test_init_activates_first() {
        let mut cards = cards(3);
        init_gallery(&mut cards);
        assert_eq!(active_index(&cards), Some(0));
        assert_eq!(active_count(&cards), 1);
    }

    #[test]
    fn test_init_keeps_existing_selection() {
        let mut cards = cards(3);
        activate(&mut cards, 2);
        init_gallery(&mut cards);
        init_gallery(&mut cards);
        assert_eq!(active_index(&cards), Some(2));
        assert_eq!(active_count(&cards), 1);
    }

    #[test]
    fn test_init_with_no_cards() {
        let mut cards: Vec<NoteCard> = vec![];
        init_gallery(&mut cards);
        assert!(cards.is_empty());
    }

    #[test]
    fn test_click_inactive_expands_without_opening() {
        let mut cards = cards(3);
        init_gallery(&mut cards);
        assert_eq!(dispatch_click(&mut cards, 1, true), CardClick::Expanded);
        assert_eq!(active_index(&cards), Some(1));
        assert_eq!(active_count(&cards), 1);
    }

    #[test]
    fn test_click_active_opens() {
        let mut cards = cards(3);
        init_gallery(&mut cards);
        assert_eq!(dispatch_click(&mut cards, 0, true), CardClick::OpenDetail);
        assert_eq!(active_index(&cards), Some(0));
    }

    #[test]
    fn test_outside_gallery_every_click_opens() {
        let mut cards = cards(2);
        assert_eq!(dispatch_click(&mut cards, 1, false), CardClick::OpenDetail);
        assert_eq!(active_count(&cards), 0);
    }

    #[test]
    fn test_reinit_does_not_change_dispatch() {
        let mut cards = cards(2);
        init_gallery(&mut cards);
        init_gallery(&mut cards);
        assert_eq!(dispatch_click(&mut cards, 1, true), CardClick::Expanded);
        assert_eq!(dispatch_click(&mut cards, 1, true), CardClick::OpenDetail);
    }
}
