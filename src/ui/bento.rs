//! Bento layout: cards take more grid cells the more they have to show.

use super::page::NoteCard;

pub const SPAN_COL_2: &str = "span-col-2";
pub const SPAN_ROW_2: &str = "span-row-2";
pub const SPAN_BIG: &str = "span-big";
pub const SIZE_CLASSES: [&str; 3] = [SPAN_COL_2, SPAN_ROW_2, SPAN_BIG];

/// Content longer than this widens a card (or, with an image, makes it big).
pub const WIDE_THRESHOLD: usize = 100;
/// Content longer than this makes an image-less card tall.
pub const TALL_THRESHOLD: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Single,
    Wide,
    Tall,
    Big,
}

impl SizeClass {
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            SizeClass::Single => None,
            SizeClass::Wide => Some(SPAN_COL_2),
            SizeClass::Tall => Some(SPAN_ROW_2),
            SizeClass::Big => Some(SPAN_BIG),
        }
    }
}

/// Size for a card with `content_len` characters of Markdown source.
pub fn size_class(content_len: usize, has_image: bool) -> SizeClass {
    if has_image && content_len > WIDE_THRESHOLD {
        SizeClass::Big
    } else if content_len > TALL_THRESHOLD {
        SizeClass::Tall
    } else if content_len > WIDE_THRESHOLD || has_image {
        SizeClass::Wide
    } else {
        SizeClass::Single
    }
}

/// Recompute the size class of every card. Safe to call repeatedly.
pub fn apply_bento_sizes(cards: &mut [NoteCard]) {
    for card in cards.iter_mut() {
        card.classes.remove_all(&SIZE_CLASSES);
        let size = size_class(card.summary.content.chars().count(), card.summary.has_image());
        if let Some(class) = size.class_name() {
            card.classes.add(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteSummary;

    fn card(content_len: usize, image: Option<&str>) -> NoteCard {
        NoteCard::new(NoteSummary {
            id: 1,
            title: String::new(),
            content: "a".repeat(content_len),
            image_url: image.map(str::to_string),
            color: "card-blue".to_string(),
            tags: vec![],
            is_public: false,
            public_id: None,
        })
    }

    #[test]
    fn test_size_class_table() {
        assert_eq!(size_class(50, false), SizeClass::Single);
        assert_eq!(size_class(150, false), SizeClass::Wide);
        assert_eq!(size_class(350, false), SizeClass::Tall);
        assert_eq!(size_class(350, true), SizeClass::Big);
        assert_eq!(size_class(150, true), SizeClass::Big);
        assert_eq!(size_class(50, true), SizeClass::Wide);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(size_class(100, false), SizeClass::Single);
        assert_eq!(size_class(101, false), SizeClass::Wide);
        assert_eq!(size_class(300, false), SizeClass::Wide);
        assert_eq!(size_class(301, false), SizeClass::Tall);
        assert_eq!(size_class(100, true), SizeClass::Wide);
    }

    #[test]
    fn test_empty_image_url_is_no_image() {
        let mut cards = vec![card(50, Some(""))];
        apply_bento_sizes(&mut cards);
        assert_eq!(cards[0].classes.count_of(&SIZE_CLASSES), 0);
    }

    #[test]
    fn test_recompute_never_stacks_classes() {
        let mut cards = vec![card(150, None), card(50, None), card(150, Some("/uploads/a.png"))];
        apply_bento_sizes(&mut cards);
        apply_bento_sizes(&mut cards);
        assert!(cards[0].classes.contains(SPAN_COL_2));
        assert_eq!(cards[1].classes.count_of(&SIZE_CLASSES), 0);
        assert!(cards[2].classes.contains(SPAN_BIG));

        // content grows past the tall threshold
        cards[0].summary.content = "b".repeat(350);
        apply_bento_sizes(&mut cards);
        assert_eq!(cards[0].classes.count_of(&SIZE_CLASSES), 1);
        assert!(cards[0].classes.contains(SPAN_ROW_2));
    }

    #[test]
    fn test_length_counts_characters() {
        // 60 two-byte characters: 120 bytes but only 60 characters
        let mut cards = vec![card(0, None)];
        cards[0].summary.content = "é".repeat(60);
        apply_bento_sizes(&mut cards);
        assert_eq!(cards[0].classes.count_of(&SIZE_CLASSES), 0);
    }
}
