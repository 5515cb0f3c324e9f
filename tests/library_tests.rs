mod common;

#[cfg(test)]
pub mod library_tests {
    use super::common::*;

    use briefshelf::models::{is_saved, toggle};

    #[test]
    fn test_toggle_adds_then_removes() {
        let book = make_book("b1", "Atomic Habits", "James Clear");
        let now = parse_time("2026-03-01 10:00:00+00");

        let list = toggle(Vec::new(), &book, now);
        assert_eq!(list.len(), 1);
        assert!(is_saved(&list, "b1"));

        let list = toggle(list, &book, now);
        assert!(list.is_empty());
        assert!(!is_saved(&list, "b1"));
    }

    #[test]
    fn test_toggle_twice_restores_original_list() {
        let kept = make_book("b2", "Deep Work", "Cal Newport");
        let toggled = make_book("b1", "Atomic Habits", "James Clear");
        let now = parse_time("2026-03-01 10:00:00+00");

        let original = toggle(Vec::new(), &kept, now);

        let list = toggle(original.clone(), &toggled, now);
        let list = toggle(list, &toggled, now);

        assert_eq!(list, original);
    }

    #[test]
    fn test_saved_list_never_holds_duplicate_ids() {
        let a = make_book("b1", "Atomic Habits", "James Clear");
        let b = make_book("b2", "Deep Work", "Cal Newport");
        let now = parse_time("2026-03-01 10:00:00+00");

        let mut list = Vec::new();
        for book in [&a, &b, &a, &a, &b, &a] {
            list = toggle(list, book, now);

            let mut ids: Vec<_> = list.iter().map(|r| r.book_id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), list.len());
        }
    }

    #[test]
    fn test_toggle_snapshots_the_book() {
        let book = make_book("b1", "Atomic Habits", "James Clear");
        let now = parse_time("2026-03-01 10:00:00+00");

        let list = toggle(Vec::new(), &book, now);

        assert_eq!(list[0].book, book);
        assert_eq!(list[0].saved_at, now);
    }
}
