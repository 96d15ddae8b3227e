// src/utils/pagination.rs

/// Number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=` query parameter, extracted by `utils::extract`.
///
/// Kept as a raw string so a non-numeric value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Returns the 1-based `page` of `items`, `page_size` items at a time.
///
/// Pages past the end, and pages below 1, are empty rather than an error.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    if page < 1 || page_size == 0 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|index| index.checked_mul(page_size));

    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_holds_page_size_items() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[10..20]);
    }

    #[test]
    fn last_page_is_clipped() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 3, 10), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let items = numbers(25);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, i64::MAX, 10).is_empty());
        assert!(paginate::<usize>(&[], 1, 10).is_empty());
    }

    #[test]
    fn non_positive_pages_are_empty() {
        let items = numbers(5);
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, -3, 10).is_empty());
    }

    #[test]
    fn every_page_matches_its_window() {
        let items = numbers(47);
        for page in 1..=6_i64 {
            let slice = paginate(&items, page, QUESTIONS_PER_PAGE);
            assert!(slice.len() <= QUESTIONS_PER_PAGE);
            let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
            let expected: Vec<usize> = items.iter().copied().skip(start).take(QUESTIONS_PER_PAGE).collect();
            assert_eq!(slice, expected.as_slice());
        }
    }

    #[test]
    fn page_param_defaults_to_one() {
        assert_eq!(PageParams::default().page(), 1);
        assert_eq!(PageParams { page: Some("abc".into()) }.page(), 1);
        assert_eq!(PageParams { page: Some("3".into()) }.page(), 3);
        assert_eq!(PageParams { page: Some("0".into()) }.page(), 0);
    }
}
