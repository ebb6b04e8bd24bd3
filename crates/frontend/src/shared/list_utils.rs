//! Search and sort helpers for the list sections
use std::cmp::Ordering;

/// Filters shorter than this show everything
pub const MIN_FILTER_LEN: usize = 3;

pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

fn is_active_filter(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Case-insensitive substring test used by [`Searchable`] impls
pub fn contains_ci(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.trim().to_lowercase())
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_active_filter(filter) {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.1.cmp(&other.1),
                _ => self.0.cmp(other.0),
            }
        }
    }

    #[test]
    fn test_short_filter_keeps_everything() {
        let rows = vec![Row("Cimento", 1), Row("Tinta", 2)];
        assert_eq!(filter_list(rows, "ci").len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![Row("Cimento CP-II", 1), Row("Tinta", 2)];
        assert_eq!(filter_list(rows, "CIME"), vec![Row("Cimento CP-II", 1)]);
    }

    #[test]
    fn test_sort_both_directions() {
        let mut rows = vec![Row("b", 2), Row("a", 3), Row("c", 1)];
        sort_list(&mut rows, "qty", true);
        assert_eq!(rows[0], Row("c", 1));
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0], Row("c", 1));
        assert_eq!(rows[2], Row("a", 3));
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("qty", "qty", true), " ▲");
        assert_eq!(get_sort_indicator("qty", "qty", false), " ▼");
        assert_eq!(get_sort_indicator("qty", "name", true), " ⇅");
    }
}
