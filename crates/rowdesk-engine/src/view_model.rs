use rowdesk_types::{Record, SortDirection, SortKey, ViewState};
use serde::Serialize;

/// One computed page of the record table.
///
/// Derived from the full record set and a `ViewState`; never cached across
/// parameter changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult {
    pub visible_records: Vec<Record>,
    pub total_items: usize,
    pub total_pages: usize,
    /// `view.current_page` clamped into `[1, total_pages]`.
    pub current_page: usize,
}

/// Keep records whose name contains `term`, ignoring case.
///
/// An empty term matches everything. The term is used as given (not trimmed).
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by `key`, then reverse for descending order.
///
/// Descending is the exact inverse of ascending, so equal keys come out in
/// reversed relative order as well.
pub fn sort_records(records: &mut [&Record], key: SortKey, dir: SortDirection) {
    match key {
        SortKey::Id => records.sort_by_key(|r| r.id),
        SortKey::Name => records.sort_by_cached_key(|r| r.name.to_lowercase()),
    }

    if dir == SortDirection::Desc {
        records.reverse();
    }
}

/// `ceil(items / page_size)`, never less than 1.
pub fn total_pages(items: usize, page_size: usize) -> usize {
    items.div_ceil(page_size.max(1)).max(1)
}

/// Filter, sort and slice `records` for `view`.
pub fn compute_page(records: &[Record], view: &ViewState) -> PageResult {
    let page_size = view.page_size.max(1);

    let mut filtered = filter_records(records, &view.search_term);
    sort_records(&mut filtered, view.sort_by, view.sort_dir);

    let total_items = filtered.len();
    let total_pages = total_pages(total_items, page_size);
    let current_page = view.current_page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let visible_records = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    PageResult {
        visible_records,
        total_items,
        total_pages,
        current_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(n: i64) -> Vec<Record> {
        (1..=n).map(|i| Record::new(i, format!("Record {}", i))).collect()
    }

    fn view(page: usize) -> ViewState {
        ViewState {
            current_page: page,
            ..ViewState::default()
        }
    }

    #[test]
    fn test_first_page_of_seed() {
        let records = seeded(1000);
        let page = compute_page(&records, &view(1));

        assert_eq!(page.total_items, 1000);
        assert_eq!(page.total_pages, 100);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.visible_records.len(), 10);
        assert_eq!(page.visible_records[0].name, "Record 1");
        assert_eq!(page.visible_records[9].name, "Record 10");
    }

    #[test]
    fn test_last_page_is_partial() {
        let records = seeded(23);
        let page = compute_page(&records, &view(3));

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.visible_records.len(), 3);
        assert_eq!(page.visible_records[0].name, "Record 21");
    }

    #[test]
    fn test_page_beyond_range_is_clamped() {
        let records = seeded(15);
        let page = compute_page(&records, &view(9));

        assert_eq!(page.current_page, 2);
        assert_eq!(page.visible_records.len(), 5);
    }

    #[test]
    fn test_page_zero_is_clamped_to_first() {
        let records = seeded(15);
        let page = compute_page(&records, &view(0));

        assert_eq!(page.current_page, 1);
        assert_eq!(page.visible_records[0].name, "Record 1");
    }

    #[test]
    fn test_empty_record_set_has_one_page() {
        let page = compute_page(&[], &view(4));

        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(page.visible_records.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![
            Record::new(1, "Alpha"),
            Record::new(2, "bravo"),
            Record::new(3, "ALPHABET"),
            Record::new(4, "Charlie"),
        ];
        let filtered = filter_records(&records, "alPHa");
        let ids: Vec<i64> = filtered.iter().map(|r| r.id.get()).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let records = vec![Record::new(1, "Record 1"), Record::new(2, "Record1")];
        let filtered = filter_records(&records, "d 1");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.get(), 1);
    }

    #[test]
    fn test_search_record_1_matches_prefixes() {
        let records = seeded(1000);
        let mut v = view(1);
        v.search_term = "record 1".to_string();
        let page = compute_page(&records, &v);

        // 1, 10-19, 100-199, 1000
        assert_eq!(page.total_items, 1 + 10 + 100 + 1);
        assert_eq!(page.total_pages, 12);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let records = vec![
            Record::new(1, "banana"),
            Record::new(2, "Apple"),
            Record::new(3, "cherry"),
        ];
        let mut refs = filter_records(&records, "");
        sort_records(&mut refs, SortKey::Name, SortDirection::Asc);
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_name_sort_is_lexicographic_not_numeric() {
        let records = seeded(12);
        let mut refs = filter_records(&records, "");
        sort_records(&mut refs, SortKey::Name, SortDirection::Asc);
        let ids: Vec<i64> = refs.iter().take(5).map(|r| r.id.get()).collect();

        assert_eq!(ids, vec![1, 10, 11, 12, 2]);
    }

    #[test]
    fn test_equal_keys_keep_filtered_order_ascending() {
        let records = vec![
            Record::new(5, "same"),
            Record::new(2, "SAME"),
            Record::new(9, "Same"),
        ];
        let mut refs = filter_records(&records, "");
        sort_records(&mut refs, SortKey::Name, SortDirection::Asc);
        let ids: Vec<i64> = refs.iter().map(|r| r.id.get()).collect();

        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_descending_is_exact_inverse_including_ties() {
        let records = vec![
            Record::new(5, "same"),
            Record::new(1, "alpha"),
            Record::new(2, "SAME"),
            Record::new(9, "Same"),
        ];

        let mut asc = filter_records(&records, "");
        sort_records(&mut asc, SortKey::Name, SortDirection::Asc);
        let mut desc = filter_records(&records, "");
        sort_records(&mut desc, SortKey::Name, SortDirection::Desc);

        let asc_ids: Vec<i64> = asc.iter().map(|r| r.id.get()).collect();
        let mut desc_ids: Vec<i64> = desc.iter().map(|r| r.id.get()).collect();
        desc_ids.reverse();

        assert_eq!(asc_ids, vec![1, 5, 2, 9]);
        assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn test_id_sort_descending_first_page() {
        let records = seeded(1000);
        let mut v = view(1);
        v.sort_dir = SortDirection::Desc;
        let page = compute_page(&records, &v);

        assert_eq!(page.visible_records[0].id.get(), 1000);
        assert_eq!(page.visible_records[9].id.get(), 991);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }
}
