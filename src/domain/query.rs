use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Rows shown per page in the users table
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Live query state for the users table: the search box plus the pager.
///
/// Pages are 1-based. The query itself holds no user data; feed it the
/// current collection with [`UserQuery::run`] and render the returned
/// [`PageView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub search_term: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UserQuery {
    /// Returns the query with a new search term.
    ///
    /// The page is left alone. A term change can strand the pager past the
    /// last page of the narrowed result; that surfaces as an empty
    /// [`PageView`] whose guards disable further navigation.
    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self.clone()
        }
    }

    /// Returns the query moved to the given 1-based page
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Filters and paginates the collection in one pass
    pub fn run(&self, users: &[User]) -> PageView {
        let filtered = filter_users(users, &self.search_term);
        let filtered_count = filtered.len();
        PageView {
            rows: paginate(&filtered, self.page, self.page_size),
            page: self.page,
            page_size: self.page_size,
            filtered_count,
        }
    }
}

/// One rendered page of the users table, with the navigation guard
/// contract the pager buttons key off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub rows: Vec<User>,
    pub page: usize,
    pub page_size: usize,
    pub filtered_count: usize,
}

impl PageView {
    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page * self.page_size < self.filtered_count
    }
}

/// Keeps the users whose name or email contains `term`, case-insensitively.
///
/// An empty term matches everything. No trimming, no tokenization, no
/// diacritic folding; relative order is preserved.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let term_lower = term.to_lowercase();
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&term_lower)
                || u.email.to_lowercase().contains(&term_lower)
        })
        .cloned()
        .collect()
}

/// Returns the 1-based `page` slice of `rows`.
///
/// A page past the end of the collection yields an empty vec. That is the
/// valid "no rows" state, not an error; [`PageView::can_go_next`] is how
/// the caller keeps the pager from walking off the edge.
pub fn paginate(rows: &[User], page: usize, page_size: usize) -> Vec<User> {
    let start = page.saturating_sub(1) * page_size;
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Directory, UserId};

    fn demo_users() -> Vec<User> {
        Directory::demo().users
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let users = demo_users();
        let filtered = filter_users(&users, "");
        assert_eq!(filtered, users);
    }

    #[test]
    fn test_filter_matches_name_case_insensitive() {
        let users = vec![
            User::new(UserId::new(1), "Ravi", "r@x"),
            User::new(UserId::new(2), "Sita", "s@x"),
        ];
        let filtered = filter_users(&users, "ravi");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ravi");
    }

    #[test]
    fn test_filter_matches_email() {
        let users = demo_users();
        let filtered = filter_users(&users, "sita@");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sita");
    }

    #[test]
    fn test_filter_membership_is_sound_and_complete() {
        let users = demo_users();
        let term = "i";
        let filtered = filter_users(&users, term);

        for user in &filtered {
            assert!(
                user.name.to_lowercase().contains(term)
                    || user.email.to_lowercase().contains(term)
            );
        }
        for user in users.iter().filter(|u| !filtered.contains(u)) {
            assert!(
                !user.name.to_lowercase().contains(term)
                    && !user.email.to_lowercase().contains(term)
            );
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let users = demo_users();
        let once = filter_users(&users, "gmail");
        let twice = filter_users(&once, "gmail");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_filter_preserves_order() {
        let users = demo_users();
        let filtered = filter_users(&users, "gmail");
        let ids: Vec<u64> = filtered.iter().map(|u| u.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_paginate_first_page() {
        let users = demo_users();
        let page = paginate(&users, 1, 2);

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Ravi");
        assert_eq!(page[1].name, "Sita");
    }

    #[test]
    fn test_paginate_never_exceeds_page_size() {
        let users = demo_users();
        for page in 1..=4 {
            assert!(paginate(&users, page, 2).len() <= 2);
        }
    }

    #[test]
    fn test_paginate_short_last_page() {
        let users = demo_users();
        let last = paginate(&users, 2, 3);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].name, "John");
    }

    #[test]
    fn test_paginate_past_range_is_empty() {
        let users = demo_users();
        assert!(paginate(&users, 3, 2).is_empty());
        assert!(paginate(&[], 1, 2).is_empty());
    }

    #[test]
    fn test_run_composes_filter_and_paginate() {
        let users = demo_users();
        let view = UserQuery::default().with_term("gmail").with_page(2).run(&users);

        assert_eq!(view.filtered_count, 4);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].name, "Amit");
    }

    #[test]
    fn test_navigation_guards() {
        let users = demo_users();

        let first = UserQuery::default().run(&users);
        assert!(!first.can_go_prev());
        assert!(first.can_go_next());

        let last = UserQuery::default().with_page(2).run(&users);
        assert!(last.can_go_prev());
        assert!(!last.can_go_next());
    }

    #[test]
    fn test_term_change_can_strand_the_pager() {
        let users = demo_users();
        let query = UserQuery::default().with_page(2);

        // Narrowing the search while on page 2 leaves nothing to show;
        // the view is empty, not an error, and next stays disabled
        let view = query.with_term("ravi").run(&users);
        assert!(view.rows.is_empty());
        assert_eq!(view.filtered_count, 1);
        assert!(view.can_go_prev());
        assert!(!view.can_go_next());
    }

    #[test]
    fn test_no_match_view() {
        let users = demo_users();
        let view = UserQuery::default().with_term("nonexistent").run(&users);

        assert!(view.rows.is_empty());
        assert_eq!(view.filtered_count, 0);
        assert!(!view.can_go_prev());
        assert!(!view.can_go_next());
    }
}
