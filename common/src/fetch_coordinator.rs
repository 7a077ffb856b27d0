//! Cache keys and fetch suppression for paginated list data.

/// Value-identity cache key for one page of list results: an ordered tuple
/// of every field that contributes to the fetch. Tag lists are flattened to
/// sorted, comma-joined strings so reselecting the same tags in a different
/// order compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    scope: &'static str,
    parts: Vec<String>,
}

impl QueryKey {
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            parts: Vec::new(),
        }
    }

    pub fn part(mut self, value: impl ToString) -> Self {
        self.parts.push(value.to_string());
        self
    }

    pub fn tag_part(mut self, tags: &[String]) -> Self {
        let mut sorted = tags.to_vec();
        sorted.sort();
        self.parts.push(sorted.join(","));
        self
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scope)?;
        for part in &self.parts {
            write!(f, ":{}", part)?;
        }
        Ok(())
    }
}

/// What to do for a given cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    /// First evaluation and the key matches the server-rendered initial
    /// data: reuse it, do not issue the duplicate request.
    ReuseInitial,
    /// Key is value-equal to the last planned one (identity churn only).
    ReuseCurrent,
    Fetch,
}

/// Decides when a list fetch is actually needed. One instance per mounted
/// list page, created with the key computed from the server-rendered data.
#[derive(Debug, Clone)]
pub struct FetchCoordinator {
    initial_key: QueryKey,
    last_key: Option<QueryKey>,
}

impl FetchCoordinator {
    pub fn new(initial_key: QueryKey) -> Self {
        Self {
            initial_key,
            last_key: None,
        }
    }

    pub fn plan(&mut self, key: &QueryKey) -> FetchPlan {
        if self.last_key.as_ref() == Some(key) {
            return FetchPlan::ReuseCurrent;
        }
        let first = self.last_key.is_none();
        self.last_key = Some(key.clone());
        if first && *key == self.initial_key {
            FetchPlan::ReuseInitial
        } else {
            FetchPlan::Fetch
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, rarities: &[&str], page: u32) -> QueryKey {
        QueryKey::new("pets")
            .part(page)
            .part(20)
            .part(name)
            .tag_part(&rarities.iter().map(|r| r.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn reordered_tags_produce_equal_keys() {
        assert_eq!(key("", &["Rare", "Epic"], 1), key("", &["Epic", "Rare"], 1));
        assert_ne!(key("", &["Rare"], 1), key("", &["Epic"], 1));
    }

    #[test]
    fn first_plan_with_matching_key_reuses_initial_data() {
        let initial = key("", &["Common", "Rare"], 3);
        let mut coordinator = FetchCoordinator::new(initial.clone());
        assert_eq!(coordinator.plan(&initial), FetchPlan::ReuseInitial);
        // identity churn with equal value stays suppressed
        assert_eq!(coordinator.plan(&initial.clone()), FetchPlan::ReuseCurrent);
    }

    #[test]
    fn first_plan_with_different_key_fetches() {
        let mut coordinator = FetchCoordinator::new(key("", &[], 1));
        assert_eq!(coordinator.plan(&key("fox", &[], 1)), FetchPlan::Fetch);
    }

    #[test]
    fn value_change_fetches_then_settles() {
        let initial = key("", &[], 1);
        let mut coordinator = FetchCoordinator::new(initial.clone());
        assert_eq!(coordinator.plan(&initial), FetchPlan::ReuseInitial);
        let changed = key("fox", &[], 1);
        assert_eq!(coordinator.plan(&changed), FetchPlan::Fetch);
        assert_eq!(coordinator.plan(&changed), FetchPlan::ReuseCurrent);
    }

    #[test]
    fn display_joins_scope_and_parts() {
        assert_eq!(key("fox", &["Rare"], 2).to_string(), "pets:2:20:fox:Rare");
    }
}
