//! Path mapping between public wiki paths and the upstream API.

/// Maps an incoming wiki path to the upstream API path. Slug lookups
/// rewrite to the upstream's `/slug/{slug}` form; unknown paths pass
/// through with a leading slash.
pub fn map_upstream_path(incoming: &str) -> String {
    if let Some(slug) = incoming.strip_prefix("wiki/pets/") {
        return format!("/wiki/pet/pets/slug/{slug}");
    }
    if let Some(slug) = incoming.strip_prefix("wiki/eggs/") {
        return format!("/wiki/pet/pet-eggs/slug/{slug}");
    }
    match incoming {
        "wiki/pets" => "/wiki/pet/pets".to_string(),
        "wiki/eggs" => "/wiki/pet/pet-eggs".to_string(),
        "rarities" => "/wiki/rarities".to_string(),
        "pet-passives/state-keys" => "/wiki/pet/passives/state-keys".to_string(),
        other => format!("/{other}"),
    }
}

/// Paths whose upstream response never changes within a deployment; these
/// are served from the in-memory response cache after the first fetch.
pub fn is_permanent_cache_path(incoming: &str) -> bool {
    matches!(incoming, "rarities" | "pet-passives/state-keys")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_upstream_paths() {
        assert_eq!(map_upstream_path("wiki/pets"), "/wiki/pet/pets");
        assert_eq!(map_upstream_path("wiki/eggs"), "/wiki/pet/pet-eggs");
        assert_eq!(map_upstream_path("rarities"), "/wiki/rarities");
        assert_eq!(
            map_upstream_path("pet-passives/state-keys"),
            "/wiki/pet/passives/state-keys"
        );
    }

    #[test]
    fn slug_paths_rewrite_to_slug_lookups() {
        assert_eq!(
            map_upstream_path("wiki/pets/mythical-fox"),
            "/wiki/pet/pets/slug/mythical-fox"
        );
        assert_eq!(
            map_upstream_path("wiki/eggs/rare-egg"),
            "/wiki/pet/pet-eggs/slug/rare-egg"
        );
    }

    #[test]
    fn unknown_paths_pass_through() {
        assert_eq!(map_upstream_path("wiki/plants"), "/wiki/plants");
    }

    #[test]
    fn only_static_lookups_are_permanently_cacheable() {
        assert!(is_permanent_cache_path("rarities"));
        assert!(is_permanent_cache_path("pet-passives/state-keys"));
        assert!(!is_permanent_cache_path("wiki/pets"));
    }
}
