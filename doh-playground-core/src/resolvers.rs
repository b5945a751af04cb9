//! Static registry of public DoH resolvers with a JSON API.

use crate::types::Resolver;

/// Known resolvers. The first entry is the default.
pub const RESOLVERS: &[Resolver] = &[
    Resolver {
        name: "Cloudflare",
        url: "https://cloudflare-dns.com/dns-query",
    },
    Resolver {
        name: "Google",
        url: "https://dns.google/resolve",
    },
];

/// The resolver used when none (or an unknown one) is selected.
pub fn default_resolver() -> &'static Resolver {
    &RESOLVERS[0]
}

/// Find a resolver by its display name (exact match).
pub fn find_resolver(name: &str) -> Option<&'static Resolver> {
    RESOLVERS.iter().find(|r| r.name == name)
}

/// Find a resolver by name, falling back to the default one.
pub fn resolver_or_default(name: &str) -> &'static Resolver {
    find_resolver(name).unwrap_or_else(|| {
        log::debug!("Unknown resolver \"{name}\", using {}", default_resolver().name);
        default_resolver()
    })
}

/// Position of a resolver in [`RESOLVERS`], for select widgets.
pub fn resolver_index(name: &str) -> usize {
    RESOLVERS.iter().position(|r| r.name == name).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cloudflare() {
        assert_eq!(default_resolver().name, "Cloudflare");
    }

    #[test]
    fn test_find_resolver() {
        assert_eq!(
            find_resolver("Google").map(|r| r.url),
            Some("https://dns.google/resolve")
        );
        assert!(find_resolver("google").is_none());
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        assert_eq!(resolver_or_default("Nope"), default_resolver());
        assert_eq!(resolver_index("Nope"), 0);
        assert_eq!(resolver_index("Google"), 1);
    }

    #[test]
    fn test_urls_are_https() {
        for resolver in RESOLVERS {
            assert!(url::Url::parse(resolver.url).is_ok_and(|u| u.scheme() == "https"));
        }
    }
}
