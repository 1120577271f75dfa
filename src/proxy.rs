//! Outbound proxy resolution from the process environment.

use std::env;

/// Environment variables consulted, in precedence order.
const PROXY_VARS: [&str; 4] = ["https_proxy", "HTTPS_PROXY", "http_proxy", "HTTP_PROXY"];

/// Default variable lookup: the process environment.
pub(crate) fn env_lookup(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Resolve the outbound proxy URL using the given variable lookup.
///
/// The first non-empty variable wins; values are trimmed before use.
/// Returns `None` when none are set, meaning a direct connection. The
/// lookup is injectable so tests can supply their own environment instead
/// of mutating process-wide state.
pub(crate) fn resolve_with<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    PROXY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::resolve_with;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn lowercase_https_proxy_wins() {
        let resolved = resolve_with(lookup(&[
            ("https_proxy", "http://lower-https:8080"),
            ("HTTPS_PROXY", "http://upper-https:8080"),
            ("http_proxy", "http://lower-http:8080"),
            ("HTTP_PROXY", "http://upper-http:8080"),
        ]));
        assert_eq!(resolved.as_deref(), Some("http://lower-https:8080"));
    }

    #[test]
    fn falls_through_https_to_http() {
        let resolved = resolve_with(lookup(&[
            ("http_proxy", "http://lower-http:8080"),
            ("HTTP_PROXY", "http://upper-http:8080"),
        ]));
        assert_eq!(resolved.as_deref(), Some("http://lower-http:8080"));
    }

    #[test]
    fn uppercase_used_when_lowercase_missing() {
        let resolved = resolve_with(lookup(&[("HTTPS_PROXY", "socks5://upstream:1080")]));
        assert_eq!(resolved.as_deref(), Some("socks5://upstream:1080"));
    }

    #[test]
    fn empty_values_are_skipped() {
        let resolved = resolve_with(lookup(&[
            ("https_proxy", ""),
            ("HTTPS_PROXY", "   "),
            ("HTTP_PROXY", "http://fallback:3128"),
        ]));
        assert_eq!(resolved.as_deref(), Some("http://fallback:3128"));
    }

    #[test]
    fn padded_values_are_trimmed() {
        let resolved = resolve_with(lookup(&[("https_proxy", "  http://padded:8080  ")]));
        assert_eq!(resolved.as_deref(), Some("http://padded:8080"));
    }

    #[test]
    fn no_variables_means_direct() {
        assert_eq!(resolve_with(lookup(&[])), None);
    }
}
