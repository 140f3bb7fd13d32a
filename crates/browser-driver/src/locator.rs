//! Script-based role/name element resolution
//!
//! Elements are resolved inside the page: a script walks the candidates
//! for the requested role, computes each one's accessible name, tags the
//! match with a unique data attribute and hands the generated selector
//! back. Subsequent CDP commands then operate on that selector.

use crate::driver::Role;

pub(crate) const ANCHOR_ATTR: &str = "data-signup-runner-anchor";

/// CSS candidates for a role: explicit `[role=...]` plus the HTML
/// elements that carry the role implicitly.
pub(crate) fn role_candidates(role: Role) -> &'static str {
    match role {
        Role::Link => r#"a[href], [role="link"]"#,
        Role::Textbox => {
            r#"input:not([type]), input[type="text"], input[type="password"], input[type="email"], input[type="search"], input[type="tel"], input[type="url"], textarea, [role="textbox"]"#
        }
        Role::Checkbox => r#"input[type="checkbox"], [role="checkbox"]"#,
        Role::Button => {
            r#"button, input[type="submit"], input[type="button"], [role="button"]"#
        }
    }
}

pub(crate) fn anchor_selector(token: &str) -> String {
    format!("[{ANCHOR_ATTR}=\"{token}\"]")
}

/// Build the resolution script for one role/name lookup.
///
/// Accessible name is approximated in document order of preference:
/// aria-label, aria-labelledby, an associated `<label>`, the control's
/// value (submit buttons), visible text, then placeholder. Matching is
/// case-insensitive equality on the normalized name.
pub(crate) fn build_locator_script(role: Role, name: &str, token: &str) -> String {
    format!(
        r#"(() => {{
            const candidates = {candidates};
            const targetName = {name};
            const attr = {attr};
            const token = {token};
            const normalize = (input) => (input || '').trim().replace(/\s+/g, ' ').toLowerCase();
            const labelText = (el) => {{
                if (el.labels && el.labels.length > 0) {{
                    return Array.from(el.labels).map(l => l.textContent || '').join(' ');
                }}
                if (el.id) {{
                    const byFor = document.querySelector('label[for="' + CSS.escape(el.id) + '"]');
                    if (byFor) return byFor.textContent || '';
                }}
                const wrapping = el.closest('label');
                return wrapping ? (wrapping.textContent || '') : '';
            }};
            const computeName = (el) => {{
                const label = el.getAttribute('aria-label');
                if (label && label.trim()) return label;
                const labelledby = el.getAttribute('aria-labelledby');
                if (labelledby) {{
                    return labelledby.split(/\s+/)
                        .map(id => document.getElementById(id))
                        .map(node => node ? (node.textContent || '') : '')
                        .join(' ');
                }}
                const fromLabel = labelText(el);
                if (fromLabel.trim()) return fromLabel;
                if (el.tagName === 'INPUT' && (el.type === 'submit' || el.type === 'button') && el.value) {{
                    return el.value;
                }}
                const text = el.innerText || el.textContent || '';
                if (text.trim()) return text;
                return el.getAttribute('placeholder') || el.title || '';
            }};
            const matches = Array.from(document.querySelectorAll(candidates));
            const match = matches.find(el => normalize(computeName(el)) === normalize(targetName));
            if (!match) {{
                return {{ status: 'not-found' }};
            }}
            match.setAttribute(attr, token);
            return {{ status: 'ok', selector: '[' + attr + '="' + token + '"]' }};
        }})()"#,
        candidates = serde_json::to_string(role_candidates(role)).unwrap(),
        name = serde_json::to_string(name).unwrap(),
        attr = serde_json::to_string(ANCHOR_ATTR).unwrap(),
        token = serde_json::to_string(token).unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_cover_implicit_roles() {
        assert!(role_candidates(Role::Link).contains("a[href]"));
        assert!(role_candidates(Role::Textbox).contains("textarea"));
        assert!(role_candidates(Role::Checkbox).contains(r#"input[type="checkbox"]"#));
        assert!(role_candidates(Role::Button).contains(r#"input[type="submit"]"#));
    }

    #[test]
    fn script_embeds_escaped_name_and_token() {
        let script = build_locator_script(Role::Button, "Sign \"Up\"", "tok-1");
        assert!(script.contains(r#""Sign \"Up\"""#));
        assert!(script.contains(r#""tok-1""#));
        assert!(script.contains(ANCHOR_ATTR));
    }

    #[test]
    fn anchor_selector_uses_attribute_token() {
        assert_eq!(
            anchor_selector("abc"),
            format!("[{ANCHOR_ATTR}=\"abc\"]")
        );
    }
}
