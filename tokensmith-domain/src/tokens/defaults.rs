//! The built-in token set a fresh store starts from and `reset` restores.

use crate::tokens::types::{TokenMap, TokenSet};

fn map(entries: &[(&str, &str)]) -> TokenMap {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub fn default_token_set() -> TokenSet {
    TokenSet {
        colors: map(&[
            ("primary", "#2563eb"),
            ("secondary", "#7c3aed"),
            ("success", "#059669"),
            ("warning", "#d97706"),
            ("danger", "#dc2626"),
            ("gray-50", "#f9fafb"),
            ("gray-100", "#f3f4f6"),
            ("gray-200", "#e5e7eb"),
            ("gray-300", "#d1d5db"),
            ("gray-400", "#9ca3af"),
            ("gray-500", "#6b7280"),
            ("gray-600", "#4b5563"),
            ("gray-700", "#374151"),
            ("gray-800", "#1f2937"),
            ("gray-900", "#111827"),
        ]),
        spacing: map(&[
            ("xs", "0.25rem"),
            ("s", "0.5rem"),
            ("m", "1rem"),
            ("l", "1.5rem"),
            ("xl", "2rem"),
            ("2xl", "3rem"),
        ]),
        typography: map(&[
            ("xs", "0.75rem"),
            ("s", "0.875rem"),
            ("m", "1rem"),
            ("l", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("3xl", "1.875rem"),
            ("4xl", "2.25rem"),
        ]),
        font_families: map(&[
            (
                "primary",
                "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            (
                "monospace",
                "'JetBrains Mono', 'Fira Code', 'Courier New', monospace",
            ),
        ]),
        radius: map(&[
            ("none", "0px"),
            ("xs", "2px"),
            ("s", "4px"),
            ("m", "8px"),
            ("l", "12px"),
            ("xl", "16px"),
            ("2xl", "24px"),
        ]),
        shadows: map(&[
            ("xs", "0 1px 2px rgba(0, 0, 0, 0.05)"),
            ("s", "0 1px 3px rgba(0, 0, 0, 0.1), 0 1px 2px rgba(0, 0, 0, 0.06)"),
            ("m", "0 4px 6px rgba(0, 0, 0, 0.1), 0 2px 4px rgba(0, 0, 0, 0.06)"),
            ("l", "0 10px 15px rgba(0, 0, 0, 0.1), 0 4px 6px rgba(0, 0, 0, 0.05)"),
            ("xl", "0 20px 25px rgba(0, 0, 0, 0.1), 0 10px 10px rgba(0, 0, 0, 0.04)"),
        ]),
        transitions: map(&[
            ("fast", "all 150ms ease-in-out"),
            ("normal", "all 300ms ease-in-out"),
            ("slow", "all 500ms ease-in-out"),
        ]),
    }
}
