//! The symbols the classification service is trained on.

#[cfg(test)]
#[path = "symbols_test.rs"]
mod symbols_test;

/// A label the service can return or accept as a correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Label on the wire.
    pub code: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Listed in the help overlay as something users can draw.
    pub in_help: bool,
}

pub const SYMBOLS: &[Symbol] = &[
    Symbol { code: "+", name: "Addition", in_help: true },
    Symbol { code: "-", name: "Subtraction", in_help: true },
    Symbol { code: "div", name: "division(/)", in_help: true },
    Symbol { code: "beta", name: "beta", in_help: true },
    Symbol { code: "0", name: "0", in_help: true },
    Symbol { code: "sin", name: "sin", in_help: false },
    Symbol { code: "cos", name: "cos", in_help: false },
];

/// Look up a symbol by its wire label.
#[must_use]
pub fn find(code: &str) -> Option<&'static Symbol> {
    SYMBOLS.iter().find(|s| s.code == code)
}

/// Symbols shown in the help overlay.
pub fn help_entries() -> impl Iterator<Item = &'static Symbol> {
    SYMBOLS.iter().filter(|s| s.in_help)
}
