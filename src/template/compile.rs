use std::collections::BTreeMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A pattern split into literal segments with empty slots where placeholders
/// were.
///
/// Segments always alternate literal/slot and end with a literal, so a
/// pattern with `k` placeholders compiles to `2k + 1` segments and slot
/// indices are always odd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    segments: Vec<String>,
    slots: BTreeMap<String, Vec<usize>>,
}

impl CompiledTemplate {
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Variable name to the segment indices it fills, left to right.
    #[must_use]
    pub const fn slots(&self) -> &BTreeMap<String, Vec<usize>> {
        &self.slots
    }

    #[must_use]
    pub fn fills(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Writes each value into every slot of its variable and joins the
    /// segments. Slots without a value render as empty text.
    #[must_use]
    pub fn render(&self, values: &BTreeMap<String, String>) -> String {
        let mut segments = self.segments.clone();
        for (name, value) in values {
            let Some(indices) = self.slots.get(name) else {
                continue;
            };
            for idx in indices {
                if let Some(slot) = segments.get_mut(*idx) {
                    slot.clone_from(value);
                }
            }
        }
        segments.concat()
    }
}

/// Compiles `pattern` into literal segments and placeholder slots.
///
/// Placeholder names are taken verbatim from between the delimiters (no
/// trimming, empty names allowed). An opening `{{` with no closing `}}` is
/// kept as literal text.
#[must_use]
pub fn compile(pattern: &str) -> CompiledTemplate {
    let mut segments = Vec::new();
    let mut slots: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut rest = pattern;

    while let Some((before, name, after)) = next_placeholder(rest) {
        segments.push(before.to_owned());
        slots
            .entry(name.to_owned())
            .or_default()
            .push(segments.len());
        segments.push(String::new());
        rest = after;
    }
    segments.push(rest.to_owned());

    CompiledTemplate { segments, slots }
}

/// Name of the first placeholder in `input`, if any.
#[must_use]
pub fn first_placeholder(input: &str) -> Option<&str> {
    next_placeholder(input).map(|(_, name, _)| name)
}

fn next_placeholder(input: &str) -> Option<(&str, &str, &str)> {
    let start = input.find(OPEN)?;
    let (before, opened) = input.split_at(start);
    let inner = opened.strip_prefix(OPEN)?;
    let end = inner.find(CLOSE)?;
    let (name, closed) = inner.split_at(end);
    let after = closed.strip_prefix(CLOSE)?;
    Some((before, name, after))
}
