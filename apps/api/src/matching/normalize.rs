/// Lower-cased view of CV or job text used for keyword scanning.
///
/// Every keyword table in the matcher is written in lower case, so a plain
/// substring check against this view is the whole matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Keywords from `table` that occur in this text, in table order.
    pub fn present<'a>(&'a self, table: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        table.iter().copied().filter(move |kw| self.contains(kw))
    }
}
