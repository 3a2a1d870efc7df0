use std::collections::HashMap;

/// The values matched at one parser level, keyed by the entry's index in that level's schema.
///
/// Arguments which were never matched (and have no defaults) are absent rather than empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct LevelResults {
    values: HashMap<usize, Vec<String>>,
    selected: Option<(String, Box<LevelResults>)>,
}

impl LevelResults {
    pub(crate) fn count(&self, index: usize) -> usize {
        self.values.get(&index).map_or(0, Vec::len)
    }

    pub(crate) fn values(&self, index: usize) -> &[String] {
        self.values
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn push(&mut self, index: usize, value: impl Into<String>) {
        self.values.entry(index).or_default().push(value.into());
    }

    /// Descend into the sub-command level.
    pub(crate) fn select(&mut self, command: impl Into<String>) -> &mut LevelResults {
        assert!(
            self.selected.is_none(),
            "internal error - a level may select only one sub-command"
        );
        let (_, child) = self
            .selected
            .insert((command.into(), Box::new(LevelResults::default())));
        child
    }

    pub(crate) fn attach(&mut self, command: impl Into<String>, child: LevelResults) {
        assert!(
            self.selected.is_none(),
            "internal error - a level may select only one sub-command"
        );
        self.selected.replace((command.into(), Box::new(child)));
    }

    pub(crate) fn selected(&self) -> Option<(&str, &LevelResults)> {
        self.selected
            .as_ref()
            .map(|(command, child)| (command.as_str(), child.as_ref()))
    }
}
