/// Hands out `prefix + zero-padded counter` ids, e.g. `P008` or `ORD-012`.
///
/// The counter only moves forward, so an id freed by a delete is never
/// handed out again.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    last: u32,
}

impl IdSequence {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, last: 0 }
    }

    /// Continues after the highest of `existing.len()` and any numeric suffix
    /// already in use under this prefix.
    pub fn after_existing<'a>(prefix: &'static str, existing: impl ExactSizeIterator<Item = &'a str>) -> Self {
        let count = existing.len() as u32;
        let highest = existing
            .filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        Self {
            prefix,
            last: count.max(highest),
        }
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("{}{:03}", self.prefix, self.last)
    }
}
