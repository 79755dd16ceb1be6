/// Rolling FIFO window of recently selected workout ids, oldest first.
///
/// One tracker belongs to one plan-generation run; it is never shared
/// between concurrent runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarietyTracker {
    window: usize,
    history: Vec<String>,
}

impl VarietyTracker {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            history: Vec::with_capacity(window + 1),
        }
    }

    pub fn record(&mut self, id: &str) {
        self.history.push(id.to_string());
        if self.history.len() > self.window {
            let excess = self.history.len() - self.window;
            self.history.drain(..excess);
        }
    }

    pub fn snapshot(&self) -> &[String] {
        &self.history
    }

    /// Only valid at the start of a run.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.history.iter().any(|h| h == id)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
