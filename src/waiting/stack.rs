#[cfg(test)]
#[path = "stack_tests.rs"]
mod stack_tests;

/// Indices into a reading sequence whose values are strictly decreasing
/// from bottom to top.
///
/// An index stays on the stack until a later, strictly greater reading
/// shows up; at that point the distance between the two is its wait.
#[derive(Debug, Default)]
pub struct MonotonicStack {
    indices: Vec<usize>,
}

impl MonotonicStack {
    /// Stack with room for `n` indices, the depth reached on strictly decreasing input.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            indices: Vec::with_capacity(n),
        }
    }

    /// Index on top of the stack, the most recent day still waiting.
    pub fn peek(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Indices still waiting, bottom to top.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Resolve every waiting index that `values[i]` is strictly warmer than,
    /// recording its wait in `waits`, then push `i`.
    ///
    /// Equal readings do not resolve each other.
    pub fn settle<T: PartialOrd>(&mut self, i: usize, values: &[T], waits: &mut [usize]) {
        let v = &values[i];
        while let Some(top) = self.peek() {
            if *v > values[top] {
                self.indices.pop();
                waits[top] = i - top;
            } else {
                break;
            }
        }
        self.indices.push(i);
    }
}

/// For each reading, the number of positions until a strictly greater one,
/// or 0 if none follows.
///
/// Single pass over `values`; every index is pushed once and popped at most
/// once. Empty input gives empty output.
pub fn waiting_days<T: PartialOrd>(values: &[T]) -> Vec<usize> {
    let mut waits = vec![0; values.len()];
    let mut stack = MonotonicStack::with_capacity(values.len());

    for i in 0..values.len() {
        stack.settle(i, values, &mut waits);
    }

    // whatever is left never saw a warmer day and keeps 0
    tracing::trace!(unresolved = ?stack.as_slice(), "waiting days computed");
    waits
}
