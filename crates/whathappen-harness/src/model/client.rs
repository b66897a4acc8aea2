//! Model client.
//!
//! Straight-line reimplementation of the engine with the reference seed
//! inlined. No configuration, no logging, no actions: just the arithmetic and
//! the counters.

use super::operation::{Applied, Operation, OperationResult};

/// Observable engine state compared between model and real client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Increment counter.
    pub in_count: i32,
    /// Decrement counter.
    pub out_count: i32,
    /// Next write position.
    pub index: usize,
    /// Ring contents.
    pub buffer: Vec<i32>,
}

/// Reference model of the counter engine.
#[derive(Debug, Clone)]
pub struct ModelClient {
    in_count: i32,
    out_count: i32,
    buffer: Vec<i32>,
    index: usize,
}

impl ModelClient {
    /// Create a model with `capacity` zeroed slots.
    pub fn new(capacity: usize) -> Self {
        Self { in_count: 0, out_count: 0, buffer: vec![0; capacity], index: 0 }
    }

    /// Apply an operation.
    pub fn apply(&mut self, op: Operation) -> Applied {
        match op {
            Operation::Start { .. } | Operation::ConvergenceLoop => {
                let (handle, observations) = self.juggle();
                Applied { result: OperationResult::Handle(handle), observations }
            },
            Operation::RecordMessage => Applied::quiet(OperationResult::Message(self.record())),
            Operation::IsEmpty => Applied::quiet(OperationResult::Flag(self.buffer.is_empty())),
            Operation::DiagnosticStep => {
                self.tick();
                Applied { result: OperationResult::Flag(false), observations: vec![false] }
            },
        }
    }

    /// Current observable state.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            in_count: self.in_count,
            out_count: self.out_count,
            index: self.index,
            buffer: self.buffer.clone(),
        }
    }

    fn length(&self) -> i32 {
        self.buffer.len() as i32
    }

    fn tick(&mut self) {
        self.in_count = self.in_count.wrapping_add(1);
        self.out_count = self.out_count.wrapping_sub(1);
    }

    fn record(&mut self) -> i32 {
        let length = self.length();
        let value = if self.buffer.is_empty() { length - 1 } else { length * 2 };
        if self.index < self.buffer.len() {
            self.buffer[self.index] = value;
            self.index += 1;
        } else {
            self.index = 0;
        }
        value
    }

    fn juggle(&mut self) -> (i32, Vec<bool>) {
        let (mut a, mut b, mut c) = (2i32, 3i32, 4i32);
        let mut observations = Vec::new();
        while b < c && a < b {
            a = c - b;
            b -= a;
            c = b * a;
            self.tick();
            observations.push(false);
        }
        ((a * b + c) * self.length(), observations)
    }
}
