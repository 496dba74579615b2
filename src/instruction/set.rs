//! Priority-ordered instructions with dependencies.

use tracing::{info, warn};

/// One queued instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Insertion index; stable across re-sorting.
    pub index: usize,
    pub text: String,
    /// Higher runs first.
    pub priority: i32,
    /// Indices that must complete first. Unknown indices are ignored.
    pub dependencies: Vec<usize>,
    pub completed: bool,
}

/// Instructions kept sorted by priority, highest first; equal priorities keep
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct InstructionSet {
    instructions: Vec<Instruction>,
    current: Option<usize>,
}

impl InstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instruction and return its index.
    pub fn add(&mut self, text: impl Into<String>, priority: i32, dependencies: Vec<usize>) -> usize {
        let index = self.instructions.len();
        self.instructions.push(Instruction {
            index,
            text: text.into(),
            priority,
            dependencies,
            completed: false,
        });
        // Stable sort keeps insertion order among equal priorities.
        self.instructions.sort_by(|a, b| b.priority.cmp(&a.priority));
        info!(index, priority, "added instruction");
        index
    }

    /// Instructions in execution-priority order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.iter().find(|i| i.index == index)
    }

    /// The highest-priority incomplete instruction whose dependencies are done.
    ///
    /// The returned instruction becomes current for
    /// [`mark_current_completed`](Self::mark_current_completed).
    pub fn next(&mut self) -> Option<&Instruction> {
        let found = self
            .instructions
            .iter()
            .find(|instr| !instr.completed && self.dependencies_met(instr))
            .map(|instr| instr.index);

        self.current = found;
        found.and_then(|index| self.get(index))
    }

    fn dependencies_met(&self, instr: &Instruction) -> bool {
        instr
            .dependencies
            .iter()
            .all(|dep| self.get(*dep).is_none_or(|d| d.completed))
    }

    /// Mark the current instruction completed. Returns `false` if there is none.
    pub fn mark_current_completed(&mut self) -> bool {
        let Some(index) = self.current else {
            warn!("no current instruction to mark as completed");
            return false;
        };

        match self.instructions.iter_mut().find(|i| i.index == index) {
            Some(instr) => {
                instr.completed = true;
                self.current = None;
                info!(index, "marked instruction completed");
                true
            }
            None => {
                warn!(index, "current instruction not found");
                false
            }
        }
    }

    /// True when every instruction is completed (vacuously true when empty).
    pub fn all_completed(&self) -> bool {
        self.instructions.iter().all(|i| i.completed)
    }

    /// Clear completion state and the current instruction.
    pub fn reset(&mut self) {
        for instr in &mut self.instructions {
            instr.completed = false;
        }
        self.current = None;
        info!("reset all instruction completion statuses");
    }
}
