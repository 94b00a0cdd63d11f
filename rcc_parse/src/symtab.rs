use crate::config::{ParseConfig, DEFAULT_SLOT_WIDTH};
use tracing::trace;

/// Controls how `register()` treats a spelling that is already in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymTabMode {
    /// A spelling owns exactly one slot. Registering it again returns the existing offset.
    Unique,

    /// Every registration allocates a new slot, and lookup returns the most recent one.
    /// Earlier entries with the same spelling stay in the frame but become unreachable.
    Shadowing,
}

/// A local variable entry, binding an identifier to its offset below the frame base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LVar {
    pub name: String,
    pub offset: usize,
}

/// The symbol table for the single flat frame of a translation. Entries are stored in
/// declaration order and are never removed or changed once inserted, so offsets handed
/// out to the parser stay valid for the whole translation.
#[derive(Debug)]
pub struct SymTab {
    /// Entries in declaration order. The last entry is the head of the table.
    vars: Vec<LVar>,

    slot_width: usize,

    mode: SymTabMode,
}

impl SymTab {
    pub fn new() -> SymTab {
        SymTab {
            vars: Vec::new(),
            slot_width: DEFAULT_SLOT_WIDTH,
            mode: SymTabMode::Unique,
        }
    }

    pub fn with_config(config: &ParseConfig) -> SymTab {
        SymTab {
            vars: Vec::new(),
            slot_width: config.slot_width,
            mode: config.sym_tab_mode,
        }
    }

    /// Get the offset for a name. Entries are checked from the most recently inserted
    /// to the least recently inserted, so the newest entry with a matching spelling wins.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.vars
            .iter()
            .rev()
            .find(|var| var.name == name)
            .map(|var| var.offset)
    }

    /// Allocate a new slot for a name and make it the head of the table. This does not
    /// check for an existing entry: it is the only place offsets are handed out, and every
    /// other way of adding a name goes through here.
    pub fn insert(&mut self, name: &str) -> usize {
        let offset = self.frame_size() + self.slot_width;
        self.vars.push(LVar {
            name: String::from(name),
            offset,
        });

        trace!(name, offset, "allocated frame slot");
        offset
    }

    /// Returns the existing offset for a name, inserting it if it has never been seen.
    pub fn declare(&mut self, name: &str) -> usize {
        match self.lookup(name) {
            Some(offset) => offset,
            None => self.insert(name),
        }
    }

    /// Register a name according to the table's mode.
    pub fn register(&mut self, name: &str) -> usize {
        match self.mode {
            SymTabMode::Unique => self.declare(name),
            SymTabMode::Shadowing => self.insert(name),
        }
    }

    /// Total frame space claimed so far, which is the offset of the head entry.
    pub fn frame_size(&self) -> usize {
        match self.vars.last() {
            Some(head) => head.offset,
            None => 0,
        }
    }

    /// Iterate over entries starting from the head (most recently inserted).
    pub fn iter(&self) -> impl Iterator<Item = &LVar> {
        self.vars.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn slot_width(&self) -> usize {
        self.slot_width
    }

    pub fn mode(&self) -> SymTabMode {
        self.mode
    }
}

impl Default for SymTab {
    fn default() -> SymTab {
        SymTab::new()
    }
}
