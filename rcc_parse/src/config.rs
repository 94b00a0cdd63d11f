use crate::symtab::SymTabMode;

/// Default storage size of one local variable slot.
pub const DEFAULT_SLOT_WIDTH: usize = 8;

/// Largest slot width accepted from the command line.
pub const MAX_SLOT_WIDTH: usize = 4096;

/// Default limit on nested groups and chained assignments in one expression.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Clone, Debug)]
pub struct ParseConfig {
    /// Size of each frame slot. The first local lives at this offset, and every new
    /// local lives one slot width beyond the previous one.
    pub slot_width: usize,

    /// Indicates whether identifiers should be registered in the symbol table as soon
    /// as the lexer sees them, rather than when the parser resolves them.
    pub eager_idents: bool,

    /// How repeated registrations of the same spelling are handled.
    pub sym_tab_mode: SymTabMode,

    /// How deeply parentheses and assignment chains may nest before the parser gives up
    /// with an error instead of exhausting the stack.
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> ParseConfig {
        ParseConfig {
            slot_width: DEFAULT_SLOT_WIDTH,
            eager_idents: false,
            sym_tab_mode: SymTabMode::Unique,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
