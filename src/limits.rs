/// Size limits imposed by the chat platform on rendered cards.
pub mod card {
    pub const TOTAL: usize = 6000;
    pub const TITLE: usize = 256;
    pub const DESCRIPTION: usize = 2048;
    pub const FIELDS: usize = 25;
    pub const FIELD_NAME: usize = 256;
    pub const FIELD_VALUE: usize = 1024;
    pub const FOOTER: usize = 2048;
}

pub const QUIZ_NAME_MAX: usize = 50;

// One label per ASCII lowercase letter.
pub const MAX_OPTIONS: usize = 26;

pub const MAX_DECIMAL: u32 = 15;

pub const SCHEMA_VERSION: u32 = 1;
