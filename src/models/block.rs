use serde::Serialize;

/// The seven scheduling time-blocks of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Block {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Block {
    pub const ALL: [Block; 7] = [
        Block::A,
        Block::B,
        Block::C,
        Block::D,
        Block::E,
        Block::F,
        Block::G,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Block::A => "A",
            Block::B => "B",
            Block::C => "C",
            Block::D => "D",
            Block::E => "E",
            Block::F => "F",
            Block::G => "G",
        }
    }

    /// Helper: convert input label from CLI (lowercase or uppercase)
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Block::A),
            "B" => Some(Block::B),
            "C" => Some(Block::C),
            "D" => Some(Block::D),
            "E" => Some(Block::E),
            "F" => Some(Block::F),
            "G" => Some(Block::G),
            _ => None,
        }
    }
}
