use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Items(Vec<String>),
    Event(String),
    Exits(String),
}

/// Lines produced by the engine for one turn, rendered by whatever front end
/// drives the game.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn list_items(&mut self, names: Vec<String>) {
        if !names.is_empty() {
            self.blocks.push(OutputBlock::Items(names));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Exits block exists, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for block in &self.blocks {
            // Titles and exits get a blank line in front, except at the very top.
            if !first && matches!(block, OutputBlock::Title(_) | OutputBlock::Exits(_)) {
                writeln!(f)?;
            }
            first = false;

            match block {
                OutputBlock::Title(t) => writeln!(f, "{t}")?,
                OutputBlock::Text(line) | OutputBlock::Event(line) => writeln!(f, "{line}")?,
                OutputBlock::Items(names) => writeln!(f, "You see: {}.", names.join(", "))?,
                OutputBlock::Exits(exits) => writeln!(f, "{exits}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_block_is_unique_and_last() {
        let mut out = Output::new();
        out.set_exits("Exits: north");
        out.say("A draft.");
        out.set_exits("Exits: south");
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("A draft.".into()),
                OutputBlock::Exits("Exits: south".into()),
            ]
        );
    }

    #[test]
    fn renders_blocks_as_text() {
        let mut out = Output::new();
        out.title("Hall");
        out.say("A long hall.");
        out.list_items(vec!["key".into(), "lamp".into()]);
        out.set_exits("Exits: north");
        assert_eq!(
            out.to_string(),
            "Hall\nA long hall.\nYou see: key, lamp.\n\nExits: north\n"
        );
    }
}
