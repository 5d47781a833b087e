use crate::commands::card::Card;
use crate::handlers::command_handler::COMMANDS;

pub const TEST_REPLY: &str = "✅ ChickenHawk is online.";

const USAGE_COLOR: u32 = 0x3498DB;

pub fn usage_card() -> Card {
    let card = Card::new("🐔 ChickenHawk Command Usage", USAGE_COLOR).description(
        "Use the following commands with a valid player name (replace <PlayerName> entirely):",
    );
    COMMANDS
        .iter()
        .fold(card, |card, c| card.field(c.usage(), c.description, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_every_command() {
        let card = usage_card();
        let names: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "!pubgstats <PlayerName>",
                "!pubglog <PlayerName>",
                "!pubgsummary <PlayerName>",
                "!rlstats <Platform|PlayerId>",
                "!rllog <Platform|PlayerId>",
                "!test",
            ]
        );
        assert_eq!(card.color, 0x3498DB);
        assert!(card.fields.iter().all(|f| !f.inline));
    }
}
