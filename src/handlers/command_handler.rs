/// A recognised chat command with its player argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PubgStats(String),
    PubgLog(String),
    PubgSummary(String),
    RlStats(String),
    RlLog(String),
    Test,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    PubgStats,
    PubgLog,
    PubgSummary,
    RlStats,
    RlLog,
    Test,
}

pub struct CommandHelp {
    pub prefix: &'static str,
    pub argument: Option<&'static str>,
    pub description: &'static str,
    kind: Kind,
}

pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        prefix: "!pubgstats",
        argument: Some("<PlayerName>"),
        description: "→ Shows stats for last 10 matches, season, and lifetime",
        kind: Kind::PubgStats,
    },
    CommandHelp {
        prefix: "!pubglog",
        argument: Some("<PlayerName>"),
        description: "→ Shows detailed log for last 10 matches",
        kind: Kind::PubgLog,
    },
    CommandHelp {
        prefix: "!pubgsummary",
        argument: Some("<PlayerName>"),
        description: "→ Shows stats + log, season, and lifetime",
        kind: Kind::PubgSummary,
    },
    CommandHelp {
        prefix: "!rlstats",
        argument: Some("<Platform|PlayerId>"),
        description: "→ Shows Rocket League current season and lifetime stats",
        kind: Kind::RlStats,
    },
    CommandHelp {
        prefix: "!rllog",
        argument: Some("<Platform|PlayerId>"),
        description: "→ Shows the last 10 Rocket League matches",
        kind: Kind::RlLog,
    },
    CommandHelp {
        prefix: "!test",
        argument: None,
        description: "→ Checks that the bot is online",
        kind: Kind::Test,
    },
];

impl CommandHelp {
    pub fn usage(&self) -> String {
        match self.argument {
            Some(arg) => format!("{} {}", self.prefix, arg),
            None => self.prefix.to_string(),
        }
    }

    pub fn is_rocket_league(&self) -> bool {
        matches!(self.kind, Kind::RlStats | Kind::RlLog)
    }
}

/// Parses a chat message. Recognition is a case-sensitive prefix match on the
/// raw text; the player name is the second whitespace-separated token, so
/// names with spaces are cut at the first space. A player command without a
/// name becomes [`Command::Usage`].
pub fn parse_command(content: &str) -> Option<Command> {
    let help = COMMANDS.iter().find(|c| content.starts_with(c.prefix))?;
    if help.kind == Kind::Test {
        return Some(Command::Test);
    }

    let Some(name) = content.split_whitespace().nth(1) else {
        return Some(Command::Usage);
    };
    let name = name.to_string();
    Some(match help.kind {
        Kind::PubgStats => Command::PubgStats(name),
        Kind::PubgLog => Command::PubgLog(name),
        Kind::PubgSummary => Command::PubgSummary(name),
        Kind::RlStats => Command::RlStats(name),
        Kind::RlLog => Command::RlLog(name),
        Kind::Test => Command::Test,
    })
}

/// Entry point for every inbound message. The bot's own messages are never
/// commands.
pub fn dispatch(authored_by_bot: bool, content: &str) -> Option<Command> {
    if authored_by_bot {
        return None;
    }
    parse_command(content)
}
