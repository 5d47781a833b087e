use poise::serenity_prelude as serenity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Platform-neutral embed: everything the bot renders goes through this
/// before it becomes a [`serenity::CreateEmbed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<CardField>,
}

impl Card {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self { title: title.into(), description: None, color, fields: Vec::new() }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(CardField { name: name.into(), value: value.into(), inline });
        self
    }

    pub fn to_embed(&self) -> serenity::CreateEmbed {
        let mut embed = serenity::CreateEmbed::default()
            .title(&self.title)
            .color(self.color);
        if let Some(desc) = &self.description {
            embed = embed.description(desc);
        }
        embed.fields(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone(), f.inline)),
        )
    }
}
