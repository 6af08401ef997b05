//! Embed color themes, selectable per guild with `/theme`.

/// A named color palette applied to every embed sent to a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: u32,
    pub accent: u32,
    pub highlight: u32,
}

pub const THEMES: [Theme; 4] = [
    Theme {
        name: "violet",
        primary: 0x9B59B6,
        accent: 0x8E44AD,
        highlight: 0xE91E63,
    },
    Theme {
        name: "ocean",
        primary: 0x3498DB,
        accent: 0x2980B9,
        highlight: 0x1ABC9C,
    },
    Theme {
        name: "sunset",
        primary: 0xE67E22,
        accent: 0xD35400,
        highlight: 0xF1C40F,
    },
    Theme {
        name: "forest",
        primary: 0x27AE60,
        accent: 0x16A085,
        highlight: 0x2ECC71,
    },
];

impl Theme {
    pub fn by_name(name: &str) -> Option<Theme> {
        THEMES.iter().copied().find(|theme| theme.name == name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0]
    }
}
