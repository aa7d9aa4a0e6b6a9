/// A selectable ROM shipped with the site
#[derive(Debug, PartialEq, Eq)]
pub struct RomDescriptor {
    /// Picker value and resource path segment
    pub key: &'static str,
    pub display_name: &'static str,
    pub blurb: &'static str,
    /// Trusted markup, rendered as-is
    pub controls_markup: &'static str,
}

pub const CATALOG: &[RomDescriptor] = &[
    RomDescriptor {
        key: "brix",
        display_name: "Brix",
        blurb: "Smash through bricks by rebounding the ball with your paddle in this classic arcade game.",
        controls_markup: "Controls:<br />'Q'/'E' - Move left or right",
    },
    RomDescriptor {
        key: "invaders",
        display_name: "Invaders",
        blurb: "Shoot the alien invaders before they reach the bottom of the screen.",
        controls_markup: "Controls:<br />'Q'/'E' - Move left or right<br />'W' - Shoot<br /><br />Press 'W' to start game on main menu.",
    },
    RomDescriptor {
        key: "merlin",
        display_name: "Merlin",
        blurb: "Test your memory by repeating the pattern.",
        controls_markup: "Controls:<br />'QWAS' - represent the 4 squares.",
    },
    RomDescriptor {
        key: "tetris",
        display_name: "Tetris",
        blurb: "",
        controls_markup: "Controls:<br />'Q' - rotate.<br />'W'/'E' - Move left or right<br />'A' - Drop quickly",
    },
];

pub fn lookup(key: &str) -> Option<&'static RomDescriptor> {
    CATALOG.iter().find(|rom| rom.key == key)
}

/// Resource path for a catalog key, e.g. `/roms/` + `brix` -> `/roms/brix`
pub fn rom_url(base: &str, key: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{key}")
    } else {
        format!("{base}/{key}")
    }
}
