//! Glyph sets for the status indicators.
//!
//! Plain immutable lookup tables; the ascii set exists for terminals
//! without an emoji-capable font.

/// Fixed label shown next to the music mute indicator.
pub const MUSIC_LABEL: &str = "LofiGirl";

/// A set of status glyphs for the stopwatch rows and the music bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Unique identifier for the set.
    pub id: &'static str,
    /// Display name for the set.
    pub name: &'static str,

    /// A running stopwatch.
    pub running: &'static str,
    /// A paused stopwatch.
    pub paused: &'static str,
    /// Music playing (unmuted).
    pub music_on: &'static str,
    /// Music muted.
    pub music_off: &'static str,
}

pub const EMOJI: GlyphSet = GlyphSet {
    id: "emoji",
    name: "Emoji",
    running: "▶️ ",
    paused: "⏸️ ",
    music_on: "🔊",
    music_off: "🔇",
};

pub const ASCII: GlyphSet = GlyphSet {
    id: "ascii",
    name: "Ascii",
    running: "> ",
    paused: "||",
    music_on: "((o))",
    music_off: "(-o-)",
};

impl GlyphSet {
    /// All available glyph sets.
    pub const ALL: &'static [GlyphSet] = &[EMOJI, ASCII];

    /// Look up a glyph set by its ID.
    ///
    /// Returns the EMOJI set if the ID is not found.
    pub fn by_id(id: &str) -> &'static GlyphSet {
        GlyphSet::ALL.iter().find(|g| g.id == id).unwrap_or(&EMOJI)
    }

    /// The set following this one, wrapping around.
    pub fn next(&self) -> &'static GlyphSet {
        let idx = GlyphSet::ALL
            .iter()
            .position(|g| g.id == self.id)
            .unwrap_or(0);
        &GlyphSet::ALL[(idx + 1) % GlyphSet::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_falls_back_to_emoji() {
        assert_eq!(GlyphSet::by_id("ascii").id, "ascii");
        assert_eq!(GlyphSet::by_id("no-such-set").id, "emoji");
    }

    #[test]
    fn test_next_cycles_through_all_sets() {
        let mut set = &EMOJI;
        for _ in 0..GlyphSet::ALL.len() {
            set = set.next();
        }
        assert_eq!(set.id, EMOJI.id);
    }
}
