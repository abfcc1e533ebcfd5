//! Sections are the fixed textbooks shown on the home screen. They are not persisted.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: u8,
    pub title: &'static str,
}

pub const SECTIONS: [Section; 9] = [
    Section { id: 1, title: "Hackers Toeic RC" },
    Section { id: 2, title: "Hackers Toeic LC" },
    Section { id: 3, title: "Hackers Yellow" },
    Section { id: 4, title: "Hackers Green" },
    Section { id: 5, title: "Hackers Toeic 900" },
    Section { id: 6, title: "토익 단기공략 7" },
    Section { id: 7, title: "학원 단어 / 숙어" },
    Section { id: 8, title: "모의고사" },
    Section { id: 9, title: "최종 정리본" },
];

/// Title shown for section ids outside the table.
pub const UNKNOWN_SECTION_TITLE: &str = "Section";

impl Section {
    pub fn by_id(id: u8) -> Option<Section> {
        SECTIONS.iter().copied().find(|s| s.id == id)
    }

    /// Looks up a section from its path-parameter form ("1".."9").
    pub fn parse(raw: &str) -> Option<Section> {
        raw.trim().parse::<u8>().ok().and_then(Section::by_id)
    }

    /// Scope id used to key this section's records.
    pub fn scope_id(&self) -> String {
        self.id.to_string()
    }
}

pub fn title_for(raw_id: &str) -> &'static str {
    Section::parse(raw_id)
        .map(|s| s.title)
        .unwrap_or(UNKNOWN_SECTION_TITLE)
}
