use crate::navigation::Section;

/// Line icons drawn as inline SVG on a 24x24 stroke grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    User,
    Users,
    Zap,
    Mail,
    Moon,
    Sun,
    Share,
    Briefcase,
    GraduationCap,
    TrendingUp,
    ArrowRight,
    Facebook,
    Linkedin,
    Instagram,
    Whatsapp,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::Home,
        Icon::User,
        Icon::Users,
        Icon::Zap,
        Icon::Mail,
        Icon::Moon,
        Icon::Sun,
        Icon::Share,
        Icon::Briefcase,
        Icon::GraduationCap,
        Icon::TrendingUp,
        Icon::ArrowRight,
        Icon::Facebook,
        Icon::Linkedin,
        Icon::Instagram,
        Icon::Whatsapp,
    ];

    /// The dock button glyph for a section.
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Home => Self::Home,
            Section::About => Self::User,
            Section::Highlights => Self::Zap,
            Section::Connect => Self::Mail,
        }
    }

    /// `d` attributes of the icon's `<path>` elements. Circles and rects are
    /// written as arcs so every shape is a path.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Home => &[
                "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8",
                "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            ],
            Self::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Self::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Share => &[
                "M15 5a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M15 19a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "m8.59 13.51 6.83 3.98",
                "m15.41 6.51-6.82 3.98",
            ],
            Self::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Self::GraduationCap => &[
                "M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z",
                "M22 10v6",
                "M6 12.5V16a6 3 0 0 0 12 0v-3.5",
            ],
            Self::TrendingUp => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Facebook => {
                &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"]
            }
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            Self::Whatsapp => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
        }
    }
}
