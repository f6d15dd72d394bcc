use serde::Serialize;

use crate::icon::Icon;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Organization {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Violet,
}

impl Accent {
    /// Tailwind classes for the icon tile of a highlight card.
    pub fn icon_classes(self) -> &'static str {
        match self {
            Self::Cyan => "bg-cyan-100 dark:bg-cyan-900/20 text-cyan-700 dark:text-cyan-400",
            Self::Violet => {
                "bg-violet-100 dark:bg-violet-900/20 text-violet-600 dark:text-violet-400"
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub caption: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    /// Also listed as a `sameAs` identity in structured data.
    pub same_as: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub site_url: &'static str,
    pub avatar_url: &'static str,
    pub organizations: &'static [Organization],
    pub tagline: &'static str,
    pub mission: &'static str,
    pub biography: &'static str,
    pub focus_tags: &'static [&'static str],
    pub education: Education,
    pub highlights: &'static [Highlight],
    pub social_links: &'static [SocialLink],
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_display: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    name: "Abid Uddin Ahmed",
    role: "Director",
    site_url: "https://abiduddinahmed.com",
    avatar_url: "https://res.cloudinary.com/dhukcjdmi/image/upload/v1771654213/612164120_4215377298700050_6164740412147692303_n_wdfitm.jpg",
    organizations: &[
        Organization {
            name: "X-group Chain Restaurant & Hospitality Management",
            url: "https://www.x-grouprestaurant.com/",
        },
        Organization {
            name: "BCFCC",
            url: "https://bcfccbd.com/",
        },
    ],
    tagline: "Leadership. Vision. Impact.",
    mission: "Building the future through calm authority and strategic innovation.",
    biography: "I oversee strategic operations across the chain restaurant and hospitality sector. With a focus on operational excellence and guest experience, I drive sustainable growth while fostering a culture of innovation and service leadership.",
    focus_tags: &[
        "Hospitality Management",
        "Strategic Operations",
        "Brand Growth",
        "Team Leadership",
    ],
    education: Education {
        degree: "Bachelor of Arts (Honours) in International Business Management",
        institution: "Asia Pacific University of Technology & Innovation - APU",
    },
    highlights: &[
        Highlight {
            icon: Icon::TrendingUp,
            title: "Visionary Leadership",
            description: "Spearheaded initiatives that significantly increased operational efficiency across multiple departments.",
            accent: Accent::Cyan,
        },
        Highlight {
            icon: Icon::Users,
            title: "Team Leadership",
            description: "Managed cross-functional teams, delivering projects under budget and ahead of schedule.",
            accent: Accent::Violet,
        },
    ],
    social_links: &[
        SocialLink {
            label: "Facebook",
            caption: "Social Connection",
            href: "https://www.facebook.com/abid.ahmed.101054",
            icon: Icon::Facebook,
            same_as: true,
        },
        SocialLink {
            label: "LinkedIn",
            caption: "Professional Network",
            href: "https://linkedin.com",
            icon: Icon::Linkedin,
            same_as: false,
        },
        SocialLink {
            label: "Instagram",
            caption: "Personal Insights",
            href: "https://www.instagram.com/ahmed_abid_uddin/",
            icon: Icon::Instagram,
            same_as: true,
        },
        SocialLink {
            label: "WhatsApp",
            caption: "Direct Message",
            href: "https://wa.me/8801730715191",
            icon: Icon::Whatsapp,
            same_as: false,
        },
    ],
    email: "abidahmedrulz@gmail.com",
    phone: "+8801730715191",
    phone_display: "+880 1730-715191",
    description: "Professional portfolio of Abid Uddin Ahmed, Director of X-group Chain Restaurant & Hospitality Management and BCFCC. Visionary leadership in hospitality and strategic operations.",
    keywords: &[
        "Abid Uddin Ahmed",
        "Director",
        "X-group Restaurant",
        "BCFCC",
        "Hospitality Management",
        "Bangladesh",
    ],
};

impl Profile {
    /// `"Name | Role"`, the default document title.
    pub fn headline(&self) -> String {
        format!("{} | {}", self.name, self.role)
    }
}

/// schema.org node with its `@type` tag in front of the fields.
#[derive(Debug, Serialize)]
pub struct Typed<T> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub item: T,
}

#[derive(Debug, Serialize)]
pub struct Named {
    pub name: &'static str,
}

/// schema.org `Person` for the page's JSON-LD block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub job_title: &'static str,
    pub works_for: Vec<Typed<Organization>>,
    pub alumni_of: Typed<Named>,
    pub email: &'static str,
    pub telephone: &'static str,
    /// Only links flagged as identities.
    pub same_as: Vec<&'static str>,
    pub image: &'static str,
}

pub fn person_json_ld(profile: &Profile) -> PersonLd {
    PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: profile.name,
        job_title: profile.role,
        works_for: profile
            .organizations
            .iter()
            .map(|&item| Typed {
                kind: "Organization",
                item,
            })
            .collect(),
        alumni_of: Typed {
            kind: "CollegeOrUniversity",
            item: Named {
                name: profile.education.institution,
            },
        },
        email: profile.email,
        telephone: profile.phone,
        same_as: profile
            .social_links
            .iter()
            .filter(|l| l.same_as)
            .map(|l| l.href)
            .collect(),
        image: profile.avatar_url,
    }
}

/// [`person_json_ld`] serialized for an inline `<script>`; `</` is escaped so
/// the payload cannot close the tag early.
pub fn json_ld_script(profile: &Profile) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(&person_json_ld(profile))?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn ld() -> Value {
        serde_json::to_value(person_json_ld(&PROFILE)).expect("person should serialize")
    }

    #[test]
    fn test_person_json_ld_shape() {
        let ld = ld();
        assert_eq!(ld["@context"], "https://schema.org");
        assert_eq!(ld["@type"], "Person");
        assert_eq!(ld["name"], PROFILE.name);
        assert_eq!(ld["jobTitle"], "Director");
        assert_eq!(ld["worksFor"].as_array().map(Vec::len), Some(2));
        assert_eq!(ld["worksFor"][1]["name"], "BCFCC");
        assert_eq!(ld["worksFor"][0]["@type"], "Organization");
        assert_eq!(ld["worksFor"][0]["url"], "https://www.x-grouprestaurant.com/");
        assert_eq!(ld["alumniOf"]["@type"], "CollegeOrUniversity");
        assert_eq!(ld["telephone"], "+8801730715191");
    }

    #[test]
    fn test_same_as_only_lists_identities() {
        let ld = ld();
        let same_as = ld["sameAs"].as_array().expect("sameAs should be an array");
        assert_eq!(same_as.len(), 2);
        assert!(same_as.iter().all(|v| v.as_str().is_some_and(|s| !s.contains("wa.me"))));
    }

    #[test]
    fn test_headline() {
        assert_eq!(PROFILE.headline(), "Abid Uddin Ahmed | Director");
    }

    #[test]
    fn test_json_ld_script_is_inline_safe() {
        let script = json_ld_script(&PROFILE).expect("person should serialize");
        assert!(!script.contains("</"));
        let parsed: Value = serde_json::from_str(&script).expect("script should stay valid JSON");
        assert_eq!(parsed, ld());
    }
}
