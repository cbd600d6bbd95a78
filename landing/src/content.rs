//! Page content. Everything here is authored by hand and compiled in.

/// Organisation name, used by the nav, footer and page title.
pub const ORG_NAME: &str = "Blue City Parivar";

/// Shown in the footer when the browser clock is unavailable.
pub const FALLBACK_YEAR: u32 = 2025;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Done,
}

impl EventStatus {
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Done => "Done",
        }
    }

    /// Badge class in the events table.
    pub fn css_class(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "status-upcoming",
            EventStatus::Done => "status-done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub status: EventStatus,
}

pub const EVENTS: &[Event] = &[
    Event {
        title: "Diwali Celebration 2025",
        date: "October 24, 2025",
        time: "6:00 PM - 10:00 PM",
        location: "Community Hall, Bodakdev",
        status: EventStatus::Upcoming,
    },
    Event {
        title: "Holi Milan 2026",
        date: "March 14, 2026",
        time: "10:00 AM - 2:00 PM",
        location: "Green Meadows, SG Highway",
        status: EventStatus::Upcoming,
    },
    Event {
        title: "Monthly Family Meetup",
        date: "Every 2nd Sunday",
        time: "5:00 PM - 8:00 PM",
        location: "Various Locations",
        status: EventStatus::Upcoming,
    },
    Event {
        title: "Rajasthani Folk Night",
        date: "January 15, 2026",
        time: "7:00 PM - 11:00 PM",
        location: "The Grand Bhagwati, SG Road",
        status: EventStatus::Done,
    },
];

/// Grid footprint of a gallery tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpan {
    /// 1 or 2 grid columns.
    pub columns: u8,
    pub height_px: u16,
}

impl TileSpan {
    pub fn class(self) -> &'static str {
        if self.columns >= 2 {
            "gallery-tile span-2"
        } else {
            "gallery-tile span-1"
        }
    }

    pub fn style(self) -> String {
        format!("height: {}px;", self.height_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub title: &'static str,
    pub span: TileSpan,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        url: "https://picsum.photos/800/600?random=1",
        title: "Diwali 2024",
        span: TileSpan { columns: 2, height_px: 400 },
    },
    GalleryImage {
        url: "https://picsum.photos/400/400?random=2",
        title: "Holi Celebration",
        span: TileSpan { columns: 1, height_px: 250 },
    },
    GalleryImage {
        url: "https://picsum.photos/400/400?random=3",
        title: "Folk Dance",
        span: TileSpan { columns: 1, height_px: 250 },
    },
    GalleryImage {
        url: "https://picsum.photos/400/500?random=4",
        title: "Color Festival",
        span: TileSpan { columns: 1, height_px: 300 },
    },
    GalleryImage {
        url: "https://picsum.photos/400/500?random=5",
        title: "Cultural Evening",
        span: TileSpan { columns: 1, height_px: 300 },
    },
    GalleryImage {
        url: "https://picsum.photos/800/400?random=6",
        title: "Community Gathering",
        span: TileSpan { columns: 2, height_px: 250 },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Joining Blue City Parivar was the best decision. It feels like home again in Ahmedabad. The warmth and support from everyone is incredible.",
        name: "Rajesh Rathore",
        role: "Member since 2018",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=200",
    },
    Testimonial {
        quote: "My children are growing up connected to our roots. They learn our traditions, speak our language, and celebrate our festivals with pride.",
        name: "Priya Shekhawat",
        role: "Member since 2020",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=200",
    },
    Testimonial {
        quote: "The community has been a pillar of support during tough times. More than members, we've become one big family.",
        name: "Vikram Singh",
        role: "Member since 2019",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=200",
    },
];

pub const CLOSING_QUOTE: &str =
    "In Ahmedabad, we found a new home. In Blue City Parivar, we found our family.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_FEATURES: &[Feature] = &[
    Feature { icon: "🎉", title: "Regular Events", description: "Monthly gatherings & festivals" },
    Feature { icon: "👨‍👩‍👧‍👦", title: "Family Oriented", description: "All ages welcome" },
    Feature { icon: "🏛️", title: "Cultural Heritage", description: "Preserving traditions" },
    Feature { icon: "🤝", title: "Strong Network", description: "Support & friendship" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "500+", label: "Members" },
    Stat { value: "50+", label: "Events" },
    Stat { value: "10+", label: "Years Strong" },
];

pub const MEMBERSHIP: &[Stat] = &[
    Stat { value: "₹7,000", label: "One-time Payment" },
    Stat { value: "Lifetime", label: "Membership" },
    Stat { value: "Entire", label: "Family Included" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub text: &'static str,
    /// `None` renders plain text.
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📧",
        label: "Email",
        text: "info@bluecityparivar.com",
        href: Some("mailto:info@bluecityparivar.com"),
    },
    ContactChannel {
        icon: "📱",
        label: "WhatsApp",
        text: "+91 98765 43210",
        href: Some("tel:+919876543210"),
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        text: "Ahmedabad, Gujarat",
        href: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[Link] = &[
    Link { label: "Home", href: "#home" },
    Link { label: "About", href: "#about" },
    Link { label: "Events", href: "#events" },
    Link { label: "Gallery", href: "#gallery" },
    Link { label: "Stories", href: "#stories" },
    Link { label: "Contact", href: "#contact" },
];

pub const QUICK_LINKS: &[Link] = &[
    Link { label: "About Us", href: "#about" },
    Link { label: "Events", href: "#events" },
    Link { label: "Gallery", href: "#gallery" },
    Link { label: "Contact", href: "#contact" },
];

pub const LEGAL_LINKS: &[Link] = &[
    Link { label: "Privacy Policy", href: "#" },
    Link { label: "Terms of Service", href: "#" },
    Link { label: "Membership Guidelines", href: "#" },
];

/// Rendered as round badges with the first letter.
pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "Facebook", href: "#" },
    Link { label: "Instagram", href: "#" },
    Link { label: "WhatsApp", href: "#" },
];

impl Link {
    pub fn initial(&self) -> String {
        self.label.chars().next().map(String::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_event_is_done() {
        assert_eq!(EVENTS.len(), 4);
        let done: Vec<_> = EVENTS
            .iter()
            .filter(|e| e.status == EventStatus::Done)
            .map(|e| e.title)
            .collect();
        assert_eq!(done, vec!["Rajasthani Folk Night"]);
    }

    #[test]
    fn status_labels_and_classes() {
        assert_eq!(EventStatus::Upcoming.label(), "Upcoming");
        assert_eq!(EventStatus::Done.label(), "Done");
        assert_eq!(EventStatus::Upcoming.css_class(), "status-upcoming");
        assert_eq!(EventStatus::Done.css_class(), "status-done");
    }

    #[test]
    fn gallery_spans() {
        assert_eq!(GALLERY.len(), 6);
        assert_eq!(GALLERY[0].span.class(), "gallery-tile span-2");
        assert_eq!(GALLERY[1].span.class(), "gallery-tile span-1");
        assert_eq!(GALLERY[0].span.style(), "height: 400px;");
    }

    #[test]
    fn contact_links_are_mailto_and_tel() {
        let hrefs: Vec<_> = CONTACT_CHANNELS.iter().filter_map(|c| c.href).collect();
        assert_eq!(
            hrefs,
            vec!["mailto:info@bluecityparivar.com", "tel:+919876543210"]
        );
    }

    #[test]
    fn social_initials() {
        let initials: Vec<_> = SOCIAL_LINKS.iter().map(Link::initial).collect();
        assert_eq!(initials, vec!["F", "I", "W"]);
    }
}
