// Fixed page content. Everything here is read-only and baked into the binary.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
}

/// Labels of the in-page sections, in nav order. Each doubles as the
/// section's anchor once lowercased (see [`anchor_id`]).
pub const NAV_ITEMS: [&str; 6] = [
    "About",
    "Services",
    "Process",
    "Gallery",
    "Testimonials",
    "Contact",
];

pub fn anchor_id(label: &str) -> String {
    label.to_lowercase()
}

pub fn anchor_href(label: &str) -> String {
    format!("#{}", anchor_id(label))
}

pub const STATS: [Stat; 3] = [
    Stat { value: "26", label: "Houses Painted" },
    Stat { value: "100%", label: "Satisfaction Rate" },
    Stat { value: "24hr", label: "Quote Response" },
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "At TruCo Painting, we believe every home deserves a flawless finish. We're a full-service painting company dedicated to delivering exceptional results on every project, big or small.",
    "Our team combines skilled craftsmanship with premium materials to ensure your paint job looks beautiful and lasts for years. From initial consultation to final walkthrough, we handle every detail so you don't have to.",
    "We take pride in clear communication, honest pricing, and showing up when we say we will. When you work with TruCo, you're getting a team that treats your home with the care and respect it deserves.",
];

pub const SERVICES: [Service; 4] = [
    Service {
        badge: "01",
        title: "Exterior Painting",
        description: "Complete exterior transformations. Siding, trim, doors, shutters. Weather-resistant finishes that last.",
    },
    Service {
        badge: "02",
        title: "Deck Finishing",
        description: "Decks, fences, and pergolas. Proper prep, premium stains, and lasting protection for your outdoor wood.",
    },
    Service {
        badge: "03",
        title: "Interior Painting",
        description: "Walls, ceilings, trim, and doors. Clean lines, smooth finishes, and attention to detail in every room.",
    },
    Service {
        badge: "04",
        title: "Pressure Washing",
        description: "Thorough exterior cleaning to prep your home for paint. Remove dirt, mold, and grime for a flawless finish.",
    },
];

pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        number: "01",
        title: "Contact",
        description: "Reach out for a free estimate. We respond within 24 hours.",
    },
    ProcessStep {
        number: "02",
        title: "Inspect",
        description: "We visit your property, assess the scope, and provide a detailed quote.",
    },
    ProcessStep {
        number: "03",
        title: "Prepare",
        description: "Thorough prep work. Cleaning, sanding, priming. No shortcuts.",
    },
    ProcessStep {
        number: "04",
        title: "Paint",
        description: "Premium paints applied with precision. Multiple coats for lasting results.",
    },
    ProcessStep {
        number: "05",
        title: "Perfect",
        description: "Final walkthrough together. We don't leave until you're thrilled.",
    },
];

// File names are served exactly as uploaded, mixed case included.
pub const GALLERY: [&str; 9] = [
    "/IMG_1164.JPG",
    "/pic1.PNG",
    "/pic2.PNG",
    "/pic3.jpg",
    "/pic4.PNG",
    "/pic5.png",
    "/IMG_1260.JPEG",
    "/IMG_1273.JPG",
    "/IMG_1355.JPG",
];

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        quote: "They painted our entire bathroom in just a few hours. Looks great and the guys were super respectful of our space.",
        name: "Karen P.",
    },
    Testimonial {
        quote: "Finally found painters who actually show up when they say they will! The bedroom looks perfect.",
        name: "Julie O.",
    },
    Testimonial {
        quote: "Got three quotes and TruCo was the most reasonable. Happy we went with them.",
        name: "Amy T.",
    },
    Testimonial {
        quote: "Did our deck and it turned out way better than expected. Neighbors keep asking who we used lol",
        name: "Michael R.",
    },
    Testimonial {
        quote: "Quick, clean, no complaints. Will call them again for the garage.",
        name: "David S.",
    },
    Testimonial {
        quote: "Wasn't sure about the color I picked but they helped me choose something better. Love it!",
        name: "Jennifer M.",
    },
];

/// Inline `animation-delay` for the `index`-th item of a staggered list.
pub fn stagger_style(index: usize) -> String {
    format!(
        "animation-delay: {:.1}s;",
        index as f64 * crate::config::STAGGER_SECONDS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn anchors_are_lowercase_and_unique() {
        let ids: HashSet<String> = NAV_ITEMS.iter().map(|l| anchor_id(l)).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
        assert!(ids.contains("gallery"));
        assert_eq!(anchor_href("Testimonials"), "#testimonials");
    }

    #[test]
    fn sample_content_sizes() {
        assert_eq!(GALLERY.len(), 9);
        assert_eq!(TESTIMONIALS.len(), 6);
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(PROCESS_STEPS.len(), 5);
        assert!(GALLERY.iter().all(|src| src.starts_with('/')));
    }

    #[test]
    fn stagger_delay_grows_by_a_tenth() {
        assert_eq!(stagger_style(0), "animation-delay: 0.0s;");
        assert_eq!(stagger_style(3), "animation-delay: 0.3s;");
    }
}
