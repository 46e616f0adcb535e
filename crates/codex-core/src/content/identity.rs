pub const OWNER_NAME: &str = "Kathan Vyas";
pub const OWNER_ROLE: &str = "AI Security Researcher";
pub const OWNER_AFFILIATION: &str = "Final Year B.Tech, PDEU | Research Intern, IIT Gandhinagar";

/// A heading + paragraph block on the identity card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directive {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const DIRECTIVES: [Directive; 3] = [
    Directive {
        heading: "What I Do",
        body: "I engineer intelligent and resilient solutions for complex problems. You can usually find me engaged in Artificial Intelligence or cybersecurity projects.",
    },
    Directive {
        heading: "Vision",
        body: "To contribute to the world by securing millions of lives and their billions of devices.",
    },
    Directive {
        heading: "Mission",
        body: "Cultivating a digital landscape where technology empowers humanity without compromising security or privacy.",
    },
];

/// Revealed when the JARVIS card is unlocked.
pub const JARVIS_LINKS: [&str; 3] = [
    "Researched Prompt Injection (Understanding Ultron)",
    "Developed Malicious Prompt Classification & Sanitization Framework (Killing the Ultron)",
    "Developed QNI-CCP Training (Strengthening Jarvis for future adversaries)",
];

/// Revealed when the ULTRON card is unlocked.
pub const ULTRON_LINKS: [&str; 2] = [
    "Prompt Injection (Main Strength)",
    "Adversarial Attacks (Ultron on Steroids)",
];

/// Typed into the JARVIS transmission while threat mode is on.
pub const TRANSMISSION: &str = "Click on the KILL ULTRON button to save the universe.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/kathan-vyas-29b558253/",
        glyph: "in",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/KATHAN-VYAS",
        glyph: "gh",
    },
    SocialLink {
        label: "Email",
        href: "mailto:kathan61004@gmail.com",
        glyph: "@",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/kathan_vyas_06/",
        glyph: "ig",
    },
];
