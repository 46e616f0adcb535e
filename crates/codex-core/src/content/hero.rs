/// Emphasis applied to a caption segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Plain,
    Purple,
    Cyan,
    Blue,
}

impl Highlight {
    pub fn class(&self) -> &'static str {
        match self {
            Highlight::Plain => "caption-plain",
            Highlight::Purple => "caption-purple",
            Highlight::Cyan => "caption-cyan",
            Highlight::Blue => "caption-blue",
        }
    }
}

/// One fade-in span of the hero caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionSegment {
    pub text: &'static str,
    pub highlight: Highlight,
}

const fn seg(text: &'static str, highlight: Highlight) -> CaptionSegment {
    CaptionSegment { text, highlight }
}

/// Hero caption, revealed segment by segment.
pub const HERO_CAPTION: [CaptionSegment; 12] = [
    seg("Welcome to my digital laboratory. ", Highlight::Plain),
    seg("I'm an ", Highlight::Plain),
    seg("Artificial Intelligence", Highlight::Purple),
    seg(" & ", Highlight::Plain),
    seg("Cybersecurity", Highlight::Cyan),
    seg(" Researcher exploring the intersection of ", Highlight::Plain),
    seg("Quantum Machine Learning", Highlight::Blue),
    seg(", ", Highlight::Plain),
    seg("Large Language Models", Highlight::Purple),
    seg(", and ", Highlight::Plain),
    seg("Cybersecurity", Highlight::Cyan),
    seg(".", Highlight::Plain),
];
