/// Where a navbar entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    About,
    Research,
    Projects,
    Connect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "About Me",
        target: NavTarget::About,
    },
    NavItem {
        label: "Research",
        target: NavTarget::Research,
    },
    NavItem {
        label: "Other Projects",
        target: NavTarget::Projects,
    },
    NavItem {
        label: "Connect",
        target: NavTarget::Connect,
    },
];
