//! Static portfolio content rendered by the section views.

pub const NAME: &str = "Riley Navarro";
pub const TAGLINE: &str = "I build quiet, reliable software and write about the craft.";
pub const SITE_URL: &str = "https://rileynavarro.dev";
pub const CONTACT_EMAIL: &str = "hello@rileynavarro.dev";
pub const LOCATION: &str = "Portland, OR";

pub const TYPEWRITER_PHRASES: [&str; 8] = [
    "Systems Developer",
    "Terminal Enthusiast",
    "Open Source Contributor",
    "Rust Programmer",
    "Distributed Systems Tinkerer",
    "Documentation Advocate",
    "Keyboard Craftsman",
    "Lifelong Learner",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: [Quote; 10] = [
    Quote {
        text: "Every bug is a lesson wearing a disguise.",
        author: "maintainer's adage",
    },
    Quote {
        text: "Code you can delete is worth twice the code you can reuse.",
        author: "anonymous",
    },
    Quote {
        text: "A good abstraction earns its keep; a clever one charges rent.",
        author: "review-thread wisdom",
    },
    Quote {
        text: "Ship the boring version first. Boring is what pages you least.",
        author: "on-call proverb",
    },
    Quote {
        text: "Readable beats fast until a profiler says otherwise.",
        author: "anonymous",
    },
    Quote {
        text: "The best error message is the one the user never sees.",
        author: "support-desk adage",
    },
    Quote {
        text: "Tests are letters to the next person who breaks this.",
        author: "anonymous",
    },
    Quote {
        text: "Naming is design. If you cannot name it, you have not designed it.",
        author: "whiteboard leftover",
    },
    Quote {
        text: "Small diffs, big patience.",
        author: "release-day mantra",
    },
    Quote {
        text: "Leave the codebase kinder than you found it.",
        author: "team handbook",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        year: "2019",
        title: "First patch merged",
        detail: "Started contributing fixes to open source network tooling.",
    },
    TimelineEntry {
        year: "2021",
        title: "Backend engineer",
        detail: "Built ingestion pipelines and owned the on-call rotation.",
    },
    TimelineEntry {
        year: "2023",
        title: "Systems developer",
        detail: "Moved down the stack: storage engines, schedulers, profilers.",
    },
    TimelineEntry {
        year: "2025",
        title: "Independent",
        detail: "Consulting on performance work and maintaining my own tools.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 4] = [
    Project {
        name: "driftlog",
        summary: "Append-only log store with time-travel reads.",
        tags: &["rust", "storage"],
    },
    Project {
        name: "hushd",
        summary: "Tiny notification daemon that batches and de-duplicates.",
        tags: &["rust", "daemon"],
    },
    Project {
        name: "plotnine-tui",
        summary: "Terminal dashboards for long-running batch jobs.",
        tags: &["tui", "observability"],
    },
    Project {
        name: "cartographer",
        summary: "Dependency graph explorer for large workspaces.",
        tags: &["cli", "tooling"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u16,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "Rust",
        percent: 90,
    },
    Skill {
        name: "Distributed systems",
        percent: 80,
    },
    Skill {
        name: "Linux internals",
        percent: 75,
    },
    Skill {
        name: "SQL & storage",
        percent: 70,
    },
    Skill {
        name: "Go",
        percent: 65,
    },
    Skill {
        name: "Technical writing",
        percent: 85,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Passion {
    pub icon: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
}

pub const PASSIONS: [Passion; 4] = [
    Passion {
        icon: "⚙",
        name: "Performance work",
        detail: "Flamegraphs before guesses.",
    },
    Passion {
        icon: "✎",
        name: "Writing",
        detail: "Long-form notes on systems I take apart.",
    },
    Passion {
        icon: "⛰",
        name: "Trail running",
        detail: "Where the hard problems untangle themselves.",
    },
    Passion {
        icon: "☕",
        name: "Coffee",
        detail: "Single origin, manual grinder, no exceptions.",
    },
];

/// Plain-text rendition of the whole portfolio, used by the print export.
pub fn plain_text() -> String {
    let mut out = String::new();

    out.push_str(&format!("{NAME}\n"));
    out.push_str(&format!("{TAGLINE}\n"));
    out.push_str(&format!("{SITE_URL}\n\n"));

    out.push_str("JOURNEY\n");
    for entry in TIMELINE.iter() {
        out.push_str(&format!(
            "  {}  {} - {}\n",
            entry.year, entry.title, entry.detail
        ));
    }

    out.push_str("\nPROJECTS\n");
    for project in PROJECTS.iter() {
        out.push_str(&format!(
            "  {}  {} [{}]\n",
            project.name,
            project.summary,
            project.tags.join(", ")
        ));
    }

    out.push_str("\nSKILLS\n");
    for skill in SKILLS.iter() {
        out.push_str(&format!("  {}  {}%\n", skill.name, skill.percent));
    }

    out.push_str("\nPASSIONS\n");
    for passion in PASSIONS.iter() {
        out.push_str(&format!(
            "  {} {}  {}\n",
            passion.icon, passion.name, passion.detail
        ));
    }

    out.push_str("\nCONTACT\n");
    out.push_str(&format!("  email: {CONTACT_EMAIL}\n"));
    out.push_str(&format!("  location: {LOCATION}\n"));

    out
}
