//! Page copy. Pure data; the section renderers decide how it looks.

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub struct TitledList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct CaseStudy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub problem: &'static [&'static str],
    pub design: &'static [&'static str],
    pub outcomes: &'static [&'static str],
}

pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_BADGE: &str = "CPR / First Aid Instructor • Experiential Learning";
pub const HERO_TITLE: &str =
    "I design experiences that build confidence, resilience, and leadership.";
pub const HERO_INTRO: &str = "I facilitate team-building and outdoor programs that turn \
challenge into growth. My approach blends adventure-based learning, psychological safety, \
and structured reflection, so participants walk away with real skills and a stronger sense \
of identity.";

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        label: "Programs Facilitated",
        value: "High-impact",
        note: "Experiential, outdoors, and group-based",
    },
    Stat {
        label: "Approach",
        value: "Evidence-aligned",
        note: "Challenge + reflection + integration",
    },
    Stat {
        label: "Safety",
        value: "High standard",
        note: "CPR/First Aid instruction & risk planning",
    },
];

pub const AT_A_GLANCE: Blurb = Blurb {
    title: "At a glance",
    body: "Outdoor & youth development facilitation with a practical, systems-aware lens.",
};

pub const AT_A_GLANCE_BULLETS: [&str; 3] = [
    "High ropes team-building facilitation (trust, communication, leadership).",
    "Snowboard program design & delivery (mastery, resilience, responsibility).",
    "Safety-forward programming with clear expectations and risk awareness.",
];

pub const METHOD_TAGLINE: &str = "Do It Afraid is the guiding methodology: progress doesn't \
require the absence of fear, only the willingness to move through it.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I build growth-focused programs where challenge becomes a structured teacher. I'm \
especially interested in how environment, expectations, and facilitation create the \
conditions for confidence, without relying on hype, pressure, or forced motivation.",
    "My work is practical and people-centered: I plan, facilitate, debrief, and adjust in \
real time so teams and youth can learn through experience, not lectures.",
];

pub const ABOUT_CARDS: [TitledList; 2] = [
    TitledList {
        title: "What I'm great at",
        items: &[
            "Creating psychological safety while keeping challenge real",
            "Reading group dynamics and adjusting facilitation",
            "Building confidence through progressive mastery",
            "Turning experiences into lasting takeaways",
        ],
    },
    TitledList {
        title: "How I work",
        items: &[
            "Clear expectations and roles",
            "Challenge calibrated to the group",
            "Debrief after every key moment",
            "Repeatable frameworks that scale",
        ],
    },
];

pub const CORE_COMPETENCIES: [&str; 8] = [
    "Experiential Learning Design",
    "Team-Building Facilitation",
    "Outdoor & Adventure Programming",
    "Risk Management & Safety Planning",
    "Youth Development",
    "Program Logistics & Operations",
    "Leadership Development",
    "Conflict-aware communication",
];

pub const CASE_STUDIES_INTRO: &str =
    "Two programs that show my facilitation style and design approach.";

pub const CASE_STUDIES: [CaseStudy; 2] = [
    CaseStudy {
        title: "High Ropes Team-Building Facilitation",
        subtitle: "Trust • Communication • Leadership under pressure",
        problem: &[
            "Fear of failure and embarrassment blocks participation",
            "Group communication breaks down under stress",
            "Low self-efficacy leads to avoidance",
        ],
        design: &[
            "Preparation: psychological safety + norms",
            "Challenge: controlled stress + teamwork",
            "Reflection: debriefs that integrate learning",
        ],
        outcomes: &[
            "Stronger group cohesion and accountability",
            "Improved communication in high-pressure moments",
            "Increased confidence through supported risk",
        ],
    },
    CaseStudy {
        title: "Snowboard Program",
        subtitle: "Mastery • Resilience • Responsibility",
        problem: &[
            "Avoidance of challenge due to fear or frustration",
            "Difficulty regulating emotions after setbacks",
            "Limited opportunities to experience competence",
        ],
        design: &[
            "Orientation: environment + equipment + safety",
            "Exposure: progressive skill practice",
            "Integration: reflection that reinforces identity",
        ],
        outcomes: &[
            "Greater frustration tolerance and persistence",
            "Increased willingness to try difficult tasks",
            "Peer support and accountability improved",
        ],
    },
];

pub const FRAMEWORK_INTRO: &str = "\"Do It Afraid\" is a simple methodology for growth: fear \
isn't a stop sign, it's information. The goal isn't to eliminate fear, but to move forward \
with support, structure, and reflection.";

pub const FRAMEWORK_CORE_IDEA: &str =
    "Progress doesn't require the absence of fear, only the willingness to act through it.";

pub const FRAMEWORK_STEPS: [Blurb; 3] = [
    Blurb {
        title: "Experience",
        body: "A challenge that introduces uncertainty or discomfort.",
    },
    Blurb {
        title: "Reflection",
        body: "Guided debrief: emotion, decisions, effort, and outcomes.",
    },
    Blurb {
        title: "Identity",
        body: "A new narrative forms: \"I can handle hard things.\"",
    },
];

pub const FRAMEWORK_MINIS: [TitledList; 2] = [
    TitledList {
        title: "What participants gain",
        items: &[
            "Self-trust",
            "Frustration tolerance",
            "Communication",
            "Leadership",
        ],
    },
    TitledList {
        title: "How I measure success",
        items: &[
            "Engagement",
            "Peer support",
            "Behavior under stress",
            "Carryover to daily life",
        ],
    },
];

pub const SAFETY_INTRO: &str = "Safety isn't a checkbox, it's part of the design. I build \
clear expectations, plan for contingencies, and maintain a calm, structured environment so \
participants can take meaningful risks without reckless ones.";

pub const SAFETY_CARDS: [Blurb; 2] = [
    Blurb {
        title: "CPR / First Aid Instructor",
        body: "Certified to teach life-saving skills and emergency response procedures for \
groups and staff teams.",
    },
    Blurb {
        title: "Program Standards",
        body: "Clear expectations, gear checks, environmental awareness, and behavior-ready \
participation requirements.",
    },
];

pub const SAFETY_PRACTICES: [&str; 4] = [
    "Clear participation criteria (fit-to-participate expectations).",
    "Pre-briefs: roles, boundaries, and behavioral expectations.",
    "Ongoing assessment: group energy, stress signs, and readiness.",
    "Emergency readiness and staff/youth training via CPR/First Aid instruction.",
];

pub const SERVICES_INTRO: &str = "Built for \"all of the above\": career advancement, \
consulting, and long-term independence. I can support organizations with facilitation, \
program design, and training.";

pub const SERVICES_BEST_FIT: &str = "Schools, youth programs, nonprofits, camps, and teams \
looking to build trust, leadership, and resilience through structured challenge.";

pub const SERVICES: [TitledList; 4] = [
    TitledList {
        title: "Team-Building Facilitation",
        items: &[
            "High ropes facilitation",
            "Communication & trust",
            "Debrief + integration",
        ],
    },
    TitledList {
        title: "Program Design",
        items: &[
            "Curriculum & progression",
            "Risk planning",
            "Outcomes & evaluation",
        ],
    },
    TitledList {
        title: "Safety Training",
        items: &[
            "CPR / First Aid instruction",
            "Emergency readiness",
            "Group safety expectations",
        ],
    },
    TitledList {
        title: "Do It Afraid Workshops",
        items: &[
            "Resilience under stress",
            "Fear-to-action tools",
            "Identity-building practices",
        ],
    },
];

pub const PACKAGE_PITCH: Blurb = Blurb {
    title: "Want a simple package?",
    body: "I can build a half-day or full-day experience that includes a pre-brief, \
facilitated challenge blocks, and a structured debrief that creates carryover to daily life.",
};

pub const CONTACT_INTRO: &str = "Want to collaborate, hire me for facilitation, or talk \
program design? Send a message and I'll follow up.";

pub const CONTACT_QUICK_NOTE: &str = "If you tell me your goals, group size, location, and \
timeline, I can recommend a program structure.";

pub const CONTACT_FORM_NOTE: &str = "This form is a template. When you publish your site, you \
can connect it to an email service or keep it as a mailto link.";

pub const FOOTER_TAGLINE: &str = "Do It Afraid";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_studies_fill_every_column() {
        for study in &CASE_STUDIES {
            assert!(!study.problem.is_empty(), "{}", study.title);
            assert!(!study.design.is_empty(), "{}", study.title);
            assert!(!study.outcomes.is_empty(), "{}", study.title);
        }
    }
}
